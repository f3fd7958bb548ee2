//! Question wording shared by both editions. Each topic is a primary question
//! whose `label` and `category` are filled in by the edition that uses it.

use super::catalog::{AnswerOption, Question, QuestionKind};

const NOT_APPLICABLE: AnswerOption =
    AnswerOption::not_applicable("We consider that these issues are not applicable to our case.");

const fn topic(
    title: &'static str,
    prompt: &'static str,
    details: &'static [&'static str],
    options: &'static [AnswerOption],
) -> Question {
    Question {
        label: "",
        category: "",
        kind: QuestionKind::Primary,
        title,
        prompt,
        details,
        options,
    }
}

pub(super) const FUNDAMENTAL_RIGHTS: Question = topic(
    "Inform on how it is respecting fundamental rights of individuals",
    "How are you dealing with the effect of the application on the rights to safety, health, non-discrimination, and freedom of association?",
    &[],
    &[
        AnswerOption::points(
            "We've performed a clear analysis in response to these principles and can provide details.",
            2,
        ),
        AnswerOption::points(
            "We have partially/informally considered these principles but no specific details can be provided.",
            1,
        ),
        AnswerOption::points("We have not considered these issues yet.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const PRIVACY: Question = topic(
    "Privacy and data protection",
    "Is data collection compliant with the General Data Protection Regulation (GDPR) and does it respect the privacy of the users?",
    &["Note: A Data Protection Impact Assessment (DPIA) must be carried out before deploying any system."],
    &[
        AnswerOption::points(
            "The purpose of the AI system and the mechanisms to assess its usage are clearly defined and compliant with GDPR, a DPIA has been performed and privacy of individuals is guaranteed. We can provide further information.",
            2,
        ),
        AnswerOption::points(
            "We have only done a partial/informal analysis and/or not all aspects of data and privacy protection are clear.",
            1,
        ),
        AnswerOption::points("We cannot guarantee privacy and data protection.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const TRANSPARENCY: Question = topic(
    "Transparency rights",
    "Do you include the right of users to:",
    &[
        "be notified that their data is being processed/collected,",
        "access information on which personal data are collected,",
        "control their own data,",
        "access explanations of results produced by the system,",
        "be informed of who, when, and how the system can be audited.",
    ],
    &[
        AnswerOption::points("All of the above are fulfilled.", 2),
        AnswerOption::points("Only some of the above are fulfilled or partially addressed.", 1),
        AnswerOption::points("We cannot guarantee any transparency aspects.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const ACCESSIBILITY: Question = topic(
    "Accessibility",
    "Can your app/system/resource be used by all regardless of demographics, language, disability, digital literacy, and financial accessibility?",
    &[],
    &[
        AnswerOption::points(
            "This resource is fully accessible, and we can provide information on accessibility accommodations.",
            2,
        ),
        AnswerOption::points(
            "This resource partially complies with accessibility requirements.",
            1,
        ),
        AnswerOption::points("This resource is not accessible to all.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const EDUCATION: Question = topic(
    "Education and tutorials",
    "Do you ensure that users are informed and capable of using the system correctly?",
    &[],
    &[
        AnswerOption::points("We provide complete in-system help.", 2),
        AnswerOption::points("We provide support through external materials, e.g. website.", 1),
        AnswerOption::points("We do not provide user support.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const DATA_MANAGEMENT: Question = topic(
    "Data management",
    "Do you comply with the data-minimization principle, i.e. usage of local and temporary storage and encryption, based on principles of data protection by design? Do you ensure that only strictly necessary data are captured and processed?",
    &[],
    &[
        AnswerOption::points(
            "We use local and temporary storage and data encryption methods. We only collect and process strictly necessary data. We can provide further information.",
            2,
        ),
        AnswerOption::points(
            "We partially comply with the above, and some documentation can be provided.",
            1,
        ),
        AnswerOption::points("We do not comply with these data management aspects.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const SECURITY: Question = topic(
    "Security",
    "Do you have user authentication in place to prevent risks such as access, modification, or disclosure of the data? Do you use unique and pseudo-random identifiers, renewed regularly and cryptographically strong?",
    &[],
    &[
        AnswerOption::points(
            "Strong security elements are in place, e.g. user authentication, unique identifiers regularly renewed. We can provide further information.",
            2,
        ),
        AnswerOption::points("Some security features are in place.", 1),
        AnswerOption::points("No security features are in place.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const DEACTIVATION: Question = topic(
    "Ease to deactivate/remove",
    "How easy is it to deactivate or remove the system and data once users are no longer interested or need the system?",
    &[],
    &[
        AnswerOption::points(
            "Very easy, either through clear instructions or automatically by the sunset clause.",
            2,
        ),
        AnswerOption::points(
            "Instructions on how to deactivate or remove the system and data are unclear.",
            1,
        ),
        AnswerOption::points(
            "There are no instructions or automated procedures to remove the system and the data.",
            0,
        ),
        NOT_APPLICABLE,
    ],
);

pub(super) const ALTERNATIVES: Question = topic(
    "Ease to access services without using the AI system",
    "In the case of AI systems aimed to replace or complement public services, are there full non-system alternatives?",
    &[],
    &[
        AnswerOption::points("Yes, there is an easily accessible full non-system alternative.", 2),
        AnswerOption::points(
            "There is a partial alternative or access to the full alternative is unclear.",
            1,
        ),
        AnswerOption::points("There is no alternative to the AI system for this service.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const OPEN_SOURCE: Question = topic(
    "Open-source code",
    "Is the development participatory and multidisciplinary? What kind of access to the code and development is there?",
    &[],
    &[
        AnswerOption::points("The code and development are open-source.", 2),
        AnswerOption::points(
            "The code is open-source code without the possibility of contributing.",
            1,
        ),
        AnswerOption::points("Non-open-source code.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const OWNERSHIP: Question = topic(
    "Ownership",
    "Is the ownership of the resource clear?",
    &[],
    &[
        AnswerOption::points(
            "Ownership of the resource (including code, data, use) is clear and explicit.",
            2,
        ),
        AnswerOption::points("Some ownership aspects are made clear.", 1),
        AnswerOption::points(
            "Ownership information for the resource and related code or data is unavailable.",
            0,
        ),
        NOT_APPLICABLE,
    ],
);

pub(super) const DATA_GOVERNANCE: Question = topic(
    "Openness over data governance",
    "How open is data governance?",
    &[],
    &[
        AnswerOption::points("Open data governance.", 2),
        AnswerOption::points("Intermediate openness of data governance.", 1),
        AnswerOption::points("Private/opaque settings.", 0),
        NOT_APPLICABLE,
    ],
);

pub(super) const LEGISLATION: Question = topic(
    "Legislation and policy",
    "Are there explicit legislation and/or other policies relevant to your system/resource?",
    &[],
    &[
        AnswerOption::points(
            "The system is covered by an explicit clear, legal framework or sectorial formal policies, and we address these explicitly.",
            2,
        ),
        AnswerOption::points(
            "We are aware of policy partially relevant to our system and address these sufficiently.",
            1,
        ),
        AnswerOption::points(
            "We are not aware of any relevant legislation or policy and do not address these.",
            0,
        ),
        NOT_APPLICABLE,
    ],
);

pub(super) const DESIGN_PROCESS: Question = topic(
    "Design impact assessment and open development process",
    "How explicit is the design process leading to this resource?",
    &[],
    &[
        AnswerOption::points(
            "Explicit information on the design process is available, including a clear description of aims and motivation, stakeholders, public consultation process and impact assessment.",
            2,
        ),
        AnswerOption::points(
            "Some information on the design process, aims and motivation, and impact assessment is available.",
            1,
        ),
        AnswerOption::points(
            "There is no information on the design and impact of the resource.",
            0,
        ),
        NOT_APPLICABLE,
    ],
);

pub(super) const CONTESTABILITY: Question = topic(
    "Right to contest/liability",
    "Are users able to contest decisions/actions or demand human intervention?",
    &[],
    &[
        AnswerOption::points(
            "Processes for contesting and/or demanding human intervention are set up and clearly available.",
            2,
        ),
        AnswerOption::points("Some contestability or intervention processes are available.", 1),
        AnswerOption::points(
            "It is not possible to contest the system's output nor to demand human intervention.",
            0,
        ),
        NOT_APPLICABLE,
    ],
);

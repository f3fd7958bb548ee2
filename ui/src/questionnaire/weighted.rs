//! Fifteen-category edition with conditional follow-ups.
//!
//! Each follow-up sits directly after the primary question it depends on and is
//! only asked when that primary scored 0 or 1.

use super::catalog::{AnswerOption, Catalog, ColumnScheme, Edition, Question, QuestionKind};
use super::topics;

const RIGHTS: &str = "Fundamental rights";
const PRIVACY: &str = "Privacy";
const TRANSPARENCY: &str = "Transparency";
const ACCESSIBILITY: &str = "Accessibility";
const EDUCATION: &str = "Education";
const DATA_MANAGEMENT: &str = "Data management";
const SECURITY: &str = "Security";
const DEACTIVATION: &str = "Deactivation";
const ALTERNATIVES: &str = "Alternatives";
const OPEN_SOURCE: &str = "Open source";
const OWNERSHIP: &str = "Ownership";
const DATA_GOVERNANCE: &str = "Data governance";
const LEGISLATION: &str = "Legislation";
const DESIGN_PROCESS: &str = "Design process";
const CONTESTABILITY: &str = "Contestability";

pub(super) static CATALOG: Catalog = Catalog {
    edition: Edition::Weighted,
    title: "AI Governance Self-Assessment",
    scheme: ColumnScheme::PerCategory,
    categories: &[
        RIGHTS,
        PRIVACY,
        TRANSPARENCY,
        ACCESSIBILITY,
        EDUCATION,
        DATA_MANAGEMENT,
        SECURITY,
        DEACTIVATION,
        ALTERNATIVES,
        OPEN_SOURCE,
        OWNERSHIP,
        DATA_GOVERNANCE,
        LEGISLATION,
        DESIGN_PROCESS,
        CONTESTABILITY,
    ],
    questions: &QUESTIONS,
};

const FOLLOW_UP_NOT_APPLICABLE: AnswerOption =
    AnswerOption::not_applicable("This follow-up does not apply to our case.");

const fn follow_up(
    label: &'static str,
    category: &'static str,
    title: &'static str,
    prompt: &'static str,
    options: &'static [AnswerOption],
) -> Question {
    Question {
        label,
        category,
        kind: QuestionKind::FollowUp,
        title,
        prompt,
        details: &[],
        options,
    }
}

static QUESTIONS: [Question; 20] = [
    Question { label: "Q1", category: RIGHTS, ..topics::FUNDAMENTAL_RIGHTS },
    Question { label: "Q2", category: PRIVACY, ..topics::PRIVACY },
    follow_up(
        "Q2a",
        PRIVACY,
        "Data protection impact assessment",
        "Is a DPIA scheduled before the system is deployed?",
        &[
            AnswerOption::points("Yes, a DPIA is scheduled and has a named owner.", 1),
            AnswerOption::points("No DPIA is planned yet.", 0),
            FOLLOW_UP_NOT_APPLICABLE,
        ],
    ),
    Question { label: "Q3", category: TRANSPARENCY, ..topics::TRANSPARENCY },
    follow_up(
        "Q3a",
        TRANSPARENCY,
        "Closing transparency gaps",
        "Is there a documented plan to provide the transparency rights that are still missing?",
        &[
            AnswerOption::points("Yes, a documented plan with target dates exists.", 1),
            AnswerOption::points("No plan exists yet.", 0),
            FOLLOW_UP_NOT_APPLICABLE,
        ],
    ),
    Question { label: "Q4", category: ACCESSIBILITY, ..topics::ACCESSIBILITY },
    Question { label: "Q5", category: EDUCATION, ..topics::EDUCATION },
    Question { label: "Q6", category: DATA_MANAGEMENT, ..topics::DATA_MANAGEMENT },
    Question { label: "Q7", category: SECURITY, ..topics::SECURITY },
    follow_up(
        "Q7a",
        SECURITY,
        "Independent security review",
        "Has an independent security review or penetration test been scheduled?",
        &[
            AnswerOption::points("Yes, a review is scheduled.", 1),
            AnswerOption::points("No review is scheduled.", 0),
            FOLLOW_UP_NOT_APPLICABLE,
        ],
    ),
    Question { label: "Q8", category: DEACTIVATION, ..topics::DEACTIVATION },
    Question { label: "Q9", category: ALTERNATIVES, ..topics::ALTERNATIVES },
    Question { label: "Q10", category: OPEN_SOURCE, ..topics::OPEN_SOURCE },
    Question { label: "Q11", category: OWNERSHIP, ..topics::OWNERSHIP },
    Question { label: "Q12", category: DATA_GOVERNANCE, ..topics::DATA_GOVERNANCE },
    Question { label: "Q13", category: LEGISLATION, ..topics::LEGISLATION },
    follow_up(
        "Q13a",
        LEGISLATION,
        "Legal advice",
        "Have you sought legal advice on the framework that applies to your system?",
        &[
            AnswerOption::points("Yes, legal advice has been obtained or requested.", 1),
            AnswerOption::points("No legal advice has been sought.", 0),
            FOLLOW_UP_NOT_APPLICABLE,
        ],
    ),
    Question { label: "Q14", category: DESIGN_PROCESS, ..topics::DESIGN_PROCESS },
    Question { label: "Q15", category: CONTESTABILITY, ..topics::CONTESTABILITY },
    follow_up(
        "Q15a",
        CONTESTABILITY,
        "Human review channel",
        "Is a human review channel for contested decisions planned?",
        &[
            AnswerOption::points("Yes, a human review channel is planned.", 1),
            AnswerOption::points("No human review channel is planned.", 0),
            FOLLOW_UP_NOT_APPLICABLE,
        ],
    ),
];

//! Three-pillar edition: fifteen primary questions scored one column each.

use super::catalog::{Catalog, ColumnScheme, Edition, Question};
use super::topics;

const IMPACT: &str = "Impact";
const TECHNOLOGY: &str = "Technology";
const GOVERNANCE: &str = "Governance";

pub(super) static CATALOG: Catalog = Catalog {
    edition: Edition::Classic,
    title: "AI Guidelines Questionnaire for Companies",
    scheme: ColumnScheme::PerQuestion,
    categories: &[IMPACT, TECHNOLOGY, GOVERNANCE],
    questions: &QUESTIONS,
};

static QUESTIONS: [Question; 15] = [
    Question { label: "Impact Q1", category: IMPACT, ..topics::FUNDAMENTAL_RIGHTS },
    Question { label: "Impact Q2", category: IMPACT, ..topics::PRIVACY },
    Question { label: "Impact Q3", category: IMPACT, ..topics::TRANSPARENCY },
    Question { label: "Impact Q4", category: IMPACT, ..topics::ACCESSIBILITY },
    Question { label: "Impact Q5", category: IMPACT, ..topics::EDUCATION },
    Question { label: "Technology Q6", category: TECHNOLOGY, ..topics::DATA_MANAGEMENT },
    Question { label: "Technology Q7", category: TECHNOLOGY, ..topics::SECURITY },
    Question { label: "Technology Q8", category: TECHNOLOGY, ..topics::DEACTIVATION },
    Question { label: "Technology Q9", category: TECHNOLOGY, ..topics::ALTERNATIVES },
    Question { label: "Technology Q10", category: TECHNOLOGY, ..topics::OPEN_SOURCE },
    Question { label: "Governance Q11", category: GOVERNANCE, ..topics::OWNERSHIP },
    Question { label: "Governance Q12", category: GOVERNANCE, ..topics::DATA_GOVERNANCE },
    Question { label: "Governance Q13", category: GOVERNANCE, ..topics::LEGISLATION },
    Question { label: "Governance Q14", category: GOVERNANCE, ..topics::DESIGN_PROCESS },
    Question { label: "Governance Q15", category: GOVERNANCE, ..topics::CONTESTABILITY },
];

//! Static question catalog types.
//!
//! A catalog is plain data: an ordered list of questions, each carrying its
//! category tag, its options and the score every option resolves to. Nothing
//! here has side effects; the scoring engine reads it and the form host renders
//! it.

use serde::{Deserialize, Serialize};

use crate::core::error::AssessmentError;

use super::{classic, weighted};

/// Ordinal position of a question inside its catalog.
pub type QuestionId = usize;

/// Name of the column holding the report date.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Score an option resolves to.
///
/// `NotApplicable` is the "N/A" sentinel (exported as `-1`). It never counts
/// towards a category, neither as earned nor as possible points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    Points(u8),
    NotApplicable,
}

impl Score {
    pub const SENTINEL: i8 = -1;

    pub const fn value(self) -> i8 {
        match self {
            Score::Points(points) => points as i8,
            Score::NotApplicable => Self::SENTINEL,
        }
    }

    pub const fn contributes(self) -> bool {
        matches!(self, Score::Points(_))
    }

    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            Self::SENTINEL => Some(Score::NotApplicable),
            0..=2 => Some(Score::Points(value as u8)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub score: Score,
}

impl AnswerOption {
    pub const fn points(label: &'static str, points: u8) -> Self {
        Self {
            label,
            score: Score::Points(points),
        }
    }

    pub const fn not_applicable(label: &'static str) -> Self {
        Self {
            label,
            score: Score::NotApplicable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Always shown; adds 2 possible points when answered.
    Primary,
    /// Shown only when the immediately preceding primary question scored 0 or 1;
    /// adds 1 possible point when answered.
    FollowUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Short label, doubling as the report column in per-question catalogs.
    pub label: &'static str,
    pub category: &'static str,
    pub kind: QuestionKind,
    pub title: &'static str,
    pub prompt: &'static str,
    pub details: &'static [&'static str],
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Possible points added to the category when this question is answered.
    pub const fn increment(&self) -> u32 {
        match self.kind {
            QuestionKind::Primary => 2,
            QuestionKind::FollowUp => 1,
        }
    }

    pub const fn is_follow_up(&self) -> bool {
        matches!(self.kind, QuestionKind::FollowUp)
    }

    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }
}

/// Visibility predicate for follow-up questions, evaluated against the score of
/// the anchor (the immediately preceding primary question).
///
/// The follow-up is asked only when the anchor scored 0 or 1: never when it was
/// fully compliant, marked N/A, or left unanswered.
pub fn follow_up_visible(anchor: Option<Score>) -> bool {
    matches!(anchor, Some(Score::Points(0 | 1)))
}

/// How a completed run is laid out in a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnScheme {
    /// One raw score column per question.
    PerQuestion,
    /// One earned/possible ratio column per category.
    PerCategory,
}

/// Catalog editions. `Classic` is the three-pillar questionnaire scored per
/// question; `Weighted` scores fifteen categories with conditional follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    Classic,
    #[default]
    Weighted,
}

impl Edition {
    pub fn catalog(self) -> &'static Catalog {
        match self {
            Edition::Classic => &classic::CATALOG,
            Edition::Weighted => &weighted::CATALOG,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    pub edition: Edition,
    pub title: &'static str,
    pub scheme: ColumnScheme,
    pub categories: &'static [&'static str],
    pub questions: &'static [Question],
}

impl Catalog {
    pub fn question(&self, id: QuestionId) -> Result<&Question, AssessmentError> {
        self.questions
            .get(id)
            .ok_or(AssessmentError::UnknownQuestion(id))
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|name| *name == category)
    }

    /// Anchor of a follow-up: the closest primary question before it.
    pub fn anchor_of(&self, id: QuestionId) -> Option<QuestionId> {
        let question = self.questions.get(id)?;
        if !question.is_follow_up() {
            return None;
        }
        self.questions[..id]
            .iter()
            .rposition(|candidate| !candidate.is_follow_up())
    }

    /// Data columns of a report row in declared order (timestamp excluded).
    pub fn data_columns(&self) -> Vec<String> {
        match self.scheme {
            ColumnScheme::PerQuestion => self
                .questions
                .iter()
                .map(|question| question.label.to_string())
                .collect(),
            ColumnScheme::PerCategory => self
                .categories
                .iter()
                .map(|category| category.to_string())
                .collect(),
        }
    }

    /// Full header of an exported report table.
    pub fn report_columns(&self) -> Vec<String> {
        let mut columns = self.data_columns();
        columns.push(TIMESTAMP_COLUMN.to_string());
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDITIONS: [Edition; 2] = [Edition::Classic, Edition::Weighted];

    #[test]
    fn every_option_maps_to_an_allowed_score() {
        for edition in EDITIONS {
            for question in edition.catalog().questions {
                assert!(!question.options.is_empty(), "{} has no options", question.label);
                for option in question.options {
                    assert!(
                        [2, 1, 0, -1].contains(&option.score.value()),
                        "{} maps `{}` outside the allowed set",
                        question.label,
                        option.label
                    );
                }
            }
        }
    }

    #[test]
    fn contributing_points_never_exceed_the_increment() {
        for edition in EDITIONS {
            for question in edition.catalog().questions {
                for option in question.options {
                    if let Score::Points(points) = option.score {
                        assert!(u32::from(points) <= question.increment(), "{}", question.label);
                    }
                }
            }
        }
    }

    #[test]
    fn every_question_offers_a_not_applicable_option() {
        for edition in EDITIONS {
            for question in edition.catalog().questions {
                let sentinels = question
                    .options
                    .iter()
                    .filter(|option| option.score == Score::NotApplicable)
                    .count();
                assert_eq!(sentinels, 1, "{}", question.label);
            }
        }
    }

    #[test]
    fn categories_are_declared() {
        for edition in EDITIONS {
            let catalog = edition.catalog();
            for question in catalog.questions {
                assert!(catalog.category_index(question.category).is_some(), "{}", question.label);
            }
            for category in catalog.categories {
                assert!(
                    catalog.questions.iter().any(|q| q.category == *category),
                    "category {category} has no question"
                );
            }
        }
    }

    #[test]
    fn follow_ups_sit_right_after_a_primary_of_the_same_category() {
        for edition in EDITIONS {
            let catalog = edition.catalog();
            assert!(!catalog.questions[0].is_follow_up());
            for (id, question) in catalog.questions.iter().enumerate() {
                if question.is_follow_up() {
                    let anchor = catalog.anchor_of(id).expect("follow-up without anchor");
                    assert_eq!(anchor, id - 1, "{} is detached from its anchor", question.label);
                    assert_eq!(catalog.questions[anchor].category, question.category);
                }
            }
        }
    }

    #[test]
    fn classic_shape() {
        let catalog = Edition::Classic.catalog();
        assert_eq!(catalog.questions.len(), 15);
        assert_eq!(catalog.categories, &["Impact", "Technology", "Governance"]);
        assert!(catalog.questions.iter().all(|q| q.options.len() == 4));
        assert_eq!(catalog.report_columns().len(), 16);
        assert_eq!(catalog.report_columns()[0], "Impact Q1");
        assert_eq!(catalog.report_columns()[15], TIMESTAMP_COLUMN);
    }

    #[test]
    fn weighted_shape() {
        let catalog = Edition::Weighted.catalog();
        assert_eq!(catalog.categories.len(), 15);
        assert_eq!(catalog.questions.iter().filter(|q| !q.is_follow_up()).count(), 15);
        assert!(catalog.questions.iter().any(Question::is_follow_up));
        assert_eq!(catalog.report_columns().len(), 16);
    }

    #[test]
    fn unknown_question_is_reported() {
        let catalog = Edition::Classic.catalog();
        assert_eq!(catalog.question(99), Err(AssessmentError::UnknownQuestion(99)));
    }

    #[test]
    fn visibility_only_for_partial_or_failing_anchors() {
        assert!(follow_up_visible(Some(Score::Points(0))));
        assert!(follow_up_visible(Some(Score::Points(1))));
        assert!(!follow_up_visible(Some(Score::Points(2))));
        assert!(!follow_up_visible(Some(Score::NotApplicable)));
        assert!(!follow_up_visible(None));
    }

    #[test]
    fn sentinel_round_trips_through_value() {
        assert_eq!(Score::from_value(-1), Some(Score::NotApplicable));
        assert_eq!(Score::from_value(2), Some(Score::Points(2)));
        assert_eq!(Score::from_value(3), None);
    }
}

//! Question catalogs, the scoring engine and the form that collects answers.

mod catalog;
mod classic;
mod engine;
mod topics;
mod view;
mod weighted;

pub use catalog::{
    follow_up_visible, AnswerOption, Catalog, ColumnScheme, Edition, Question, QuestionId,
    QuestionKind, Score, TIMESTAMP_COLUMN,
};
pub use engine::{
    accumulate, finalize, score_answer, Accumulators, CategoryScore, CategoryValue, Evaluation,
    QuestionnaireRun, ResolvedAnswer, Tally,
};
pub use view::QuestionnaireView;

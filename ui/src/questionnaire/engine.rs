//! Scoring engine: resolves selected options into scores, folds them into
//! per-category tallies and turns the tallies into ratios.
//!
//! Gating of follow-up questions uses an explicit "last anchor score" carried
//! through the walk over the catalog; no shared state is mutated between runs.

use std::collections::BTreeMap;

use crate::core::error::AssessmentError;

use super::catalog::{follow_up_visible, Catalog, Edition, Question, QuestionId, Score};

/// Score of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub score: Score,
    /// Raw value (2/1/0, or -1 for the N/A sentinel).
    pub value: i8,
    /// False for the N/A sentinel.
    pub contributes: bool,
}

impl From<Score> for ResolvedAnswer {
    fn from(score: Score) -> Self {
        Self {
            score,
            value: score.value(),
            contributes: score.contributes(),
        }
    }
}

/// Resolve an option ordinal to its score. Options are addressed by position,
/// never by their display text.
pub fn score_answer(
    catalog: &Catalog,
    question: QuestionId,
    option: usize,
) -> Result<ResolvedAnswer, AssessmentError> {
    let entry = catalog.question(question)?;
    let chosen = entry
        .option(option)
        .ok_or(AssessmentError::InvalidSelection {
            question,
            index: option,
            options: entry.options.len(),
        })?;
    Ok(chosen.score.into())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub earned: u32,
    pub possible: u32,
}

impl Tally {
    pub fn value(&self) -> CategoryValue {
        if self.possible == 0 {
            CategoryValue::Unscored
        } else {
            CategoryValue::Ratio(f64::from(self.earned) / f64::from(self.possible))
        }
    }
}

/// Earned/possible points per category, in the catalog's declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulators {
    categories: &'static [&'static str],
    tallies: Vec<Tally>,
}

impl Accumulators {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories,
            tallies: vec![Tally::default(); catalog.categories.len()],
        }
    }

    pub fn tally(&self, category: &str) -> Option<Tally> {
        let index = self.categories.iter().position(|name| *name == category)?;
        self.tallies.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Tally)> + '_ {
        self.categories.iter().copied().zip(self.tallies.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.iter().all(|tally| tally.possible == 0)
    }
}

/// Fold one answered question into the tallies.
///
/// N/A answers leave both sides untouched. Otherwise `possible` grows by the
/// question's increment (2 primary, 1 follow-up) and `earned` by the score.
pub fn accumulate(
    mut accumulators: Accumulators,
    question: &Question,
    answer: ResolvedAnswer,
) -> Accumulators {
    if !answer.contributes {
        return accumulators;
    }
    let Some(index) = accumulators
        .categories
        .iter()
        .position(|name| *name == question.category)
    else {
        tracing::warn!(
            category = question.category,
            question = question.label,
            "question category missing from accumulators"
        );
        return accumulators;
    };
    let tally = &mut accumulators.tallies[index];
    tally.possible += question.increment();
    tally.earned += u32::from(answer.value.max(0).unsigned_abs());
    accumulators
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryValue {
    Ratio(f64),
    /// No question of the category was answered with a contributing option.
    Unscored,
}

impl CategoryValue {
    pub fn ratio(self) -> Option<f64> {
        match self {
            CategoryValue::Ratio(ratio) => Some(ratio),
            CategoryValue::Unscored => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScore {
    pub category: &'static str,
    pub value: CategoryValue,
}

pub fn finalize(accumulators: &Accumulators) -> Vec<CategoryScore> {
    accumulators
        .iter()
        .map(|(category, tally)| CategoryScore {
            category,
            value: tally.value(),
        })
        .collect()
}

/// Outcome of walking a run through the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub edition: Edition,
    pub accumulators: Accumulators,
    /// Score per question id; `None` when the question was hidden or unanswered.
    pub per_question: Vec<Option<Score>>,
    pub answered: usize,
}

impl Evaluation {
    pub fn category_scores(&self) -> Vec<CategoryScore> {
        finalize(&self.accumulators)
    }
}

/// In-progress answers of one questionnaire run, keyed by question id.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireRun {
    catalog: &'static Catalog,
    selections: BTreeMap<QuestionId, usize>,
}

impl QuestionnaireRun {
    pub fn new(edition: Edition) -> Self {
        Self {
            catalog: edition.catalog(),
            selections: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn selection(&self, question: QuestionId) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    pub fn answered(&self) -> usize {
        self.selections.len()
    }

    /// Record a selection. Follow-ups hidden by the new answer lose their
    /// selection so they can never leak into a later evaluation.
    pub fn select(
        &mut self,
        question: QuestionId,
        option: usize,
    ) -> Result<ResolvedAnswer, AssessmentError> {
        let answer = score_answer(self.catalog, question, option)?;
        self.selections.insert(question, option);
        self.prune_hidden();
        Ok(answer)
    }

    pub fn clear(&mut self, question: QuestionId) {
        self.selections.remove(&question);
        self.prune_hidden();
    }

    pub fn reset(&mut self) {
        self.selections.clear();
    }

    /// Whether the question should be rendered given the current selections.
    pub fn is_visible(&self, question: QuestionId) -> bool {
        match self.catalog.anchor_of(question) {
            None => question < self.catalog.questions.len(),
            Some(anchor) => follow_up_visible(self.anchor_score(anchor)),
        }
    }

    pub fn visible_questions(&self) -> Vec<QuestionId> {
        (0..self.catalog.questions.len())
            .filter(|id| self.is_visible(*id))
            .collect()
    }

    fn anchor_score(&self, anchor: QuestionId) -> Option<Score> {
        let option = self.selection(anchor)?;
        score_answer(self.catalog, anchor, option)
            .ok()
            .map(|answer| answer.score)
    }

    fn prune_hidden(&mut self) {
        let hidden: Vec<QuestionId> = self
            .selections
            .keys()
            .copied()
            .filter(|id| !self.is_visible(*id))
            .collect();
        for id in hidden {
            tracing::debug!(question = id, "dropping answer of hidden follow-up");
            self.selections.remove(&id);
        }
    }

    /// Score every visible, answered question in catalog order.
    pub fn evaluate(&self) -> Result<Evaluation, AssessmentError> {
        let catalog = self.catalog;
        let mut accumulators = Accumulators::new(catalog);
        let mut per_question = vec![None; catalog.questions.len()];
        let mut answered = 0;
        let mut last_anchor: Option<Score> = None;

        for (id, question) in catalog.questions.iter().enumerate() {
            if question.is_follow_up() && !follow_up_visible(last_anchor) {
                continue;
            }
            let resolved = match self.selection(id) {
                Some(option) => Some(score_answer(catalog, id, option)?),
                None => None,
            };
            if !question.is_follow_up() {
                last_anchor = resolved.map(|answer| answer.score);
            }
            let Some(answer) = resolved else {
                continue;
            };
            per_question[id] = Some(answer.score);
            answered += 1;
            accumulators = accumulate(accumulators, question, answer);
        }

        if answered == 0 {
            return Err(AssessmentError::EmptySubmission);
        }

        tracing::debug!(edition = ?catalog.edition, answered, "evaluated questionnaire run");
        Ok(Evaluation {
            edition: catalog.edition,
            accumulators,
            per_question,
            answered,
        })
    }
}

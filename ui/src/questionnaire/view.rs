use dioxus::prelude::*;

use crate::core::{error::AssessmentError, format, storage};
use crate::questionnaire::{
    CategoryValue, ColumnScheme, Edition, Evaluation, QuestionId, QuestionKind,
};
use crate::results::{format_cell, today};
use crate::t;
use crate::views::{use_session, use_settings};

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Previewed,
    Submitted(usize),
    Empty,
    Error(String),
}

#[component]
pub fn QuestionnaireView() -> Element {
    let session = use_session();
    let mut settings = use_settings();
    let mut status = use_signal(|| FormStatus::Idle);

    let Some(snapshot) = session.with(|state| state.clone()) else {
        return rsx! {
            p { class: "results-card__placeholder", {t!("assessment-session-closed")} }
        };
    };
    let run = snapshot.run();
    let catalog = run.catalog();
    let edition = catalog.edition;

    let on_edition = move |evt: FormEvent| {
        let edition = match evt.value().as_str() {
            "classic" => Edition::Classic,
            _ => Edition::Weighted,
        };
        session.with_mut(|state| state.set_edition(edition));
        settings.write().edition = edition;
        if let Some(path) = storage::config_path() {
            if let Err(err) = settings.read().save_to(&path) {
                tracing::warn!(path = %path.display(), %err, "could not save settings");
            }
        }
        status.set(FormStatus::Idle);
    };

    let preview = move |_| {
        let outcome = session.with_mut(|state| state.preview(today()).map(|_| ()));
        status.set(match outcome {
            Some(Ok(())) => FormStatus::Previewed,
            Some(Err(AssessmentError::EmptySubmission)) => FormStatus::Empty,
            Some(Err(err)) => FormStatus::Error(err.to_string()),
            None => FormStatus::Error(t!("assessment-session-closed")),
        });
    };

    let submit = move |_| {
        let outcome = session.with_mut(|state| {
            let submitted = state.submit(today()).map(|_| ());
            submitted.map(|()| state.table().len())
        });
        status.set(match outcome {
            Some(Ok(rows)) => FormStatus::Submitted(rows),
            Some(Err(AssessmentError::EmptySubmission)) => FormStatus::Empty,
            Some(Err(err)) => FormStatus::Error(err.to_string()),
            None => FormStatus::Error(t!("assessment-session-closed")),
        });
    };

    let reset = move |_| {
        session.with_mut(|state| state.reset_answers());
        status.set(FormStatus::Idle);
    };

    let edition_value = match edition {
        Edition::Classic => "classic",
        Edition::Weighted => "weighted",
    };
    let scored = match catalog.scheme {
        ColumnScheme::PerCategory => run
            .evaluate()
            .ok()
            .map(|evaluation| scored_count(&evaluation)),
        ColumnScheme::PerQuestion => None,
    };
    let visible = run.visible_questions();
    let answered = run.answered();
    let total = visible.len();

    let feedback = match status() {
        FormStatus::Idle => None,
        FormStatus::Previewed => Some((
            "results-card__meta results-card__meta--success",
            t!("assessment-previewed"),
        )),
        FormStatus::Submitted(rows) => Some((
            "results-card__meta results-card__meta--success",
            t!("assessment-submitted", rows = rows),
        )),
        FormStatus::Empty => Some(("results-card__placeholder", t!("assessment-empty"))),
        FormStatus::Error(err) => Some(("results-card__meta results-card__meta--error", err)),
    };

    let summary: Vec<(String, String)> = snapshot
        .current()
        .map(|record| {
            let columns = catalog.data_columns();
            columns
                .into_iter()
                .zip(record.cells.iter())
                .map(|(column, cell)| (column, format_cell(cell, catalog.scheme)))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "assessment",
            div { class: "assessment__toolbar",
                label { r#for: "edition-select", {t!("assessment-edition-label")} }
                select {
                    id: "edition-select",
                    value: "{edition_value}",
                    oninput: on_edition,
                    option { value: "weighted", {t!("edition-weighted")} }
                    option { value: "classic", {t!("edition-classic")} }
                }
                span { class: "assessment__progress",
                    {t!("assessment-progress", answered = answered, total = total)}
                }
            }

            h2 { class: "assessment__title", "{catalog.title}" }

            for id in visible.into_iter() {
                QuestionCard { key: "{edition_value}-{id}", id }
            }

            div { class: "assessment__actions",
                button {
                    r#type: "button",
                    class: "button",
                    onclick: preview,
                    {t!("assessment-preview")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: submit,
                    {t!("assessment-submit")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: reset,
                    {t!("assessment-reset")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }

            if !summary.is_empty() {
                section { class: "results-card assessment__summary",
                    div { class: "results-card__header",
                        h2 { {t!("assessment-summary-title")} }
                        if catalog.scheme == ColumnScheme::PerCategory {
                            span { class: "results-card__meta", {t!("assessment-summary-ratio")} }
                        }
                    }
                    dl { class: "assessment__scores",
                        for (column, value) in summary.into_iter() {
                            div { key: "{column}", class: "assessment__score",
                                dt { "{column}" }
                                dd { "{value}" }
                            }
                        }
                    }
                }
            }

            if let Some(scored) = scored {
                p { class: "results-card__meta",
                    {t!("assessment-scored-categories", scored = scored, total = catalog.categories.len())}
                }
            }
        }
    }
}

fn scored_count(evaluation: &Evaluation) -> usize {
    evaluation
        .category_scores()
        .iter()
        .filter(|score| matches!(score.value, CategoryValue::Ratio(_)))
        .count()
}

#[component]
fn QuestionCard(id: QuestionId) -> Element {
    let session = use_session();
    let mut error = use_signal(|| Option::<String>::None);
    let Some((question, selected)) = session
        .with(|state| {
            let run = state.run();
            run.catalog()
                .question(id)
                .ok()
                .map(|question| (question, run.selection(id)))
        })
        .flatten()
    else {
        return rsx! {};
    };

    let follow_up = question.kind == QuestionKind::FollowUp;
    let class_name = if follow_up {
        "question question--follow-up"
    } else {
        "question"
    };
    let group = format!("question-{id}");

    rsx! {
        fieldset { class: "{class_name}",
            legend { class: "question__title",
                span { class: "question__label", "{question.label}" }
                " {question.title}"
            }
            p { class: "question__prompt", "{question.prompt}" }
            if !question.details.is_empty() {
                ul { class: "question__details",
                    for detail in question.details.iter() {
                        li { "{detail}" }
                    }
                }
            }
            div { class: "question__options",
                for (index, option) in question.options.iter().enumerate() {
                    label { key: "{index}", class: "question__option",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{index}",
                            checked: selected == Some(index),
                            onchange: move |_| {
                                match session.with_mut(|state| state.select(id, index)) {
                                    Some(Ok(answer)) => {
                                        tracing::debug!(
                                            question = id,
                                            option = index,
                                            value = answer.value,
                                            "answer selected"
                                        );
                                        error.set(None);
                                    }
                                    Some(Err(err)) => {
                                        tracing::error!(
                                            question = id,
                                            option = index,
                                            %err,
                                            "rejected selection"
                                        );
                                        error.set(Some(err.to_string()));
                                    }
                                    None => {}
                                }
                            },
                        }
                        span { "{option.label}" }
                        if option.score.contributes() {
                            span { class: "question__points",
                                {format::format_number(f64::from(option.score.value()), 0)}
                            }
                        }
                    }
                }
            }
            if selected.is_some() {
                button {
                    r#type: "button",
                    class: "button button--ghost question__clear",
                    onclick: move |_| {
                        session.with_mut(|state| state.clear(id));
                        error.set(None);
                    },
                    {t!("assessment-clear-question")}
                }
            }
            if let Some(err) = error() {
                p { class: "results-card__meta results-card__meta--error", "{err}" }
            }
        }
    }
}

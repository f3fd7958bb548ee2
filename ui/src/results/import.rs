use dioxus::prelude::*;

use crate::core::error::TableError;
use crate::results::UploadedFile;
use crate::t;
use crate::views::use_session;

#[derive(Clone, Debug, PartialEq)]
enum ImportStatus {
    Idle,
    Merged(usize),
    History(usize),
    Error(String),
}

/// Read every selected file as text. Files that are not UTF-8 come back by
/// name so they can be reported instead of vanishing.
async fn read_uploads(evt: &FormEvent) -> (Vec<UploadedFile>, Vec<String>) {
    let Some(engine) = evt.files() else {
        return (Vec::new(), Vec::new());
    };
    let mut uploads = Vec::new();
    let mut unreadable = Vec::new();
    for name in engine.files() {
        match engine.read_file_to_string(&name).await {
            Some(contents) => uploads.push(UploadedFile { name, contents }),
            None => unreadable.push(name),
        }
    }
    (uploads, unreadable)
}

#[component]
pub fn ResultsImportPanel() -> Element {
    let session = use_session();
    let mut status = use_signal(|| ImportStatus::Idle);

    let diagnostics: Vec<String> = session
        .with(|state| state.diagnostics().iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    let edition_label = session
        .with(|state| state.edition().catalog().title)
        .unwrap_or_default();

    let on_reports = move |evt: FormEvent| async move {
        let (uploads, unreadable) = read_uploads(&evt).await;
        if uploads.is_empty() && unreadable.is_empty() {
            return;
        }
        let accepted = session
            .with_mut(|state| {
                let accepted = state.import(&uploads);
                for name in &unreadable {
                    state.reject_unreadable(name);
                }
                accepted
            })
            .unwrap_or(0);
        status.set(ImportStatus::Merged(accepted));
    };

    let on_history = move |evt: FormEvent| async move {
        let (uploads, unreadable) = read_uploads(&evt).await;
        if let Some(name) = unreadable.first() {
            session.with_mut(|state| state.reject_unreadable(name));
            status.set(ImportStatus::Error(format!(
                "{name}: {}",
                TableError::Unreadable
            )));
            return;
        }
        let Some(file) = uploads.first() else {
            return;
        };
        match session.with_mut(|state| state.load_history(file)) {
            Some(Ok(sections)) => status.set(ImportStatus::History(sections)),
            Some(Err(err)) => {
                tracing::warn!(file = %file.name, %err, "history sheet rejected");
                status.set(ImportStatus::Error(format!("{}: {err}", file.name)));
            }
            None => {}
        }
    };

    let feedback = match status() {
        ImportStatus::Idle => None,
        ImportStatus::Merged(rows) => Some((
            "results-card__meta results-card__meta--success",
            t!("results-import-merged", rows = rows),
        )),
        ImportStatus::History(sections) => Some((
            "results-card__meta results-card__meta--success",
            t!("results-import-history-loaded", sections = sections),
        )),
        ImportStatus::Error(err) => Some(("results-card__meta results-card__meta--error", err)),
    };

    rsx! {
        section { class: "results-card results-import",
            div { class: "results-card__header",
                h2 { {t!("results-import-title")} }
                span { class: "results-card__meta", "{edition_label}" }
            }
            p { {t!("results-import-intro")} }

            label { class: "results-import__field",
                span { {t!("results-import-reports")} }
                input {
                    r#type: "file",
                    accept: ".csv,text/csv",
                    multiple: true,
                    onchange: on_reports,
                }
            }
            label { class: "results-import__field",
                span { {t!("results-import-history")} }
                input {
                    r#type: "file",
                    accept: ".csv,text/csv",
                    onchange: on_history,
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }

            if !diagnostics.is_empty() {
                ul { class: "results-import__diagnostics",
                    for message in diagnostics.into_iter() {
                        li { class: "results-card__meta results-card__meta--error", "⚠️ {message}" }
                    }
                }
            }
        }
    }
}

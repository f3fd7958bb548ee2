use std::path::PathBuf;

use dioxus::prelude::*;

use crate::core::error::ExportError;
#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::platform::Platform;
use crate::results::{export_filename, render_radar_svg};
use crate::t;
use crate::views::{use_session, use_settings};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

/// Run an export job, on the browser's executor or inline on desktop.
fn dispatch<F>(mut status: Signal<ExportStatus>, mut busy: Signal<bool>, job: F)
where
    F: std::future::Future<Output = Result<String, ExportError>> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            match job.await {
                Ok(message) => status.set(ExportStatus::Done(message)),
                Err(err) => status.set(ExportStatus::Error(err.to_string())),
            }
            busy.set(false);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match futures::executor::block_on(job) {
            Ok(message) => status.set(ExportStatus::Done(message)),
            Err(err) => {
                tracing::error!(%err, "export failed");
                status.set(ExportStatus::Error(err.to_string()));
            }
        }
        busy.set(false);
    }
}

#[component]
pub fn ResultsExportPanel() -> Element {
    let session = use_session();
    let settings = use_settings();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let Some((rows, has_chart)) =
        session.with(|state| (state.chart_table().len(), state.chart().is_some()))
    else {
        return rsx! {};
    };
    let platform = Platform::current();

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("results-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(t!("export-working-csv")));
            let csv = session.with(|state| state.export_csv());
            let dir = settings.read().export_dir();
            dispatch(status_signal, busy_signal, async move {
                let csv = csv.ok_or(ExportError::NothingToExport)??;
                perform_csv_export(csv, dir).await
            });
        }
    };

    let copy_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(t!("export-working-copy")));
            let csv = session.with(|state| state.export_csv());
            dispatch(status_signal, busy_signal, async move {
                let csv = csv.ok_or(ExportError::NothingToExport)??;
                copy_to_clipboard(csv).await?;
                Ok(t!("export-done-copy"))
            });
        }
    };

    let chart_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(t!("export-working-chart")));
            let svg = session
                .with(|state| state.chart().map(render_radar_svg))
                .flatten();
            let dir = settings.read().export_dir();
            dispatch(status_signal, busy_signal, async move {
                let svg = svg.ok_or(ExportError::NothingToExport)?;
                perform_chart_export(svg, dir).await
            });
        }
    };

    let chart_label = if platform.supports_png() {
        t!("export-chart-png")
    } else {
        t!("export-chart-svg")
    };

    rsx! {
        section {
            class: "results-card results-export",
            "data-platform": platform.as_str(),
            div { class: "results-card__header",
                h2 { {t!("export-title")} }
            }

            if rows == 0 {
                p { class: "results-card__placeholder", {t!("export-placeholder")} }
            } else {
                p { {t!("export-intro", rows = rows)} }

                div { class: "results-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: csv_handler,
                        {t!("export-csv")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: copy_handler,
                        {t!("export-copy")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy() || !has_chart,
                        onclick: chart_handler,
                        "{chart_label}"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

async fn perform_csv_export(csv: String, dir: Option<PathBuf>) -> Result<String, ExportError> {
    let filename = export_filename("csv");
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes(), dir).await?;
    tracing::info!(%filename, "exported report table");
    Ok(match delivery {
        Some(path) => t!("export-done-saved", path = path),
        None => t!("export-done-download"),
    })
}

async fn perform_chart_export(svg: String, dir: Option<PathBuf>) -> Result<String, ExportError> {
    #[cfg(not(target_arch = "wasm32"))]
    let (filename, mime, bytes) = (export_filename("png"), "image/png", render_png(&svg)?);
    #[cfg(target_arch = "wasm32")]
    let (filename, mime, bytes) = (export_filename("svg"), "image/svg+xml", svg.into_bytes());

    let delivery = download_bytes(&filename, mime, bytes, dir).await?;
    tracing::info!(%filename, "exported chart");
    Ok(match delivery {
        Some(path) => t!("export-done-saved", path = path),
        None => t!("export-done-download"),
    })
}

/// Rasterize a generated chart. System fonts are loaded so labels render.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_png(svg: &str) -> Result<Vec<u8>, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|err| ExportError::Render(err.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ExportError::Render("empty canvas".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|err| ExportError::Render(err.to_string()))
}

async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ExportError::Clipboard(format!("{what} unavailable"));
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let document = window.document().ok_or_else(|| unavailable("document"))?;
        let body = document.body().ok_or_else(|| unavailable("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ExportError::Clipboard("copy blocked by the browser".into()))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

/// Deliver `bytes` as a download. Desktop writes into the export folder and
/// returns the saved path; the browser triggers a download and returns `None`.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
    dir: Option<PathBuf>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let _ = dir;
        let failed = |what: &str| ExportError::Platform(format!("unable to create {what}"));

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let mut opts = BlobPropertyBag::new();
        opts.type_(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| failed("blob"))?;
        let url = Url::create_object_url_with_blob(&blob).map_err(|_| failed("download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| failed("document"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| failed("anchor"))?
            .dyn_into()
            .map_err(|_| failed("anchor"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| failed("body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = dir.ok_or_else(|| {
            ExportError::Platform("unable to determine export directory".into())
        })?;
        let path = write_export(&dir, filename, &bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(
    dir: &std::path::Path,
    filename: &str,
    bytes: &[u8],
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::questionnaire::Edition;
    use crate::results::{to_radar_series, Cell, ReportRecord, ReportTable};

    #[test]
    fn charts_rasterize_to_png() {
        let mut table = ReportTable::for_edition(Edition::Weighted);
        table.push(ReportRecord {
            cells: vec![Cell::Value(0.5); 15],
            date: None,
        });
        let png = render_png(&render_radar_svg(&to_radar_series(&table))).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn malformed_svg_is_a_render_error() {
        assert!(matches!(render_png("<svg"), Err(ExportError::Render(_))));
    }

    #[test]
    fn exports_land_in_the_configured_folder() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = write_export(&target, "report.csv", b"a,b\n").unwrap();
        assert_eq!(path, target.join("report.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a,b\n");
    }

    #[test]
    fn missing_export_folder_is_reported() {
        let result = futures::executor::block_on(download_bytes(
            "report.csv",
            "text/csv",
            Vec::new(),
            None,
        ));
        assert!(matches!(result, Err(ExportError::Platform(_))));
    }
}

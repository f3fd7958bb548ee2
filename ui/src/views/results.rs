use dioxus::prelude::*;

use crate::results::{ResultsCharts, ResultsExportPanel, ResultsImportPanel, ResultsList};

#[component]
pub fn Results() -> Element {
    rsx! {
        section { class: "page page-results",
            h1 { {crate::t!("page-results-title")} }
            p { {crate::t!("page-results-intro")} }

            ResultsCharts {}

            div { class: "results__panels",
                ResultsList {}
                ResultsImportPanel {}
            }

            ResultsExportPanel {}
        }
    }
}

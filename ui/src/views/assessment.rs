use dioxus::prelude::*;

use crate::questionnaire::QuestionnaireView;

#[component]
pub fn Assessment() -> Element {
    // Hidden marker keeps this view reactive to locale switches.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-assessment",
            h1 { {crate::t!("page-assessment-title")} }
            p { {crate::t!("page-assessment-intro")} }
            QuestionnaireView {}
        }
    }
}

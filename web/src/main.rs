use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{provide_app_state, Assessment, Home, Results};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/assessment")]
    Assessment {},
    #[route("/results")]
    Results {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_assessment(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Assessment {},
        "{label}"
    })
}
fn nav_results(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Results {},
        "{label}"
    })
}

fn main() {
    ui::core::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // One session per page load.
    provide_app_state();

    register_nav(NavBuilder {
        home: nav_home,
        assessment: nav_assessment,
        results: nav_results,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

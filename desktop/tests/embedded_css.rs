#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar stylesheet is empty");
}

#[test]
fn embedded_css_contains_expected_tokens() {
    for token in ["--color-bg", "body {", ".button--primary", ".question {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    for (name, css) in [("main.css", EMBEDDED_CSS), ("navbar.css", NAVBAR_CSS)] {
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close, "{name} has unbalanced braces");
    }
}

#![cfg(test)]
//! Selectors the shared components render must exist in the unified theme.
//! Update `REQUIRED_SELECTORS` together with the component markup when a class
//! is renamed.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Questionnaire
    ".assessment__toolbar",
    ".assessment__actions",
    ".assessment__scores",
    ".question {",
    ".question--follow-up",
    ".question__options",
    ".question__details",
    // Results cards
    ".results__panels",
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__meta--success",
    ".results-card__meta--error",
    ".results-card__placeholder",
    // Charts, list, import, export
    ".results-charts__radar",
    ".results-charts__progression",
    ".results-list__table",
    ".results-list__row--preview",
    ".results-list__badge",
    ".results-import__field",
    ".results-import__diagnostics",
    ".results-export__actions",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();
    assert!(
        missing.is_empty(),
        "missing {} required selectors in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "embedded theme is unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

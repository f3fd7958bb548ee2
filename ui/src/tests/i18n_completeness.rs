//! Every `t!("...")` key used under `src/` must exist in the fallback bundle,
//! and every locale must define every fallback key.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "govcheck-ui.ftl";

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids: `id = ...` at the start of a line. Terms, comments and
/// variant lines are skipped.
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '#', '-', '*', '[', '}']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn source_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!` invocations.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let opener = concat!("t!", "(\"");
    let mut files = Vec::new();
    source_files(src_root, &mut files);

    let mut keys = BTreeSet::new();
    for file in files {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for (at, _) in content.match_indices(opener) {
            let rest = &content[at + opener.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(is_key_char) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join("i18n");

    let fallback_path = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback = ftl_keys(&fs::read_to_string(&fallback_path).unwrap());
    assert!(!fallback.is_empty(), "no keys parsed from {fallback_path:?}");

    let missing: Vec<_> = referenced_keys(&crate_root.join("src"))
        .into_iter()
        .filter(|key| !fallback.contains(key))
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from en-US:\n{}",
        missing.join("\n")
    );

    let mut report = String::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let keys = ftl_keys(&fs::read_to_string(&path).unwrap_or_default());
        let absent: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !absent.is_empty() {
            report.push_str(&format!("{locale}: {}\n", absent.join(", ")));
        }
    }
    assert!(report.is_empty(), "locales missing fallback keys:\n{report}");
}

#[test]
fn variant_lines_are_not_keys() {
    let keys = ftl_keys("a-b = x\nc = { $n ->\n    [one] x = y\n   *[other] z\n}\n# d = e\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["a-b", "c"]);
}

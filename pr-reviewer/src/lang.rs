//! Language detection over changed-file paths.
//!
//! Suffix matching only; no content sniffing. Unknown extensions are silently
//! ignored (no "unknown" bucket), so a docs-only PR yields an empty set.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Extension-to-label table, checked in order.
const EXTENSION_TABLE: &[(&[&str], &str)] = &[
    (&[".js", ".jsx", ".ts", ".tsx"], "JavaScript/TypeScript"),
    (&[".py"], "Python"),
    (&[".java"], "Java"),
    (&[".cpp", ".hpp", ".c", ".h"], "C++"),
    (&[".sql"], "SQL"),
];

/// Maps a file path to its language label, when the extension is known.
pub fn language_of(path: &str) -> Option<&'static str> {
    for (exts, label) in EXTENSION_TABLE {
        if exts.iter().any(|ext| path.ends_with(ext)) {
            return Some(label);
        }
    }
    None
}

/// Detects the set of languages present in a list of changed files.
///
/// Empty input yields an empty set; files with unmatched extensions
/// contribute nothing.
pub fn detect_languages<S: AsRef<str>>(files: &[S]) -> BTreeSet<&'static str> {
    files
        .iter()
        .filter_map(|f| language_of(f.as_ref()))
        .collect()
}

/// Groups changed files under their language label, preserving file order.
///
/// Used by the fallback review body. Files with unknown extensions are
/// dropped, matching [`detect_languages`].
pub fn group_files_by_language<S: AsRef<str>>(files: &[S]) -> BTreeMap<&'static str, Vec<String>> {
    let mut by_lang: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
    for f in files {
        if let Some(lang) = language_of(f.as_ref()) {
            by_lang.entry(lang).or_default().push(f.as_ref().to_string());
        }
    }
    by_lang
}

/// Static per-language tooling lines for the fallback review.
pub fn language_check_line(language: &str) -> Option<&'static str> {
    match language {
        "JavaScript/TypeScript" => Some(
            "- **JavaScript/TypeScript**: ESLint + Prettier + TypeScript compiler checks passed",
        ),
        "Python" => {
            Some("- **Python**: Flake8 + Black + isort + MyPy + Bandit security checks passed")
        }
        "Java" => Some("- **Java**: Checkstyle + Google Java Format checks passed"),
        "C++" => Some("- **C++**: Clang-Tidy + Clang-Format checks passed"),
        "SQL" => Some("- **SQL**: SQLFluff linting and formatting checks passed"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions() {
        let langs = detect_languages(&["a.py", "b.ts", "c.sql"]);
        let expected: BTreeSet<&str> = ["Python", "JavaScript/TypeScript", "SQL"]
            .into_iter()
            .collect();
        assert_eq!(langs, expected);
    }

    #[test]
    fn unknown_extensions_are_ignored() {
        assert!(detect_languages(&["README.md"]).is_empty());
        assert!(detect_languages::<&str>(&[]).is_empty());
    }

    #[test]
    fn c_family_headers_map_to_cpp() {
        assert_eq!(language_of("src/lib.h"), Some("C++"));
        assert_eq!(language_of("src/lib.hpp"), Some("C++"));
    }

    #[test]
    fn grouping_keeps_file_order_within_language() {
        let grouped = group_files_by_language(&["b.py", "a.py", "x.sql"]);
        assert_eq!(grouped["Python"], vec!["b.py", "a.py"]);
        assert_eq!(grouped["SQL"], vec!["x.sql"]);
    }
}

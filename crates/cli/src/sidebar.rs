//! Navigation listing: the ordered structure that decides which documents
//! are included and in what order they appear in the artifact.

use std::path::Path;

use serde::Deserialize;

use crate::error::ExportError;

/// One sidebar category: a label plus its ordered entries.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarCategory {
    /// Display label.
    #[serde(default)]
    pub text: String,
    /// Ordered entries under this category.
    #[serde(default)]
    pub items: Vec<SidebarEntry>,
}

/// One sidebar entry: a label plus an optional target link.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarEntry {
    /// Display label.
    #[serde(default)]
    pub text: String,
    /// Target reference, site-root-relative (e.g. `/intro.md`).
    #[serde(default)]
    pub link: Option<String>,
}

/// Load a sidebar file, selecting the parser by extension (`.yaml`/`.yml`
/// parse as YAML, anything else as JSON).
pub fn load_sidebar(path: &Path) -> Result<Vec<SidebarCategory>, ExportError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ExportError::SidebarRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |message: String| ExportError::SidebarParse {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&raw).map_err(|err| parse_err(err.to_string()))
        }
        _ => serde_json::from_str(&raw).map_err(|err| parse_err(err.to_string())),
    }
}

/// Flatten the listing to the ordered content-unit paths.
///
/// Pre-order walk filtered to links ending in `.md`; each surviving link is
/// stripped of its leading `/` and resolved under the locale subdirectory.
/// Output order equals listing order, duplicates included if listed.
pub fn flatten(categories: &[SidebarCategory], locale: &str) -> Vec<String> {
    let mut files = Vec::new();
    for category in categories {
        for entry in &category.items {
            let Some(link) = &entry.link else { continue };
            if !link.ends_with(".md") {
                continue;
            }
            let rel = link.trim_start_matches('/');
            if locale.is_empty() {
                files.push(rel.to_string());
            } else {
                files.push(format!("{locale}/{rel}"));
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(json: &str) -> Vec<SidebarCategory> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flatten_preserves_listing_order() {
        let categories = listing(
            r#"[
                {"text": "Start", "items": [
                    {"text": "Intro", "link": "/intro.md"},
                    {"text": "Install", "link": "/install.md"}
                ]},
                {"text": "Guide", "items": [
                    {"text": "Usage", "link": "/guide/usage.md"}
                ]}
            ]"#,
        );
        assert_eq!(
            flatten(&categories, "en"),
            vec!["en/intro.md", "en/install.md", "en/guide/usage.md"]
        );
    }

    #[test]
    fn flatten_skips_non_markdown_links() {
        let categories = listing(
            r#"[{"items": [
                {"link": "/intro.md"},
                {"link": "https://example.com"},
                {"text": "no link"},
                {"link": "/assets/cheatsheet.pdf"}
            ]}]"#,
        );
        assert_eq!(flatten(&categories, "en"), vec!["en/intro.md"]);
    }

    #[test]
    fn flatten_keeps_duplicates() {
        let categories = listing(
            r#"[{"items": [{"link": "/a.md"}, {"link": "/a.md"}]}]"#,
        );
        assert_eq!(flatten(&categories, "en"), vec!["en/a.md", "en/a.md"]);
    }

    #[test]
    fn flatten_without_locale_prefix() {
        let categories = listing(r#"[{"items": [{"link": "/a.md"}]}]"#);
        assert_eq!(flatten(&categories, ""), vec!["a.md"]);
    }

    #[test]
    fn loads_minimal_json_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.json");
        std::fs::write(&path, r#"[{"items":[{"link":"/a.md"}]},{"items":[{"link":"/b.md"}]}]"#)
            .unwrap();
        let categories = load_sidebar(&path).unwrap();
        assert_eq!(flatten(&categories, "en"), vec!["en/a.md", "en/b.md"]);
    }

    #[test]
    fn loads_yaml_listing_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.yaml");
        std::fs::write(
            &path,
            "- text: Start\n  items:\n    - text: Intro\n      link: /intro.md\n",
        )
        .unwrap();
        let categories = load_sidebar(&path).unwrap();
        assert_eq!(flatten(&categories, "en"), vec!["en/intro.md"]);
    }

    #[test]
    fn missing_listing_is_an_error() {
        let err = load_sidebar(Path::new("/nonexistent/sidebar.json")).unwrap_err();
        assert!(matches!(err, ExportError::SidebarRead { .. }));
    }

    #[test]
    fn malformed_listing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_sidebar(&path).unwrap_err();
        assert!(matches!(err, ExportError::SidebarParse { .. }));
    }
}

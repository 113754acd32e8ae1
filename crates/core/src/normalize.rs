//! Fence opener normalization.
//!
//! Site generators accept extended fence openers (`js{3-5}`, `{.nix
//! title="flake.nix"}`, line ranges, titles). The downstream converter only
//! understands a bare language tag, so every opener is reduced to
//! `` ```<lang> `` before staging.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::code_fence::{Segment, reassemble, segment};

/// Bare identifier info string with an optional trailing attribute group.
static IDENT_INFO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_-]+)(\{[^}]*\})?$").expect("valid pattern"));

/// First `.class` token inside an attribute-only info string.
static ATTR_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([A-Za-z0-9_-]+)").expect("valid pattern"));

/// Rewrite every fence opener in `input` to the bare `` ```<lang> `` form.
///
/// Malformed openers degrade to a missing language tag rather than failing;
/// prose is returned unmodified. Running the pass twice is a no-op.
pub fn normalize_fence_openers(input: &str) -> String {
    let mut segments = segment(input);
    for seg in &mut segments {
        if let Segment::Fenced(block) = seg
            && block.closer.is_some()
        {
            block.opener = normalize_opener(&block.opener);
        }
    }
    reassemble(&segments)
}

/// Map shell-session language tags onto the one tag the converter highlights.
fn canonical_lang(lang: &str) -> &str {
    match lang {
        "shell" | "console" => "bash",
        other => other,
    }
}

fn normalize_opener(opener: &str) -> String {
    let info = opener.trim_start_matches('`').trim();

    if info.is_empty() {
        return "```".to_string();
    }

    // Attribute-only form: ```{.nix title="flake.nix"} → first class is the lang.
    if info.starts_with('{') {
        let lang = ATTR_CLASS
            .captures(info)
            .map(|caps| canonical_lang(&caps[1]).to_string())
            .unwrap_or_default();
        return format!("```{lang}");
    }

    // Info-string form: ```lang or ```lang{1,4-6}.
    if let Some(caps) = IDENT_INFO.captures(info) {
        return format!("```{}", canonical_lang(&caps[1]));
    }

    // Unrecognized info string: keep it, minus surrounding whitespace.
    format!("```{info}")
}

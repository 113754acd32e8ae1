//! Markup and path fixes applied outside fenced code.
//!
//! The converter treats a leading `/` in an asset reference as
//! filesystem-absolute, while the site treats it as site-root-relative; it
//! also wants XHTML-style void elements. These rewrites close that gap.
//! Fenced code is never touched, so a literal `src="/foo"` in a sample
//! survives as written.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::code_fence::{Segment, reassemble, segment};

static BARE_BR: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br\s*>").expect("valid pattern"));

static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img([^>]*)>").expect("valid pattern"));

static ROOT_MD_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(/([^)]*)\)").expect("valid pattern"));

static ROOT_SRC_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src="/([^"]+)""#).expect("valid pattern"));

/// Apply the markup and path rewrites to every prose span of `input`.
pub fn sanitize_prose(input: &str) -> String {
    let mut segments = segment(input);
    for seg in &mut segments {
        if let Segment::Prose(lines) = seg {
            let fixed = sanitize_span(&lines.join("\n"));
            *lines = fixed.split('\n').map(str::to_string).collect();
        }
    }
    reassemble(&segments)
}

fn sanitize_span(text: &str) -> String {
    let text = BARE_BR.replace_all(text, "<br />");
    // No lookbehind in the regex crate: skip tags that already self-close.
    let text = IMG_TAG.replace_all(&text, |caps: &Captures<'_>| {
        let attrs = &caps[1];
        if attrs.ends_with('/') {
            caps[0].to_string()
        } else {
            format!("<img{attrs} />")
        }
    });
    let text = ROOT_MD_IMAGE.replace_all(&text, "![$1]($2)");
    ROOT_SRC_ATTR
        .replace_all(&text, r#"src="$1""#)
        .into_owned()
}

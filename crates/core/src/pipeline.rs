//! Composed document pipeline.

use crate::gutter::number_fenced_lines;
use crate::normalize::normalize_fence_openers;
use crate::sanitize::sanitize_prose;

/// Run the full transform sequence over one document.
///
/// The order is fixed: openers are normalized first so the later passes see
/// canonical fence boundaries, and sanitization runs before the gutter is
/// inserted so gutter text can never be mistaken for a root-relative path.
pub fn prepare_document(input: &str) -> String {
    let normalized = normalize_fence_openers(input);
    let sanitized = sanitize_prose(&normalized);
    number_fenced_lines(&sanitized)
}

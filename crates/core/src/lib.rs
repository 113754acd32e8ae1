#![deny(missing_docs)]
//! mdpub core: fence-aware markdown transforms for EPUB staging.

/// Fence segmentation utilities.
pub mod code_fence;
/// Line-number gutter insertion for fenced blocks.
pub mod gutter;
/// Fence opener normalization.
pub mod normalize;
/// Composed document pipeline.
pub mod pipeline;
/// Markup and path fixes applied outside fenced code.
pub mod sanitize;

pub use code_fence::{FencedBlock, Segment, is_fence_line, reassemble, segment};
pub use gutter::number_fenced_lines;
pub use normalize::normalize_fence_openers;
pub use pipeline::prepare_document;
pub use sanitize::sanitize_prose;

//! Line-number gutter insertion for fenced code blocks.
//!
//! EPUB readers drop the generator's CSS-based line numbers, so the numbers
//! are baked into the code text itself. Single-pass only: running it twice
//! numbers the numbers.

use crate::code_fence::{Segment, reassemble, segment};

/// Prefix every fenced body line with a right-aligned 1-based line number.
///
/// The column width is the digit count of the body length, so all gutters in
/// one block line up. Openers, closers, prose, and empty bodies are left
/// untouched.
pub fn number_fenced_lines(input: &str) -> String {
    let mut segments = segment(input);
    for seg in &mut segments {
        if let Segment::Fenced(block) = seg
            && block.closer.is_some()
            && !block.body.is_empty()
        {
            let width = digit_width(block.body.len());
            block.body = block
                .body
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{:>width$} | {line}", i + 1))
                .collect();
        }
    }
    reassemble(&segments)
}

fn digit_width(n: usize) -> usize {
    let mut width = 1;
    let mut rest = n / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

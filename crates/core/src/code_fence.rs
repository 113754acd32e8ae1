//! Fence segmentation: splits a document into prose and fenced-code spans.
//!
//! Every transform in this crate is scoped to one side of a fence boundary,
//! so they all share this segmentation step.

/// A fenced code block split into its opener line, body lines, and closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Opening fence line, including the backticks and any info string.
    pub opener: String,
    /// Lines between the opener and the closer.
    pub body: Vec<String>,
    /// Closing fence line, or `None` when the fence never closes.
    pub closer: Option<String>,
}

/// One span of a segmented document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Lines outside any fenced code block.
    Prose(Vec<String>),
    /// A fenced code block.
    Fenced(FencedBlock),
}

/// Whether a line begins a fence boundary (a run of three or more backticks).
pub fn is_fence_line(line: &str) -> bool {
    line.chars().take_while(|c| *c == '`').count() >= 3
}

/// Split a document into alternating prose and fenced segments.
///
/// A fence opens at a fence line and closes at the next fence line; the
/// closer line is kept with the block. A trailing fence with no closer is
/// kept as a fenced segment with `closer: None` so callers can choose to
/// leave it untouched. Lines are split on `\n`, so `reassemble` restores
/// the input byte for byte when no segment is modified.
pub fn segment(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prose: Vec<String> = Vec::new();
    let mut fence: Option<FencedBlock> = None;

    for line in input.split('\n') {
        if fence.is_none() {
            if is_fence_line(line) {
                if !prose.is_empty() {
                    segments.push(Segment::Prose(std::mem::take(&mut prose)));
                }
                fence = Some(FencedBlock {
                    opener: line.to_string(),
                    body: Vec::new(),
                    closer: None,
                });
            } else {
                prose.push(line.to_string());
            }
        } else if is_fence_line(line) {
            let mut block = fence.take().expect("fence is open");
            block.closer = Some(line.to_string());
            segments.push(Segment::Fenced(block));
        } else if let Some(block) = fence.as_mut() {
            block.body.push(line.to_string());
        }
    }

    if let Some(block) = fence {
        segments.push(Segment::Fenced(block));
    }
    if !prose.is_empty() {
        segments.push(Segment::Prose(prose));
    }
    segments
}

/// Join segments back into a single document.
pub fn reassemble(segments: &[Segment]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Prose(prose) => lines.extend(prose.iter().map(String::as_str)),
            Segment::Fenced(block) => {
                lines.push(&block.opener);
                lines.extend(block.body.iter().map(String::as_str));
                if let Some(closer) = &block.closer {
                    lines.push(closer);
                }
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_prose_and_fence() {
        let input = "before\n```rust\nlet x = 1;\n```\nafter";
        let segments = segment(input);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Prose(vec!["before".to_string()]));
        assert_eq!(
            segments[1],
            Segment::Fenced(FencedBlock {
                opener: "```rust".to_string(),
                body: vec!["let x = 1;".to_string()],
                closer: Some("```".to_string()),
            })
        );
        assert_eq!(segments[2], Segment::Prose(vec!["after".to_string()]));
    }

    #[test]
    fn round_trips_untouched_input() {
        let inputs = [
            "plain text only",
            "a\n```sh\necho hi\n```\nb\n",
            "```\nno lang\n```",
            "trailing\n```js\nunclosed",
            "",
        ];
        for input in inputs {
            assert_eq!(reassemble(&segment(input)), input);
        }
    }

    #[test]
    fn unclosed_fence_has_no_closer() {
        let segments = segment("```sh\necho hi");
        assert_eq!(segments.len(), 1);
        let Segment::Fenced(block) = &segments[0] else {
            panic!("expected fenced segment");
        };
        assert_eq!(block.closer, None);
        assert_eq!(block.body, vec!["echo hi".to_string()]);
    }

    #[test]
    fn consecutive_fences_pair_in_order() {
        let segments = segment("```a\n1\n```\n```b\n2\n```");
        let fences: Vec<&FencedBlock> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Fenced(block) => Some(block),
                Segment::Prose(_) => None,
            })
            .collect();
        assert_eq!(fences.len(), 2);
        assert_eq!(fences[0].opener, "```a");
        assert_eq!(fences[1].opener, "```b");
    }

    #[test]
    fn requires_three_backticks_to_open() {
        let segments = segment("``not a fence\ntext");
        assert_eq!(segments.len(), 1);
        assert!(matches!(segments[0], Segment::Prose(_)));
    }

    #[test]
    fn longer_runs_still_open() {
        assert!(is_fence_line("````"));
        assert!(is_fence_line("```nix"));
        assert!(!is_fence_line("` ``"));
    }
}

//! Tail analysis for streaming parses.
//!
//! Each incoming chunk re-parses the entire accumulated buffer; this module
//! decides whether the tail of that buffer is still forming and, if so,
//! which single partial form to report.

use serde::{Deserialize, Serialize};

use crate::parsing::blocks::{Block, LineClass, LineClassifier};

/// Punctuation that closes a trailing text block. A trailing paragraph not
/// ending in one of these is reported as still forming.
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?', ':', '。', '！', '？'];

/// The trailing, not-yet-complete block of a streaming parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartialBlock {
    Code { language: String, content: String },
    Heading { level: u8, content: String },
    Text { content: String },
}

/// Result of [`parse_streaming`](crate::parsing::parse_streaming): the
/// settled prefix plus at most one still-forming trailing block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamingParse {
    pub blocks: Vec<Block>,
    pub partial: Option<PartialBlock>,
}

/// An unclosed fence at the tail of the buffer: byte offset of the opener
/// line, declared language, and the accumulated body so far.
pub(crate) struct OpenFence {
    pub prefix_end: usize,
    pub language: String,
    pub body: String,
}

/// Scans the buffer for a fence left open at end-of-input.
pub(crate) fn find_open_fence(raw: &str) -> Option<OpenFence> {
    let classifier = LineClassifier;
    let mut open: Option<(usize, String, Vec<&str>)> = None;
    let mut offset = 0usize;

    for line in raw.split_inclusive('\n') {
        match classifier.classify(line) {
            LineClass::Fence { language } => {
                if open.take().is_none() {
                    open = Some((offset, language, vec![]));
                }
            }
            _ => {
                if let Some((_, _, body)) = &mut open {
                    body.push(line.trim_end_matches(['\r', '\n']));
                }
            }
        }
        offset += line.len();
    }

    open.map(|(prefix_end, language, body)| OpenFence {
        prefix_end,
        language,
        body: trim_blank_edge_lines(&body),
    })
}

/// A heading line at the very end of the buffer with no following newline.
pub(crate) fn trailing_heading(raw: &str) -> Option<(usize, u8, String)> {
    if raw.is_empty() || raw.ends_with('\n') {
        return None;
    }
    let last_start = raw.rfind('\n').map(|i| i + 1).unwrap_or(0);
    match LineClassifier.classify(&raw[last_start..]) {
        LineClass::Heading { level, content } => Some((last_start, level, content)),
        _ => None,
    }
}

/// Whether a settled trailing text block reads as complete.
pub(crate) fn ends_terminally(content: &str) -> bool {
    content
        .trim_end()
        .ends_with(|c: char| TERMINAL_PUNCTUATION.contains(&c))
}

fn trim_blank_edge_lines(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);
    lines[start..end].join("\n")
}

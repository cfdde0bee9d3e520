//! Presentation-only decoration: finds inline emphasis, label prefixes,
//! links and keyboard-shortcut tokens in message content. Recomputed on
//! demand, never persisted.

pub mod vocab;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"));

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("code span"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:https?://|www\.)[^\s<>()\[\]]+").expect("url pattern")
});

// A modifier only counts with at least one `+`-joined key after it, and a
// lone key only from the distinctive set, so bare prose words like "Space"
// or "Up" stay unmarked.
static KBD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let modifiers = vocab::MODIFIERS.join("|");
    let chord_keys = vocab::CHORD_KEYS.join("|");
    let standalone = vocab::STANDALONE_KEYS.join("|");
    Regex::new(&format!(
        r"\b(?:(?:{modifiers})(?:\s*\+\s*(?:{modifiers}|{chord_keys}|[A-Za-z0-9]))+|(?:{standalone}))\b"
    ))
    .expect("kbd pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticKind {
    Label,
    Bold,
    Code,
    Number,
    Keyword,
    Link,
    Kbd,
}

/// A derived decoration over message content. `start`/`end` are byte
/// offsets into the content that was scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticHighlight {
    pub start: usize,
    pub end: usize,
    /// Display text with markers stripped.
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SemanticKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

/// Runs all detection passes over `content`, skipping fenced code, and
/// returns non-overlapping highlights sorted by position.
///
/// Overlap tie-break: after sorting by start, a candidate is kept only if it
/// starts at or after the end of the previously kept one — first by
/// position wins.
pub fn detect(content: &str) -> Vec<SemanticHighlight> {
    let fenced = fenced_ranges(content);
    let mut candidates = vec![];

    collect_labels(content, &mut candidates);
    collect_bold(content, &mut candidates);
    collect_code(content, &mut candidates);
    collect_urls(content, &mut candidates);
    collect_kbd(content, &mut candidates);

    candidates.retain(|c| !fenced.iter().any(|r| r.contains(&c.start)));
    candidates.sort_by_key(|c| (c.start, c.end));

    let mut kept: Vec<SemanticHighlight> = vec![];
    for c in candidates {
        if kept.last().is_none_or(|prev| c.start >= prev.end) {
            kept.push(c);
        }
    }
    kept
}

/// Byte ranges covered by fenced code, fence lines included.
fn fenced_ranges(content: &str) -> Vec<std::ops::Range<usize>> {
    let mut ranges = vec![];
    let mut open: Option<usize> = None;
    let mut offset = 0usize;
    for line in content.split_inclusive('\n') {
        if line.trim().starts_with("```") {
            match open.take() {
                Some(start) => ranges.push(start..offset + line.len()),
                None => open = Some(offset),
            }
        }
        offset += line.len();
    }
    if let Some(start) = open {
        ranges.push(start..content.len());
    }
    ranges
}

fn collect_labels(content: &str, out: &mut Vec<SemanticHighlight>) {
    let mut offset = 0usize;
    for line in content.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let trimmed = &line[indent..];
        for pattern in vocab::LABELS {
            if !trimmed.starts_with(pattern.prefix) {
                continue;
            }
            let start = offset + indent;
            let phrase_start = pattern.prefix.len();
            let mut end_in_line = phrase_start;
            let mut taken = 0usize;
            for c in trimmed[phrase_start..].chars() {
                if matches!(c, '.' | '!' | '?' | '\n') || taken >= vocab::LABEL_PHRASE_MAX_CHARS {
                    break;
                }
                end_in_line += c.len_utf8();
                taken += 1;
            }
            let label = trimmed[..end_in_line].trim_end();
            out.push(SemanticHighlight {
                start,
                end: start + label.len(),
                label: label.to_string(),
                kind: pattern.kind,
                url: None,
            });
            break;
        }
        offset += line.len();
    }
}

fn collect_bold(content: &str, out: &mut Vec<SemanticHighlight>) {
    for caps in BOLD_RE.captures_iter(content) {
        let m = caps.get(0).expect("whole match");
        out.push(SemanticHighlight {
            start: m.start(),
            end: m.end(),
            label: caps[1].to_string(),
            kind: SemanticKind::Bold,
            url: None,
        });
    }
}

fn collect_code(content: &str, out: &mut Vec<SemanticHighlight>) {
    for caps in CODE_RE.captures_iter(content) {
        let m = caps.get(0).expect("whole match");
        out.push(SemanticHighlight {
            start: m.start(),
            end: m.end(),
            label: caps[1].to_string(),
            kind: SemanticKind::Code,
            url: None,
        });
    }
}

fn collect_urls(content: &str, out: &mut Vec<SemanticHighlight>) {
    for m in URL_RE.find_iter(content) {
        // Sentence punctuation after a bare URL is not part of it.
        let text = m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']);
        if text.is_empty() {
            continue;
        }
        let url = if text.starts_with("www.") {
            format!("https://{text}")
        } else {
            text.to_string()
        };
        out.push(SemanticHighlight {
            start: m.start(),
            end: m.start() + text.len(),
            label: text.to_string(),
            kind: SemanticKind::Link,
            url: Some(url),
        });
    }
}

fn collect_kbd(content: &str, out: &mut Vec<SemanticHighlight>) {
    for m in KBD_RE.find_iter(content) {
        out.push(SemanticHighlight {
            start: m.start(),
            end: m.end(),
            label: m.as_str().to_string(),
            kind: SemanticKind::Kbd,
            url: None,
        });
    }
}

use crate::parsing::blocks::kinds::{
    BlockQuote, CodeFence, Definition, Divider, ListMarker, StepItem, TableRow, TaskMarker,
};
use crate::parsing::blocks::types::CalloutVariant;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Context-sensitive decisions
/// (fence mode, table look-ahead, item grouping) belong to the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Blank,
    /// Opens or closes a fenced code block; carries the language tag.
    Fence { language: String },
    /// Contains a pipe; only tabular if the next line is a separator.
    PipeRow { separator: bool },
    Quote {
        callout: Option<CalloutVariant>,
        content: String,
    },
    Divider,
    /// Heading level is clamped to 3; deeper source headings collapse.
    Heading { level: u8, content: String },
    Task { text: String, checked: bool },
    Step { text: String },
    Definition { term: String, definition: String },
    ListItem { text: String, ordered: bool },
    Text,
}

/// Classifies individual lines for the block parsing phase.
///
/// Detection precedence per line, first match wins: fence, table row,
/// blockquote, divider, heading, task item, step item, definition,
/// list item, plain text.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            return LineClass::Blank;
        }

        if let Some(language) = CodeFence::sig(trimmed) {
            return LineClass::Fence { language };
        }
        if TableRow::is_candidate(trimmed) {
            return LineClass::PipeRow {
                separator: TableRow::is_separator(trimmed),
            };
        }
        if let Some(content) = BlockQuote::strip_prefix(trimmed) {
            return match BlockQuote::callout_tag(content) {
                Some((variant, rest)) => LineClass::Quote {
                    callout: Some(variant),
                    content: rest.to_string(),
                },
                None => LineClass::Quote {
                    callout: None,
                    content: content.to_string(),
                },
            };
        }
        if Divider::matches(trimmed) {
            return LineClass::Divider;
        }
        if let Some((level, content)) = heading(trimmed) {
            return LineClass::Heading { level, content };
        }
        if let Some((text, checked)) = TaskMarker::parse(trimmed) {
            return LineClass::Task { text, checked };
        }
        if let Some(text) = StepItem::parse(trimmed) {
            return LineClass::Step { text };
        }
        if let Some((term, definition)) = Definition::parse(trimmed) {
            return LineClass::Definition { term, definition };
        }
        if let Some((text, ordered)) = ListMarker::parse(trimmed) {
            return LineClass::ListItem { text, ordered };
        }
        LineClass::Text
    }
}

fn heading(line: &str) -> Option<(u8, String)> {
    let t = line.trim_start();
    let hashes = t.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &t[hashes..];
    if !rest.starts_with(' ') && !rest.is_empty() {
        return None;
    }
    Some((hashes.min(3) as u8, rest.trim().to_string()))
}

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range into the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One item of a task list (`- [ ]` / `- [x]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub text: String,
    pub checked: bool,
}

/// Visual variant of a callout blockquote.
///
/// Source tags collapse onto four variants: NOTE/INFO → `Info`,
/// TIP → `Tip`, WARNING/IMPORTANT/CAUTION → `Warning`, SUCCESS → `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    Info,
    Warning,
    Success,
    Tip,
}

/// A parsed document block.
///
/// Blocks are immutable once produced; every parse call builds a fresh list.
/// The textual variants (`Text`, `Heading`, `Code`) carry an optional `span`
/// in rendered-text byte coordinates, filled in by
/// [`assign_offsets`](crate::offsets::assign_offsets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        span: Option<Span>,
    },
    Heading {
        /// 1..=3; deeper source headings collapse to level 3.
        level: u8,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        span: Option<Span>,
    },
    Divider,
    Code {
        language: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        span: Option<Span>,
    },
    List {
        items: Vec<String>,
        ordered: bool,
    },
    TaskList {
        items: Vec<TaskItem>,
    },
    Steps {
        items: Vec<String>,
    },
    Definition {
        term: String,
        definition: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Blockquote {
        content: String,
    },
    Callout {
        variant: CalloutVariant,
        content: String,
    },
    Action {
        data: serde_json::Value,
    },
    AskFlow {
        selected_text: String,
        instruction: String,
    },
}

impl Block {
    /// Content of the textual variants, used by offset assignment.
    pub fn textual_content(&self) -> Option<&str> {
        match self {
            Block::Text { content, .. }
            | Block::Heading { content, .. }
            | Block::Code { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Rendered-text span, if this is a textual variant with offsets assigned.
    pub fn span(&self) -> Option<Span> {
        match self {
            Block::Text { span, .. } | Block::Heading { span, .. } | Block::Code { span, .. } => {
                *span
            }
            _ => None,
        }
    }

    pub(crate) fn set_span(&mut self, new: Span) {
        match self {
            Block::Text { span, .. } | Block::Heading { span, .. } | Block::Code { span, .. } => {
                *span = Some(new)
            }
            _ => {}
        }
    }
}

use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::kinds::TableRow;
use crate::parsing::blocks::types::{Block, CalloutVariant, TaskItem};

/// The currently accumulating leaf, if any.
///
/// Consecutive items of the same list/task/step kind accumulate into one
/// leaf; a blank line or a differing item kind closes it.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph(Vec<String>),
    Fence {
        language: String,
        lines: Vec<String>,
    },
    Quote {
        callout: Option<CalloutVariant>,
        lines: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Tasks(Vec<TaskItem>),
    Steps(Vec<String>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Assembles classified lines into blocks.
///
/// Receives one line of look-ahead so a pipe row can be confirmed as tabular
/// only when a separator row follows; a pipe-containing line without one
/// falls through to text.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: &LineClass, raw: &str, next: Option<&LineClass>) {
        let raw = raw.trim_end_matches(['\r', '\n']);

        if let LeafState::Fence { .. } = self.leaf {
            self.consume_fence_line(class, raw);
            return;
        }

        match class {
            LineClass::Blank => self.flush(),
            LineClass::Fence { language } => {
                self.flush();
                self.leaf = LeafState::Fence {
                    language: language.clone(),
                    lines: vec![],
                };
            }
            LineClass::PipeRow { separator } => self.consume_pipe_row(*separator, raw, next),
            LineClass::Quote { callout, content } => match &mut self.leaf {
                LeafState::Quote { lines, .. } => lines.push(content.clone()),
                _ => {
                    self.flush();
                    self.leaf = LeafState::Quote {
                        callout: *callout,
                        lines: vec![content.clone()],
                    };
                }
            },
            LineClass::Divider => {
                self.flush();
                self.out.push(Block::Divider);
            }
            LineClass::Heading { level, content } => {
                self.flush();
                self.out.push(Block::Heading {
                    level: *level,
                    content: content.clone(),
                    span: None,
                });
            }
            LineClass::Task { text, checked } => {
                let item = TaskItem {
                    text: text.clone(),
                    checked: *checked,
                };
                match &mut self.leaf {
                    LeafState::Tasks(items) => items.push(item),
                    _ => {
                        self.flush();
                        self.leaf = LeafState::Tasks(vec![item]);
                    }
                }
            }
            LineClass::Step { text } => match &mut self.leaf {
                LeafState::Steps(items) => items.push(text.clone()),
                _ => {
                    self.flush();
                    self.leaf = LeafState::Steps(vec![text.clone()]);
                }
            },
            LineClass::Definition { term, definition } => {
                self.flush();
                self.out.push(Block::Definition {
                    term: term.clone(),
                    definition: definition.clone(),
                });
            }
            LineClass::ListItem { text, ordered } => match &mut self.leaf {
                LeafState::List {
                    ordered: prev,
                    items,
                } if prev == ordered => items.push(text.clone()),
                _ => {
                    self.flush();
                    self.leaf = LeafState::List {
                        ordered: *ordered,
                        items: vec![text.clone()],
                    };
                }
            },
            LineClass::Text => self.extend_paragraph(raw),
        }
    }

    /// Flushes everything, including an unterminated fence (best-effort
    /// close rather than dropping the accumulated body).
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.out
    }

    fn consume_fence_line(&mut self, class: &LineClass, raw: &str) {
        if let LineClass::Fence { .. } = class {
            self.flush();
            return;
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(raw.to_string());
        }
    }

    fn consume_pipe_row(&mut self, separator: bool, raw: &str, next: Option<&LineClass>) {
        if let LeafState::Table { rows, .. } = &mut self.leaf {
            if !separator {
                rows.push(TableRow::cells(raw));
            }
            return;
        }
        // Look-ahead: only a separator on the next line makes this tabular.
        if matches!(next, Some(LineClass::PipeRow { separator: true })) {
            self.flush();
            self.leaf = LeafState::Table {
                headers: TableRow::cells(raw),
                rows: vec![],
            };
        } else {
            self.extend_paragraph(raw);
        }
    }

    fn extend_paragraph(&mut self, raw: &str) {
        match &mut self.leaf {
            LeafState::Paragraph(lines) => lines.push(raw.to_string()),
            _ => {
                self.flush();
                self.leaf = LeafState::Paragraph(vec![raw.to_string()]);
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph(lines) => self.out.push(Block::Text {
                content: lines.join("\n").trim().to_string(),
                span: None,
            }),
            LeafState::Fence { language, lines } => self.out.push(Block::Code {
                language,
                content: trim_blank_edges(&lines).join("\n"),
                span: None,
            }),
            LeafState::Quote { callout, lines } => {
                let content = lines.join("\n").trim().to_string();
                self.out.push(match callout {
                    Some(variant) => Block::Callout { variant, content },
                    None => Block::Blockquote { content },
                });
            }
            LeafState::List { ordered, items } => self.out.push(Block::List { items, ordered }),
            LeafState::Tasks(items) => self.out.push(Block::TaskList { items }),
            LeafState::Steps(items) => self.out.push(Block::Steps { items }),
            LeafState::Table { headers, rows } => self.out.push(Block::Table { headers, rows }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops leading and trailing blank lines, keeping interior ones.
fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);
    &lines[start..end]
}

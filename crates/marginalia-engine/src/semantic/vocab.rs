//! Closed vocabularies for semantic detection. Configuration data: add
//! entries here, never touch the detection passes.

use crate::semantic::SemanticKind;

/// A label prefix and the kind its match is reported as.
pub struct LabelPattern {
    pub prefix: &'static str,
    pub kind: SemanticKind,
}

/// Label prefixes recognized at the start of a line, word and emoji forms.
pub const LABELS: &[LabelPattern] = &[
    LabelPattern {
        prefix: "Note:",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "Tip:",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "Pro tip:",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "Warning:",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "Caution:",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "Important:",
        kind: SemanticKind::Keyword,
    },
    LabelPattern {
        prefix: "Key point:",
        kind: SemanticKind::Keyword,
    },
    LabelPattern {
        prefix: "Remember:",
        kind: SemanticKind::Keyword,
    },
    LabelPattern {
        prefix: "⚠️",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "💡",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "✅",
        kind: SemanticKind::Label,
    },
    LabelPattern {
        prefix: "📌",
        kind: SemanticKind::Label,
    },
];

/// Modifier keys that may lead a shortcut chord. A modifier alone is never a
/// shortcut: "Shift the blame" and "Win a prize" are prose.
pub const MODIFIERS: &[&str] = &["Shift", "Option", "Ctrl", "Meta", "Alt", "Cmd", "Win"];

/// Keys allowed after a `+` inside a chord, longest first so the built
/// alternation prefers `Escape` over `Esc`.
pub const CHORD_KEYS: &[&str] = &[
    "Backspace", "PageDown", "PageUp", "Escape", "Delete", "Return", "Enter", "Space", "Right",
    "Home", "Left", "Down", "F10", "F11", "F12", "Tab", "End", "Esc", "F1", "F2", "F3", "F4",
    "F5", "F6", "F7", "F8", "F9", "Up",
];

/// Keys distinctive enough to report outside a chord. Names that double as
/// ordinary words (Space, Home, Up, Tab, Return, Delete, End) are chord-only.
pub const STANDALONE_KEYS: &[&str] = &[
    "Backspace", "PageDown", "PageUp", "Escape", "Enter", "Esc", "F10", "F11", "F12", "F1", "F2",
    "F3", "F4", "F5", "F6", "F7", "F8", "F9",
];

/// Maximum length of a captured label key phrase, in characters.
pub const LABEL_PHRASE_MAX_CHARS: usize = 80;

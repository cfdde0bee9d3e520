use std::sync::LazyLock;

use regex::Regex;

static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+\[([ xX])\]\s?(.*)$").expect("task pattern"));

static STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^step\s+\d+\s*[:.]\s*(.*)$").expect("step pattern"));

static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3})[.)]\s+(.*)$").expect("ordered item pattern"));

static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").expect("unordered item pattern"));

static BOLD_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*([^\s*]{1,32})\*\*\s*:\s*(.+)$").expect("definition"));

static PLAIN_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_'-]{0,23}):\s+(.+)$").expect("definition"));

/// Thematic break: three or more of the same `-`/`*`/`_` character.
pub struct Divider;

impl Divider {
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        matches!(first, '-' | '*' | '_') && t.len() >= 3 && chars.all(|c| c == first)
    }
}

/// Task-list item (`- [ ]` / `- [x]`).
pub struct TaskMarker;

impl TaskMarker {
    /// Returns `(text, checked)` if the line is a task item.
    pub fn parse(line: &str) -> Option<(String, bool)> {
        let caps = TASK_RE.captures(line.trim())?;
        let checked = !caps[1].trim().is_empty();
        Some((caps[2].trim().to_string(), checked))
    }
}

/// Step item: `Step N:` prefix or a leading circled-digit glyph.
pub struct StepItem;

impl StepItem {
    /// Circled-digit glyphs recognized as step markers. Configuration data,
    /// extend here rather than in the parsing code.
    pub const CIRCLED_DIGITS: &'static [char] = &[
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱',
        '⑲', '⑳',
    ];

    /// Returns the step text if the line is a step item.
    pub fn parse(line: &str) -> Option<String> {
        let t = line.trim();
        if let Some(caps) = STEP_RE.captures(t) {
            return Some(caps[1].trim().to_string());
        }
        let first = t.chars().next()?;
        if Self::CIRCLED_DIGITS.contains(&first) {
            let rest = t[first.len_utf8()..].trim_start();
            let rest = rest.strip_prefix([':', '.']).unwrap_or(rest);
            return Some(rest.trim().to_string());
        }
        None
    }
}

/// Plain list item, ordered (`1.` / `1)`) or unordered (`-` / `*` / `+`).
pub struct ListMarker;

impl ListMarker {
    /// Returns `(text, ordered)` if the line is a list item.
    ///
    /// Task items match this pattern too, so the classifier must try
    /// [`TaskMarker`] first.
    pub fn parse(line: &str) -> Option<(String, bool)> {
        let t = line.trim();
        if let Some(caps) = ORDERED_RE.captures(t) {
            return Some((caps[2].trim().to_string(), true));
        }
        if let Some(caps) = UNORDERED_RE.captures(t) {
            return Some((caps[1].trim().to_string(), false));
        }
        None
    }
}

/// Definition line: `**Term**: text` or `Term: text` with a short,
/// space-free term.
pub struct Definition;

impl Definition {
    /// Returns `(term, definition)` if the line is a definition.
    pub fn parse(line: &str) -> Option<(String, String)> {
        let t = line.trim();
        let caps = BOLD_DEFINITION_RE
            .captures(t)
            .or_else(|| PLAIN_DEFINITION_RE.captures(t))?;
        Some((caps[1].to_string(), caps[2].trim().to_string()))
    }
}

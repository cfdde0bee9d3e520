//! Recovers highlight positions after the underlying text has drifted.
//!
//! Layered strategy, cheapest first: exact text at the recorded offsets, an
//! exact occurrence near them, an exact occurrence anywhere, then a partial
//! prefix match. A highlight that cannot be recovered is flagged broken and
//! retained with its original offsets for audit; losing a user annotation is
//! worse than a temporarily wrong badge.

use crate::highlights::Highlight;

/// Bytes scanned on either side of the old span during the local search.
const LOCAL_WINDOW: usize = 150;
/// Minimum quoted-text length (chars) before partial matching is attempted.
const MIN_PARTIAL_CHARS: usize = 10;
/// Share of the quoted text used as the partial-match prefix.
const PARTIAL_FRACTION: f64 = 0.7;
/// Maximum bytes the reconstructed end bound may extend past the original
/// length to finish a word.
const MAX_END_EXTEND: usize = 20;

/// Realigns every highlight against the current rendered text.
///
/// Total: never fails, never drops a highlight. Unrecoverable ones come back
/// flagged `broken` with their offsets untouched.
pub fn realign(rendered: &str, highlights: &[Highlight]) -> Vec<Highlight> {
    highlights.iter().map(|h| realign_one(rendered, h)).collect()
}

fn realign_one(rendered: &str, h: &Highlight) -> Highlight {
    let mut out = h.clone();
    out.broken = false;
    out.realigned = false;
    out.partial_match = false;

    if h.text.is_empty() {
        out.broken = true;
        return out;
    }

    let bounds_ok = h.start < h.end && h.end <= rendered.len();
    if bounds_ok {
        // Fast path: nothing moved.
        if rendered.get(h.start..h.end) == Some(h.text.as_str()) {
            return out;
        }
        // Local search around the old span.
        if let Some(start) = find_in_window(rendered, &h.text, h.start, h.end) {
            out.start = start;
            out.end = start + h.text.len();
            out.realigned = true;
            return out;
        }
    }

    // Global exact search.
    if let Some(start) = rendered.find(&h.text) {
        tracing::debug!(id = %h.id, start, "highlight recovered by global search");
        out.start = start;
        out.end = start + h.text.len();
        out.realigned = true;
        return out;
    }

    // Partial fallback: first 70% of a long enough quote.
    if h.text.chars().count() >= MIN_PARTIAL_CHARS
        && let Some((start, end)) = find_partial(rendered, &h.text)
    {
        tracing::debug!(id = %h.id, start, end, "highlight recovered by partial match");
        out.start = start;
        out.end = end;
        out.realigned = true;
        out.partial_match = true;
        return out;
    }

    tracing::debug!(id = %h.id, "highlight could not be realigned, flagging broken");
    out.broken = true;
    out
}

fn find_in_window(rendered: &str, text: &str, old_start: usize, old_end: usize) -> Option<usize> {
    let from = floor_boundary(rendered, old_start.saturating_sub(LOCAL_WINDOW));
    let to = ceil_boundary(rendered, (old_end + LOCAL_WINDOW).min(rendered.len()));
    rendered.get(from..to)?.find(text).map(|i| from + i)
}

/// Searches for the quote's leading 70% and reconstructs a best-effort end:
/// the original length, extended to the end of a cut-off word by at most
/// [`MAX_END_EXTEND`] bytes, clipped to the text length.
fn find_partial(rendered: &str, text: &str) -> Option<(usize, usize)> {
    let take = (text.chars().count() as f64 * PARTIAL_FRACTION).floor() as usize;
    let prefix: String = text.chars().take(take).collect();
    let start = rendered.find(&prefix)?;

    let ideal = ceil_boundary(rendered, (start + text.len()).min(rendered.len()));
    // The cap lands wherever the byte budget runs out; pull it back to a
    // boundary so the slice below stays valid on multibyte text.
    let cap = floor_boundary(rendered, (ideal + MAX_END_EXTEND).min(rendered.len()));
    let mut end = ideal;
    for c in rendered[ideal..cap].chars() {
        if c.is_whitespace() {
            break;
        }
        end += c.len_utf8();
    }
    Some((start, end))
}

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

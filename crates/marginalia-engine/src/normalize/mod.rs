//! Markup stripping: raw generated text → "rendered text", the form a user
//! visually sees and selects. Block offsets and highlight offsets both index
//! into this form, so the function must be deterministic and idempotent on
//! its own output.

use std::num::NonZeroUsize;
use std::sync::LazyLock;

use lru::LruCache;
use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").expect("bold pattern"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*|\b_([^_\n]+)_\b").expect("italic pattern"));

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code pattern"));

static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~([^~]+)~~").expect("strikethrough pattern"));

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s{0,3}#{1,6}\s+").expect("heading pattern"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("link pattern"));

/// Strips markup in fixed order: bold, italic, inline code, strikethrough,
/// leading heading hashes, link syntax (text kept, URL dropped).
///
/// The pass repeats until the text stops changing, so the returned string is
/// a fixed point: normalizing already-rendered text is a no-op. Stacked or
/// nested markers (`****x****`, `# # title`) would otherwise leave residue
/// that a second call strips. Each pass only removes marker characters, so
/// the loop terminates.
pub fn normalize(raw: &str) -> String {
    let mut current = strip_markup(raw);
    loop {
        let next = strip_markup(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_markup(raw: &str) -> String {
    let s = BOLD_RE.replace_all(raw, "$1$2");
    let s = ITALIC_RE.replace_all(&s, "$1$2");
    let s = INLINE_CODE_RE.replace_all(&s, "$1");
    let s = STRIKE_RE.replace_all(&s, "$1");
    let s = HEADING_RE.replace_all(&s, "");
    LINK_RE.replace_all(&s, "$1").into_owned()
}

/// Bounded memoization of [`normalize`] keyed by raw input.
///
/// The same message is normalized repeatedly during a session (offset
/// assignment, highlight validation, realignment), so callers keep one of
/// these and pass it by reference. Not hidden module state: share across
/// threads only behind a mutex.
pub struct NormalizeCache {
    inner: LruCache<String, String>,
}

impl NormalizeCache {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("non-zero after max");
        Self {
            inner: LruCache::new(capacity),
        }
    }

    pub fn normalize(&mut self, raw: &str) -> String {
        if let Some(hit) = self.inner.get(raw) {
            return hit.clone();
        }
        let rendered = normalize(raw);
        self.inner.put(raw.to_string(), rendered.clone());
        rendered
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for NormalizeCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

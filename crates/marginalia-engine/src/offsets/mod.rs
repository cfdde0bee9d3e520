//! Maps parsed blocks onto rendered-text coordinates.

use crate::normalize::normalize;
use crate::parsing::blocks::{Block, Span};

/// Assigns each textual block (`text`, `heading`, `code`) a `[start, end)`
/// byte span in `rendered`.
///
/// A single forward cursor walks the rendered text: each block's own
/// normalized content is searched for at or after the cursor, and a match
/// advances the cursor to its end. This keeps assignment in encounter order
/// and stops a later block from matching an earlier, textually identical
/// occurrence. A miss leaves that block without offsets and never fails the
/// call.
pub fn assign_offsets(mut blocks: Vec<Block>, rendered: &str) -> Vec<Block> {
    let mut cursor = 0usize;
    for block in &mut blocks {
        let Some(content) = block.textual_content() else {
            continue;
        };
        let needle = normalize(content);
        if needle.is_empty() {
            continue;
        }
        let Some(found) = rendered.get(cursor..).and_then(|tail| tail.find(&needle)) else {
            continue;
        };
        let start = cursor + found;
        let end = start + needle.len();
        block.set_span(Span { start, end });
        cursor = end;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(content: &str) -> Block {
        Block::Text {
            content: content.to_string(),
            span: None,
        }
    }

    #[test]
    fn identical_blocks_assign_in_encounter_order() {
        let rendered = "same\nother\nsame";
        let blocks = assign_offsets(vec![text("same"), text("same")], rendered);
        assert_eq!(blocks[0].span(), Some(Span { start: 0, end: 4 }));
        assert_eq!(blocks[1].span(), Some(Span { start: 11, end: 15 }));
    }

    #[test]
    fn miss_leaves_block_without_offsets() {
        let blocks = assign_offsets(vec![text("absent"), text("here")], "only here");
        assert_eq!(blocks[0].span(), None);
        assert_eq!(blocks[1].span(), Some(Span { start: 5, end: 9 }));
    }

    #[test]
    fn block_content_is_normalized_before_matching() {
        let rendered = "a bold claim";
        let blocks = assign_offsets(vec![text("a **bold** claim")], rendered);
        assert_eq!(blocks[0].span(), Some(Span { start: 0, end: 12 }));
    }

    #[test]
    fn non_textual_blocks_are_skipped() {
        let blocks = assign_offsets(vec![Block::Divider, text("x")], "x");
        assert_eq!(blocks[0].span(), None);
        assert_eq!(blocks[1].span(), Some(Span { start: 0, end: 1 }));
    }

    #[test]
    fn assigned_span_slices_back_to_content() {
        let rendered = "intro\ncode body\noutro";
        let blocks = assign_offsets(
            vec![text("intro"), text("code body"), text("outro")],
            rendered,
        );
        for block in &blocks {
            let span = block.span().unwrap();
            let slice = &rendered[span.start..span.end];
            assert_eq!(normalize(slice), normalize(block.textual_content().unwrap()));
        }
    }
}

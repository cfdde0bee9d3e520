//! Cleanup pass over the raw block list. Builds a new output list rather
//! than splicing the input in place.

use crate::parsing::ParseOptions;
use crate::parsing::blocks::Block;

/// Drops empty blocks, collapses back-to-back dividers, and inserts
/// structural dividers into long outputs.
pub fn postprocess(blocks: Vec<Block>, raw: &str, options: &ParseOptions) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        if is_empty_textual(&block) {
            continue;
        }
        if matches!(block, Block::Divider) && matches!(out.last(), Some(Block::Divider)) {
            continue;
        }
        out.push(block);
    }

    if options.insert_dividers && is_long_read(raw, options) {
        out = insert_structural_dividers(out, options);
    }
    out
}

/// Estimated reading time of the whole input exceeds the threshold.
fn is_long_read(raw: &str, options: &ParseOptions) -> bool {
    let words = raw.split_whitespace().count();
    words as f32 / options.words_per_second > options.long_read_secs
}

fn is_empty_textual(block: &Block) -> bool {
    match block {
        Block::Text { content, .. }
        | Block::Heading { content, .. }
        | Block::Code { content, .. }
        | Block::Blockquote { content }
        | Block::Callout { content, .. } => content.trim().is_empty(),
        _ => false,
    }
}

/// Inserts dividers at text/code boundaries, after headings that open long
/// text, and between two large text blocks. Never first, never doubled.
fn insert_structural_dividers(blocks: Vec<Block>, options: &ParseOptions) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        if let Some(prev) = out.last()
            && !matches!(prev, Block::Divider)
            && wants_divider(prev, &block, options)
        {
            out.push(Block::Divider);
        }
        out.push(block);
    }
    out
}

fn wants_divider(prev: &Block, cur: &Block, options: &ParseOptions) -> bool {
    let large = |b: &Block| {
        matches!(b, Block::Text { content, .. } if content.len() > options.large_block_chars)
    };
    match (prev, cur) {
        (Block::Text { .. }, Block::Code { .. }) | (Block::Code { .. }, Block::Text { .. }) => true,
        (Block::Heading { .. }, Block::Text { .. }) => large(cur),
        (Block::Text { .. }, Block::Text { .. }) => large(prev) && large(cur),
        _ => false,
    }
}

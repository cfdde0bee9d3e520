//! Line-oriented block parsing of raw model output.
//!
//! The pipeline runs: out-of-band extraction (ask-flow, action markers) →
//! line classification → block building → post-processing. Streaming parses
//! add a tail analysis that reports at most one still-forming partial block.

pub mod blocks;
pub mod markers;
pub mod postprocess;
pub mod streaming;

use blocks::{Block, BlockBuilder, LineClass, LineClassifier};
pub use streaming::{PartialBlock, StreamingParse};

use crate::normalize::NormalizeCache;
use crate::offsets::assign_offsets;

/// Tunables for the parse pipeline. The defaults match the documented
/// reading-time heuristics.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Average reading speed used for the long-read estimate (~230 wpm).
    pub words_per_second: f32,
    /// Inputs reading longer than this get structural dividers.
    pub long_read_secs: f32,
    /// A text block larger than this counts as "large" for divider insertion.
    pub large_block_chars: usize,
    /// Master switch for structural divider insertion.
    pub insert_dividers: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            words_per_second: 3.8,
            long_read_secs: 8.0,
            large_block_chars: 200,
            insert_dividers: true,
        }
    }
}

/// Parses raw text into an ordered, non-empty list of blocks.
///
/// Never fails: ambiguous input falls back to plain text, and an empty or
/// whitespace-only input yields exactly one empty `Text` block.
pub fn parse(raw: &str) -> Vec<Block> {
    parse_with_options(raw, &ParseOptions::default())
}

pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Vec<Block> {
    // Ask-flow short-circuits the whole parse.
    if let Some(block) = markers::try_ask_flow(raw) {
        return vec![block];
    }

    let (body, actions) = markers::extract_actions(raw);
    let mut out = postprocess::postprocess(parse_lines(&body), &body, options);
    out.extend(actions);

    if out.is_empty() {
        out.push(Block::Text {
            content: String::new(),
            span: None,
        });
    }
    out
}

/// Parses a growing buffer, returning the settled prefix plus at most one
/// still-forming trailing block.
///
/// Checked in order: an unclosed fence (partial `code`), a heading line with
/// no trailing newline (partial `heading`), a trailing text block without
/// terminal punctuation (partial `text`).
pub fn parse_streaming(raw: &str) -> StreamingParse {
    parse_streaming_with_options(raw, &ParseOptions::default())
}

pub fn parse_streaming_with_options(raw: &str, options: &ParseOptions) -> StreamingParse {
    if let Some(fence) = streaming::find_open_fence(raw) {
        return StreamingParse {
            blocks: parse_settled_prefix(&raw[..fence.prefix_end], options),
            partial: Some(PartialBlock::Code {
                language: fence.language,
                content: fence.body,
            }),
        };
    }

    if let Some((line_start, level, content)) = streaming::trailing_heading(raw) {
        return StreamingParse {
            blocks: parse_settled_prefix(&raw[..line_start], options),
            partial: Some(PartialBlock::Heading { level, content }),
        };
    }

    let mut blocks = parse_with_options(raw, options);
    if matches!(
        blocks.last(),
        Some(Block::Text { content, .. })
            if !content.is_empty() && !streaming::ends_terminally(content)
    ) && let Some(Block::Text { content, .. }) = blocks.pop()
    {
        return StreamingParse {
            blocks,
            partial: Some(PartialBlock::Text { content }),
        };
    }

    StreamingParse {
        blocks,
        partial: None,
    }
}

fn parse_settled_prefix(prefix: &str, options: &ParseOptions) -> Vec<Block> {
    if prefix.trim().is_empty() {
        return vec![];
    }
    parse_with_options(prefix, options)
}

fn parse_lines(body: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let lines: Vec<&str> = body.lines().collect();
    let classes: Vec<LineClass> = lines.iter().map(|l| classifier.classify(l)).collect();

    let mut builder = BlockBuilder::new();
    for (i, class) in classes.iter().enumerate() {
        builder.push(class, lines[i], classes.get(i + 1));
    }
    builder.finish()
}

/// A fully processed message: offset-annotated blocks plus the rendered text
/// their spans index into.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    pub blocks: Vec<Block>,
    pub rendered: String,
}

/// Runs the whole pipeline: parse → post-process → normalize → offsets.
pub fn parse_message(raw: &str, cache: &mut NormalizeCache) -> ParsedMessage {
    let rendered = cache.normalize(raw);
    let blocks = assign_offsets(parse(raw), &rendered);
    ParsedMessage { blocks, rendered }
}

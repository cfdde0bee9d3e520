pub mod highlights;
pub mod normalize;
pub mod offsets;
pub mod parsing;
pub mod semantic;

// Re-export key types for easier usage
pub use highlights::{Highlight, Validation, ValidationError, content_hash, realign, validate};
pub use normalize::{NormalizeCache, normalize};
pub use offsets::assign_offsets;
pub use parsing::{
    ParseOptions, ParsedMessage, PartialBlock, StreamingParse, blocks::Block, parse, parse_message,
    parse_streaming,
};
pub use semantic::{SemanticHighlight, SemanticKind, detect};

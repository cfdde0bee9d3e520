pub mod block_quote;
pub mod code_fence;
pub mod items;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use items::{Definition, Divider, ListMarker, StepItem, TaskMarker};
pub use table::TableRow;

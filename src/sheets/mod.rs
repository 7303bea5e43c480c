pub mod normalize;
pub mod reader;
pub mod types;

pub use reader::read_sheet;
pub use types::{Criterion, Review};

pub mod block;
pub mod column;
pub mod error;
pub mod units;

pub use block::{Block, BlockType};
pub use column::{format_number, Column, ColumnId, Width, WidthMap};
pub use error::{ColgridError, Result};
pub use units::LengthUnit;

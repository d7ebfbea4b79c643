//! Design file model
//!
//! A design file is a tab separated sample sheet. The first line is a header
//! that must match one of the two [`Layout`]s, and every following line
//! describes one sample, giving its cell type, condition, control and read
//! file. The optional name, type and time columns are filled in with defaults
//! when absent.

mod header;
mod row;

pub use header::{HeaderMismatch, Layout};
pub use row::DesignRow;

pub const COL_CELLTYPE: &str = "celltype";
pub const COL_CONDITION: &str = "condition";
pub const COL_CONTROL: &str = "control";
pub const COL_READS: &str = "reads";
pub const COL_NAME: &str = "name";
pub const COL_TYPE: &str = "type";
pub const COL_TIME: &str = "time";

pub mod table;

pub use table::{equal_ratio, ScaleEntry, ScaleTable};

pub mod output;

pub use output::{format_entry, open_mirror, render_table, MirrorStatus, OutputFormat, ScaleOutput};

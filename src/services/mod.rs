pub mod result_writer;

pub use result_writer::{render_block, table_row, OutputFormat, ResultWriter, TABLE_HEADER};

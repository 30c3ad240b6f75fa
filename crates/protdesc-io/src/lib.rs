//! # protdesc-io
//!
//! Reading sequence lists and writing descriptor tables.
//!
mod sequences;
mod table;

pub use self::sequences::{parse_sequences, read_sequences};
pub use self::table::{
    column_name, render_legacy, table_frame, write_descriptor_json, write_table, TableFormat,
    DEFAULT_MISSING,
};

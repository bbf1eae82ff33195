pub mod columns;
pub mod error;
pub mod normalize;
pub mod reader;

pub use columns::{ColumnMap, Field};
pub use error::{IngestError, NormalizeError};
pub use normalize::normalize_row;
pub use reader::{RawRow, RowReader, open_rows};

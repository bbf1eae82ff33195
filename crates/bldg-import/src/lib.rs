pub mod driver;
pub mod outcome;
pub mod source;
pub mod upsert;

pub use driver::{ImportError, import};
pub use outcome::{BatchOutcome, RowError, RowFailure};
pub use source::ImportSource;
pub use upsert::{UpsertOutcome, upsert};

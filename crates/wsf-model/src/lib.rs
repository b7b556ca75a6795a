//! Data model for flattening long-format assessment worksheets.

pub mod columns;
pub mod error;
pub mod options;
pub mod record;
pub mod session;

pub use columns::{ColumnRepeat, OutputColumn};
pub use error::{FieldKind, Result, WorksheetError};
pub use options::{DEFAULT_MAX_DOMAIN_COUNT, DEFAULT_MAX_QUESTION_COUNT, FlattenOptions};
pub use record::{RESPONSE_FIELDS, ResponseRecord};
pub use session::{Assessment, Domain, DomainStudent, Response, Session, Student};

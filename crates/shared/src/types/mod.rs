//! Common type definitions.

pub mod id;
pub mod record;

pub use id::{EntryId, RecordId, SubjectId, UnitId};
pub use record::{RecordType, SourceIdentity};

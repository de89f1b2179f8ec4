//! Domain layer: hierarchy entities and business logic
//!
//! This layer touches no files and no terminal; the linker writes warnings
//! through a caller-supplied sink.

pub mod error;
pub mod linker;
pub mod records;
pub mod roster;
pub mod walk;

pub use error::{DomainError, DomainResult};
pub use linker::{link_managers, DanglingManager, LinkReport};
pub use records::PersonRecord;
pub use roster::{Person, Roster};
pub use walk::{all_reports, direct_reports, ReportsIter};

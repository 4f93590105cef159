//! Service layer for the alumni network.
//!
//! One service per domain area (alumni, students, events, mentorship). Each
//! composes the repositories (and downstream services) it needs, validates
//! input, performs uniqueness/existence checks, and translates database-layer
//! absence into its own error type. Services are stateless aside from the
//! pool handle and are constructed explicitly, never as process-wide singletons.

pub mod alumni;
pub mod event;
pub mod mentorship;
pub mod student;

pub use alumni::{AlumniError, AlumniService};
pub use event::{EventError, EventService};
pub use mentorship::{MentorshipError, MentorshipService};
pub use student::{StudentError, StudentService};

/// Classification of a service error, used by outer surfaces to pick an
/// HTTP status or exit message without matching every service's enum.
///
/// Dependency-wrapping variants report the kind of the error they wrap, so
/// a join against a missing event still classifies as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was missing or invalid.
    Validation,
    /// A unique field (e.g. email) already exists.
    Conflict,
    /// A referenced entity id does not exist.
    NotFound,
    /// The remote store failed underneath a valid request.
    Database,
}

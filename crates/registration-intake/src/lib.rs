//! Registration Intake - whitelist-validated registration form handling.
//!
//! This crate sits between a form-like UI surface and the rest of a page to:
//! - Validate registration fields against fixed whitelist patterns
//! - Keep accepted registrations in an append-only, in-memory log
//! - Render each accepted registration as a text-safe table row
//! - Hand every accepted registration to a pluggable submission hook
//! - Drive the module from line-delimited JSON form snapshots

pub mod config;
pub mod error;
pub mod hook;
pub mod host;
pub mod intake;
pub mod registry;
pub mod render;
pub mod status;
pub mod surface;
pub mod validation;

pub use config::IntakeConfig;
pub use error::IntakeError;
pub use hook::{NoopHook, SubmissionHook};
pub use host::{feed_snapshots, FeedSummary};
pub use intake::RegistrationIntake;
pub use registry::{FormFields, RegistrationLog, RegistrationRecord, ValidatedSubmission};
pub use surface::{FieldId, FormSurface, StatusSurface, SubmitEvent, Surfaces, TableSurface};
pub use validation::{validate_fields, RequiredFields};

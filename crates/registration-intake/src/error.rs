//! Error types for registration intake.

use thiserror::Error;

/// Default message shown to users for any rejected submission.
///
/// Deliberately does not distinguish bad input from an unavailable system.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "La información ingresada no es válida o el sistema no está disponible. Verifique sus datos.";

/// Intake error types.
///
/// These are for callers and logs. The text users see comes from the
/// configured status message, not from `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// One or more required fields failed their whitelist pattern.
    ///
    /// Carries no field detail on purpose.
    #[error("Invalid submission")]
    InvalidSubmission,
}

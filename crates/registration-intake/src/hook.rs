//! Submission hook invoked for every accepted registration.
//!
//! Transport to a backend is owned outside this crate. Implementations must
//! not panic and must return promptly; endpoint and credentials belong to the
//! implementation's own configuration, never to client-visible code.

use crate::registry::RegistrationRecord;

/// Receives each accepted record exactly once, after it has been rendered.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHook {
    fn submit(&self, record: &RegistrationRecord);
}

/// Hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl SubmissionHook for NoopHook {
    fn submit(&self, _record: &RegistrationRecord) {}
}

impl<F> SubmissionHook for F
where
    F: Fn(&RegistrationRecord),
{
    fn submit(&self, record: &RegistrationRecord) {
        self(record)
    }
}

//! The registration intake module: one synchronous submission at a time.

use crate::config::IntakeConfig;
use crate::error::IntakeError;
use crate::hook::{NoopHook, SubmissionHook};
use crate::registry::{RegistrationLog, RegistrationRecord, ValidatedSubmission};
use crate::render;
use crate::status::StatusIndicator;
use crate::surface::{FormSurface, StatusSurface, SubmitEvent, Surfaces, TableSurface};
use tracing::{debug, info};

/// Registration intake attached to a set of UI surfaces.
///
/// Owns the registration log for its whole lifetime; dropping the module
/// drops every record.
pub struct RegistrationIntake<F, T, S> {
    surfaces: Surfaces<F, T, S>,
    log: RegistrationLog,
    status: StatusIndicator,
    hook: Box<dyn SubmissionHook>,
}

impl<F, T, S> RegistrationIntake<F, T, S>
where
    F: FormSurface,
    T: TableSurface,
    S: StatusSurface,
{
    /// Attach to surfaces the host has finished building.
    ///
    /// Starts with an empty log and the no-op submission hook.
    pub fn setup(surfaces: Surfaces<F, T, S>, config: &IntakeConfig) -> Self {
        info!("Registration intake attached");

        Self {
            surfaces,
            log: RegistrationLog::new(),
            status: StatusIndicator::new(config.status.failure_message.clone()),
            hook: Box::new(NoopHook),
        }
    }

    /// Replace the submission hook.
    pub fn with_hook(mut self, hook: impl SubmissionHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Handle a submit event from the host.
    ///
    /// Suppresses the host's default submission before running [`Self::submit`].
    pub fn on_submit(
        &mut self,
        event: &mut SubmitEvent,
    ) -> Result<&RegistrationRecord, IntakeError> {
        event.prevent_default();
        self.submit()
    }

    /// Read, validate, store, render and hand off one submission.
    ///
    /// On rejection only the status surface changes: no record is created,
    /// the table is untouched and the form keeps its values.
    pub fn submit(&mut self) -> Result<&RegistrationRecord, IntakeError> {
        let fields = self.surfaces.form.read_fields();

        let submission = match ValidatedSubmission::try_from(fields) {
            Ok(submission) => submission,
            Err(e) => {
                debug!("Submission rejected by field validation");
                self.status.show_failure(&mut self.surfaces.status);
                return Err(e);
            }
        };

        self.status.clear(&mut self.surfaces.status);

        let record = self.log.append(submission);
        render::append_record(&mut self.surfaces.table, record);
        self.surfaces.form.reset();
        self.hook.submit(record);

        info!(record_id = record.id, "Registration accepted");

        Ok(record)
    }

    /// Accepted records in submission order.
    pub fn records(&self) -> &[RegistrationRecord] {
        self.log.records()
    }

    pub fn log(&self) -> &RegistrationLog {
        &self.log
    }

    pub fn surfaces(&self) -> &Surfaces<F, T, S> {
        &self.surfaces
    }

    /// Mutable access for the host, e.g. to type into the form.
    pub fn surfaces_mut(&mut self) -> &mut Surfaces<F, T, S> {
        &mut self.surfaces
    }

    /// Detach, returning the surfaces to the host.
    pub fn into_surfaces(self) -> Surfaces<F, T, S> {
        self.surfaces
    }
}

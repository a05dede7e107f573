//! Two-state status indicator.

use crate::surface::StatusSurface;

/// Drives a status surface between "hidden" and "showing the failure message".
///
/// There is exactly one message, so a user cannot tell which field
/// was rejected or whether the system itself is unavailable.
#[derive(Debug, Clone)]
pub struct StatusIndicator {
    failure_message: String,
}

impl StatusIndicator {
    pub fn new(failure_message: impl Into<String>) -> Self {
        Self {
            failure_message: failure_message.into(),
        }
    }

    pub fn show_failure<S: StatusSurface + ?Sized>(&self, surface: &mut S) {
        surface.show(&self.failure_message);
    }

    pub fn clear<S: StatusSurface + ?Sized>(&self, surface: &mut S) {
        surface.hide();
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new(crate::error::GENERIC_FAILURE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;
    use crate::surface::HtmlStatus;

    #[test]
    fn test_show_failure_then_clear() {
        let indicator = StatusIndicator::default();
        let mut surface = HtmlStatus::new();

        indicator.show_failure(&mut surface);
        assert!(surface.is_visible());
        assert_eq!(surface.text(), GENERIC_FAILURE_MESSAGE);

        indicator.clear(&mut surface);
        assert!(!surface.is_visible());
    }

    #[test]
    fn test_custom_message() {
        let indicator = StatusIndicator::new("Datos no válidos.");
        let mut surface = HtmlStatus::new();

        indicator.show_failure(&mut surface);
        assert_eq!(surface.text(), "Datos no válidos.");
    }
}

//! Completion callbacks invoked with a validated registration.

use tracing::info;

use regform_model::RegistrationData;

/// Receives each successfully validated registration.
///
/// This is the seam where a real registration service would be called.
pub trait CompletionHandler {
    fn on_complete(&mut self, data: &RegistrationData);
}

impl<F> CompletionHandler for F
where
    F: FnMut(&RegistrationData),
{
    fn on_complete(&mut self, data: &RegistrationData) {
        self(data);
    }
}

/// Confirmation text shown after a successful registration.
pub const CONFIRMATION: &str = "registration completed";

/// Placeholder handler that only acknowledges completion.
#[derive(Debug, Clone, Default)]
pub struct Acknowledge {
    completed: usize,
    last_confirmation: Option<&'static str>,
}

impl Acknowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations acknowledged so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.last_confirmation
    }
}

impl CompletionHandler for Acknowledge {
    fn on_complete(&mut self, data: &RegistrationData) {
        self.completed += 1;
        self.last_confirmation = Some(CONFIRMATION);
        info!(
            with_location = data.location.is_some(),
            completed = self.completed,
            "{CONFIRMATION}"
        );
    }
}

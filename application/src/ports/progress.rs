//! Progress notification port
//!
//! Lets the presentation layer show a busy indicator while a consultation
//! is in flight.

use consult_domain::{Model, Persona};

/// Callback for progress updates during a consultation
///
/// Implementations live in the presentation layer.
pub trait ConsultProgressNotifier: Send + Sync {
    /// Called right before the completion request is sent
    fn on_request_start(&self, persona: &Persona, model: &Model);

    /// Called once the request has finished, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsultProgressNotifier for NoProgress {
    fn on_request_start(&self, _persona: &Persona, _model: &Model) {}
    fn on_request_complete(&self, _success: bool) {}
}

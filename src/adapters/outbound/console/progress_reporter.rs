use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter writing status lines to stderr.
///
/// Stdout stays reserved for the formatted output so it can be piped
/// or redirected cleanly.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }
}

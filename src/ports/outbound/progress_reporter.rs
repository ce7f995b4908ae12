/// ProgressReporter port for user-facing status lines.
///
/// Kept separate from the presenters so progress chatter never mixes
/// into the formatted output stream.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message to the user.
    fn report(&self, message: &str);
}

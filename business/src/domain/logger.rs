/// Logging port used by the use cases. Messages are plain text; adapters
/// decide on levels, targets and formatting.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Verbose details such as filters and redirect targets.
    fn debug(&self, message: &str);
}

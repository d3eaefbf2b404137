/// Output formatting helpers.
///
/// Renders the final environment snapshot in the `(name=value,...)` report
/// format consumed by the command-line driver and the tests.
pub mod format;

use console::Style;

/// Outbound reporting for unexpected command failures.
///
/// Cancellation never goes through here; only genuine faults do, and they are
/// reported exactly once per invocation: one log entry plus one generic,
/// non-technical message. The fault detail stays in the log.
pub trait ErrorReporter: Send + Sync {
    fn error(&self, command_id: &str, err: &anyhow::Error);
    fn show_generic_error(&self, message: &str);
}

/// Default reporter: tracing for the log entry, styled stderr for the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn error(&self, command_id: &str, err: &anyhow::Error) {
        tracing::error!(command = command_id, error = ?err, "command failed");
    }

    fn show_generic_error(&self, message: &str) {
        let style = Style::new().red();
        eprintln!("{}", style.apply_to(message));
    }
}

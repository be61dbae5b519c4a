use std::sync::Mutex;
use tracing::error;

/// The two ways a failure reaches the outside: a blocking user alert, or a
/// diagnostic log line nobody is forced to read.
pub trait Notifier {
    fn alert(&self, message: &str);

    fn log_error(&self, message: &str);
}

/// Alerts go to stderr for the person at the terminal; diagnostics go through tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("alert: {message}");
    }

    fn log_error(&self, message: &str) {
        error!("{message}");
    }
}

/// Keeps every notification so callers can inspect which channel was used.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    logs: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }

    fn log_error(&self, message: &str) {
        error!("{message}");
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(message.to_string());
        }
    }
}

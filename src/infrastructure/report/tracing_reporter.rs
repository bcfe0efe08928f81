//! Reporter that writes login outcomes to `tracing`.

use tracing::{error, info, warn};

use crate::domain::Reporter;
use crate::domain::entities::LoginResponse;
use crate::error::LoginError;

/// Logs every response at `INFO` and every failed attempt at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO login_form::infrastructure::report::tracing_reporter: Login response status=200 body={"token":"abc"}
/// WARN login_form::infrastructure::report::tracing_reporter: Login request failed error=Network error: connection refused
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn response(&self, response: &LoginResponse) {
        info!(
            status = response.status,
            body = %response.to_json_string(),
            "Login response"
        );
    }

    fn failure(&self, e: &LoginError) {
        if e.is_attempt_failure() {
            warn!(error = %e, "Login request failed");
        } else {
            error!(error = %e, "Login form misconfigured");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(report: impl FnOnce(&TracingReporter)) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || report(&TracingReporter::new()));

        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_response_logs_status_and_body() {
        let output = capture(|reporter| {
            reporter.response(&LoginResponse::new(200, json!({"token": "abc"})));
        });

        assert!(output.contains("INFO"));
        assert!(output.contains("Login response"));
        assert!(output.contains("status=200"));
        assert!(output.contains(r#"body={"token":"abc"}"#));
    }

    #[test]
    fn test_attempt_failure_logs_warning() {
        let output = capture(|reporter| {
            reporter.failure(&LoginError::Network("connection refused".into()));
        });

        assert!(output.contains("WARN"));
        assert!(output.contains("Login request failed"));
        assert!(output.contains("connection refused"));
    }

    #[test]
    fn test_setup_failure_logs_error() {
        let output = capture(|reporter| {
            reporter.failure(&LoginError::Config("bad base url".into()));
        });

        assert!(output.contains("ERROR"));
        assert!(output.contains("Login form misconfigured"));
        assert!(!output.contains("WARN"));
    }
}

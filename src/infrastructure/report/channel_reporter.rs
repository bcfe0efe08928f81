//! Reporter that forwards login outcomes to an async channel.

use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::entities::LoginResponse;
use crate::domain::{Report, Reporter};
use crate::error::LoginError;

/// Sends each outcome as a [`Report`] to an unbounded channel.
///
/// Used by the CLI to wait for a known number of outcomes, and by tests to
/// assert on them. A closed receiver is not an error; the report is dropped.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<Report>,
}

impl ChannelReporter {
    pub fn new(tx: mpsc::UnboundedSender<Report>) -> Self {
        Self { tx }
    }

    /// Creates a reporter together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Report>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, report: Report) {
        if self.tx.send(report).is_err() {
            debug!("Report receiver dropped");
        }
    }
}

impl Reporter for ChannelReporter {
    fn response(&self, response: &LoginResponse) {
        self.send(Report::Response(response.clone()));
    }

    fn failure(&self, error: &LoginError) {
        self.send(Report::Failure(error.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reports_arrive_in_order() {
        let (reporter, mut rx) = ChannelReporter::channel();

        reporter.response(&LoginResponse::new(200, json!({"token": "abc"})));
        reporter.failure(&LoginError::Network("refused".into()));

        let first = rx.try_recv().unwrap();
        assert_eq!(first.message(), r#"{"token":"abc"}"#);

        let second = rx.try_recv().unwrap();
        assert_eq!(second, Report::Failure(LoginError::Network("refused".into())));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (reporter, rx) = ChannelReporter::channel();
        drop(rx);

        reporter.failure(&LoginError::Parse("oops".into()));
    }
}

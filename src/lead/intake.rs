use log::{info, warn};
use serde::Deserialize;

use super::error::SubmitError;
use super::form::LeadForm;

/// Raw answer from the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeReply {
    pub status: u16,
    pub body: String,
}

impl IntakeReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a reply (network down, CORS block, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError(pub String);

/// Anything that can carry a lead to the intake service.
#[allow(async_fn_in_trait)]
pub trait LeadIntake {
    async fn deliver(&self, lead: &LeadForm) -> Result<IntakeReply, TransportError>;
}

#[derive(Deserialize)]
struct RejectionBody {
    errors: Option<Vec<RejectionEntry>>,
}

#[derive(Deserialize)]
struct RejectionEntry {
    #[serde(default)]
    message: String,
}

/// Turns a non-2xx reply into the error shown to the user.
pub fn classify_rejection(reply: &IntakeReply) -> SubmitError {
    let reasons = serde_json::from_str::<RejectionBody>(&reply.body)
        .ok()
        .and_then(|body| body.errors)
        // An empty list would render as a blank message; use the generic one.
        .filter(|entries| !entries.is_empty())
        .map(|entries| {
            entries
                .into_iter()
                .map(|entry| entry.message)
                .collect::<Vec<_>>()
                .join(", ")
        });

    match reasons {
        Some(reasons) => SubmitError::Rejected(reasons),
        None => SubmitError::Generic(reply.status),
    }
}

/// Sends the lead once and classifies the outcome. No retries.
pub async fn submit<I: LeadIntake>(intake: &I, lead: &LeadForm) -> Result<(), SubmitError> {
    match intake.deliver(lead).await {
        Ok(reply) if reply.is_success() => {
            info!("Lead accepted with status {}", reply.status);
            Ok(())
        }
        Ok(reply) => {
            let err = classify_rejection(&reply);
            warn!("Lead rejected: {}", err);
            Err(err)
        }
        Err(TransportError(cause)) => {
            warn!("Lead request failed: {}", cause);
            Err(SubmitError::Transport(cause))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every lead it receives and answers with a canned result.
    pub(crate) struct RecordingIntake {
        pub(crate) reply: Result<IntakeReply, TransportError>,
        pub(crate) sent: RefCell<Vec<LeadForm>>,
    }

    impl RecordingIntake {
        pub(crate) fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(IntakeReply { status, body: body.to_string() }),
                sent: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(cause: &str) -> Self {
            Self {
                reply: Err(TransportError(cause.to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl LeadIntake for RecordingIntake {
        async fn deliver(&self, lead: &LeadForm) -> Result<IntakeReply, TransportError> {
            self.sent.borrow_mut().push(lead.clone());
            self.reply.clone()
        }
    }

    fn lead() -> LeadForm {
        LeadForm::new("Carla", "21987654321", "carla@example.com")
    }

    #[test]
    fn sends_exactly_one_request_with_the_fields() {
        let intake = RecordingIntake::answering(200, r#"{"ok":true}"#);

        assert_eq!(block_on(submit(&intake, &lead())), Ok(()));
        assert_eq!(*intake.sent.borrow(), vec![lead()]);
    }

    #[test]
    fn any_2xx_counts_as_success() {
        let intake = RecordingIntake::answering(204, "");
        assert_eq!(block_on(submit(&intake, &lead())), Ok(()));
    }

    #[test]
    fn joins_rejection_messages_with_commas() {
        let intake = RecordingIntake::answering(
            422,
            r#"{"errors":[{"message":"Required"},{"message":"Invalid"}]}"#,
        );

        let err = block_on(submit(&intake, &lead())).unwrap_err();
        assert_eq!(err.user_message(), "Required, Invalid");
    }

    #[test]
    fn missing_error_list_falls_back_to_generic() {
        let intake = RecordingIntake::answering(500, r#"{"error":"boom"}"#);

        let err = block_on(submit(&intake, &lead())).unwrap_err();
        assert_eq!(err, SubmitError::Generic(500));
        assert_eq!(err.user_message(), SubmitError::Generic(0).user_message());
    }

    #[test]
    fn unreadable_or_empty_error_lists_fall_back_to_generic() {
        let html = IntakeReply { status: 502, body: "<html>Bad Gateway</html>".to_string() };
        let empty = IntakeReply { status: 400, body: r#"{"errors":[]}"#.to_string() };

        assert_eq!(classify_rejection(&html), SubmitError::Generic(502));
        assert_eq!(classify_rejection(&empty), SubmitError::Generic(400));
    }

    #[test]
    fn transport_failure_keeps_the_cause() {
        let intake = RecordingIntake::failing("TypeError: Failed to fetch");

        let err = block_on(submit(&intake, &lead())).unwrap_err();
        assert_eq!(err, SubmitError::Transport("TypeError: Failed to fetch".to_string()));
        assert!(err.user_message().contains("CORS"));
    }
}

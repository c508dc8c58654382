use super::error::SubmitError;
use super::form::{LeadField, LeadForm};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

/// Form contents plus submission progress for one mounted signup form.
///
/// Starting a submission goes through [`LeadSession::begin`], which hands out
/// the payload at most once until [`LeadSession::finish`] is called.
#[derive(Debug, Default)]
pub struct LeadSession {
    form: LeadForm,
    state: SubmissionState,
}

impl LeadSession {
    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            SubmissionState::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    pub fn update(&mut self, field: LeadField, value: String) {
        self.form.set(field, value);
    }

    /// Decides whether a submit may go out. Returns the payload to send, or
    /// `None` when nothing must be sent (already in flight, offline, empty field).
    pub fn begin(&mut self, online: bool) -> Option<LeadForm> {
        if self.is_submitting() {
            return None;
        }
        if !online {
            self.state = SubmissionState::Failed(SubmitError::Offline);
            return None;
        }
        if !self.form.is_complete() {
            self.state = SubmissionState::Failed(SubmitError::Incomplete);
            return None;
        }

        self.state = SubmissionState::Submitting;
        Some(self.form.clone())
    }

    /// Records the outcome of the in-flight submission. Returns `true` when
    /// the caller should move to the thank-you view.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if !self.is_submitting() {
            return false;
        }

        match outcome {
            Ok(()) => {
                self.form.clear();
                self.state = SubmissionState::Succeeded;
                true
            }
            Err(err) => {
                self.state = SubmissionState::Failed(err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::intake::submit;
    use crate::lead::intake::tests::RecordingIntake;
    use futures::executor::block_on;

    fn filled() -> LeadSession {
        let mut session = LeadSession::default();
        session.update(LeadField::Name, "Rafael".to_string());
        session.update(LeadField::Contact, "31912345678".to_string());
        session.update(LeadField::Email, "rafael@example.com".to_string());
        session
    }

    /// Mirrors what the signup form does on submit.
    fn run(session: &mut LeadSession, intake: &RecordingIntake, online: bool) -> bool {
        match session.begin(online) {
            Some(lead) => {
                let outcome = block_on(submit(intake, &lead));
                session.finish(outcome)
            }
            None => false,
        }
    }

    #[test]
    fn success_clears_form_and_navigates_once() {
        let mut session = filled();
        let intake = RecordingIntake::answering(200, "{}");

        assert!(run(&mut session, &intake, true));
        assert_eq!(session.form(), &LeadForm::default());
        assert_eq!(session.state(), &SubmissionState::Succeeded);
        assert_eq!(intake.sent.borrow().len(), 1);

        // A late duplicate completion must not navigate again.
        assert!(!session.finish(Ok(())));
    }

    #[test]
    fn offline_sends_nothing() {
        let mut session = filled();
        let intake = RecordingIntake::answering(200, "{}");

        assert!(!run(&mut session, &intake, false));
        assert!(intake.sent.borrow().is_empty());
        assert_eq!(session.state(), &SubmissionState::Failed(SubmitError::Offline));
        assert_eq!(session.error_message(), Some(SubmitError::Offline.user_message()));
    }

    #[test]
    fn blank_form_sends_nothing() {
        let mut session = LeadSession::default();
        session.update(LeadField::Name, "Ana".to_string());
        let intake = RecordingIntake::answering(200, "{}");

        assert!(!run(&mut session, &intake, true));
        assert!(intake.sent.borrow().is_empty());
        assert_eq!(session.state(), &SubmissionState::Failed(SubmitError::Incomplete));
    }

    #[test]
    fn whitespace_only_field_is_still_sent() {
        let mut session = LeadSession::default();
        session.update(LeadField::Name, " ".to_string());
        session.update(LeadField::Contact, "11999990000".to_string());
        session.update(LeadField::Email, "a@b.co".to_string());
        let intake = RecordingIntake::answering(200, "{}");

        assert!(run(&mut session, &intake, true));
        assert_eq!(*intake.sent.borrow(), vec![LeadForm::new(" ", "11999990000", "a@b.co")]);
        assert_eq!(session.state(), &SubmissionState::Succeeded);
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut session = filled();

        assert!(session.begin(true).is_some());
        assert!(session.is_submitting());
        assert_eq!(session.begin(true), None);
        assert!(session.is_submitting());
    }

    #[test]
    fn failure_keeps_the_input_for_a_retry() {
        let mut session = filled();
        let before = session.form().clone();
        let intake = RecordingIntake::answering(
            422,
            r#"{"errors":[{"message":"Required"},{"message":"Invalid"}]}"#,
        );

        assert!(!run(&mut session, &intake, true));
        assert_eq!(session.form(), &before);
        assert!(!session.is_submitting());
        assert_eq!(session.error_message().as_deref(), Some("Required, Invalid"));

        let retry = RecordingIntake::answering(201, "{}");
        assert!(run(&mut session, &retry, true));
        assert_eq!(*retry.sent.borrow(), vec![before]);
    }

    #[test]
    fn transport_failure_clears_submitting_with_hint() {
        let mut session = filled();
        let intake = RecordingIntake::failing("TypeError: Failed to fetch");

        assert!(!run(&mut session, &intake, true));
        assert!(!session.is_submitting());
        assert!(session.error_message().unwrap().contains("CORS"));
    }

    #[test]
    fn starting_again_clears_the_previous_error() {
        let mut session = filled();
        session.begin(false);
        assert!(session.error_message().is_some());

        assert!(session.begin(true).is_some());
        assert_eq!(session.error_message(), None);
    }
}

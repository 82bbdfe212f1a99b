//! Demo request submission pipeline
//!
//! `FormController` owns the field values and the submission lifecycle:
//!
//! ```text
//! Idle ──submit (valid)──▶ Sending ──2xx──────────────▶ Sent ──reset──▶ Idle
//!   │                        └────non-2xx/transport/timeout──▶ Failed
//!   └──submit (missing required)─────────────────────────────▶ Failed
//! Failed ──submit──▶ (same rules as Idle)
//! ```
//!
//! Submitting is split in two so the host can run the request elsewhere:
//! [`FormController::submit`] validates and hands out the request body, and
//! [`FormController::complete_submission`] applies the outcome. While a
//! request is outstanding further submits are ignored.

use super::forms::{DemoRequestFields, FieldKey, FormPhase, FormState, FormStatus, SubmissionReceipt};
use super::listeners::{ListenerId, Listeners};
use crate::api::DemoRequestTransport;
use crate::error::{FormError, SubmissionError};

/// Controller for one mounted demo request form
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    listeners: Listeners<FormState>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.state.status()
    }

    /// Register a callback fired after every state change
    pub fn on_state_change(
        &mut self,
        callback: impl Fn(&FormState) + Send + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replace one field value. Never touches the status.
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.state.fields.set(key, value.into());
        self.notify();
    }

    /// Validate and move to `Sending`.
    ///
    /// Returns the request body to send, or `None` when nothing must be sent:
    /// a request is already in flight, the form was already sent, or a
    /// required field is blank (the form is then `Failed`).
    pub fn submit(&mut self) -> Option<DemoRequestFields> {
        match self.state.phase {
            FormPhase::Sending => {
                tracing::debug!("Ignoring submit while a demo request is in flight");
                return None;
            }
            FormPhase::Sent { .. } => {
                tracing::debug!("Ignoring submit after the demo request was sent");
                return None;
            }
            FormPhase::Idle | FormPhase::Failed { .. } => {}
        }

        let missing = self.state.fields.missing_required();
        if !missing.is_empty() {
            let missing: Vec<&'static str> = missing.into_iter().map(FieldKey::label).collect();
            tracing::debug!("Demo request rejected, missing {}", missing.join(", "));
            self.state.phase = FormPhase::Failed {
                error: FormError::Validation { missing },
            };
            self.notify();
            return None;
        }

        self.state.phase = FormPhase::Sending;
        self.notify();
        Some(self.state.fields.clone())
    }

    /// Apply the outcome of the request handed out by [`Self::submit`]
    pub fn complete_submission(
        &mut self,
        outcome: Result<Option<SubmissionReceipt>, SubmissionError>,
    ) {
        if !self.state.is_sending() {
            tracing::warn!(
                "Dropping submission outcome received in {:?} state",
                self.state.status()
            );
            return;
        }

        match outcome {
            Ok(receipt) => {
                match &receipt {
                    Some(r) => tracing::info!("Demo request stored as {}", r.id),
                    None => tracing::info!("Demo request accepted"),
                }
                self.state.fields.clear();
                self.state.phase = FormPhase::Sent { receipt };
            }
            Err(err) => {
                tracing::warn!("Demo request failed: {err:?}");
                self.state.phase = FormPhase::Failed { error: err.into() };
            }
        }
        self.notify();
    }

    /// Submit and await the transport in place.
    ///
    /// Returns whether a request was sent.
    pub async fn submit_with<T>(&mut self, transport: &T) -> bool
    where
        T: DemoRequestTransport + ?Sized,
    {
        let Some(fields) = self.submit() else {
            return false;
        };
        let outcome = transport.send_demo_request(&fields).await;
        self.complete_submission(outcome);
        true
    }

    /// "Send another request": leave `Sent` and start over
    pub fn reset(&mut self) {
        if self.status() != FormStatus::Sent {
            return;
        }
        self.state.phase = FormPhase::Idle;
        self.notify();
    }

    fn notify(&self) {
        self.listeners.emit(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDemoRequestTransport;
    use crate::error::{SUBMISSION_MESSAGE, TIMEOUT_MESSAGE, VALIDATION_MESSAGE};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    fn filled_fields() -> DemoRequestFields {
        DemoRequestFields {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: "C".to_string(),
            role: String::new(),
            message: String::new(),
        }
    }

    fn filled_controller() -> FormController {
        let mut form = FormController::new();
        let fields = filled_fields();
        for key in FieldKey::ALL {
            form.update_field(key, fields.get(key));
        }
        form
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn transport_returning(
        times: usize,
        outcome: Result<Option<SubmissionReceipt>, SubmissionError>,
    ) -> MockDemoRequestTransport {
        let mut mock = MockDemoRequestTransport::new();
        mock.expect_send_demo_request()
            .times(times)
            .returning(move |_| outcome.clone());
        mock
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_idle_and_empty() {
            let form = FormController::new();
            assert_eq!(form.status(), FormStatus::Idle);
            assert!(form.state().fields.is_empty());
            assert!(form.state().error_message().is_none());
        }

        #[test]
        fn test_update_field_keeps_idle() {
            let mut form = FormController::new();
            form.update_field(FieldKey::Role, "Asset manager");
            assert_eq!(form.status(), FormStatus::Idle);
            assert_eq!(form.state().fields.role, "Asset manager");
        }

        #[test]
        fn test_update_field_keeps_failed_error_visible() {
            let mut form = FormController::new();
            form.submit();
            form.update_field(FieldKey::Name, "A");
            assert_eq!(form.status(), FormStatus::Failed);
            assert_eq!(
                form.state().error_message().as_deref(),
                Some(VALIDATION_MESSAGE)
            );
        }

        #[test]
        fn test_update_field_accepts_any_text() {
            let mut form = FormController::new();
            form.update_field(FieldKey::Message, "line one\nline two\t✓");
            assert_eq!(form.state().fields.message, "line one\nline two\t✓");
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_each_blank_required_field_fails_without_network_call() {
            for key in [FieldKey::Name, FieldKey::Email, FieldKey::Company] {
                for blank in ["", "   ", "\n\t"] {
                    let mut form = filled_controller();
                    form.update_field(key, blank);
                    let transport = transport_returning(0, Ok(None));

                    let sent = tokio_test::block_on(form.submit_with(&transport));

                    assert!(!sent);
                    assert_eq!(form.status(), FormStatus::Failed);
                    assert_eq!(
                        form.state().error(),
                        Some(&FormError::Validation {
                            missing: vec![key.label()]
                        })
                    );
                }
            }
        }

        #[test]
        fn test_empty_form_reports_all_missing() {
            let mut form = FormController::new();
            assert!(form.submit().is_none());
            assert_eq!(
                form.state().error(),
                Some(&FormError::Validation {
                    missing: vec!["Name", "Email", "Company"]
                })
            );
        }

        #[test]
        fn test_optional_fields_may_be_blank() {
            let mut form = filled_controller();
            assert_eq!(form.submit(), Some(filled_fields()));
            assert_eq!(form.status(), FormStatus::Sending);
        }

        #[test]
        fn test_failed_validation_keeps_fields() {
            let mut form = filled_controller();
            form.update_field(FieldKey::Email, " ");
            form.submit();
            assert_eq!(form.state().fields.name, "A");
            assert_eq!(form.state().fields.company, "C");
        }

        #[test]
        fn test_resubmit_after_fix_sends() {
            let mut form = FormController::new();
            form.submit();
            assert_eq!(form.status(), FormStatus::Failed);

            let fields = filled_fields();
            for key in FieldKey::ALL {
                form.update_field(key, fields.get(key));
            }
            assert!(form.submit().is_some());
            assert_eq!(form.status(), FormStatus::Sending);
            assert!(form.state().error_message().is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_clears_fields_and_sends_once() {
            let mut form = filled_controller();
            let mut transport = MockDemoRequestTransport::new();
            transport
                .expect_send_demo_request()
                .withf(|fields| *fields == filled_fields())
                .times(1)
                .returning(|_| Ok(None));

            let sent = tokio_test::block_on(form.submit_with(&transport));

            assert!(sent);
            assert_eq!(
                form.state(),
                &FormState {
                    fields: DemoRequestFields::default(),
                    phase: FormPhase::Sent { receipt: None },
                }
            );
        }

        #[test]
        fn test_success_keeps_receipt() {
            let mut form = filled_controller();
            let receipt = receipt();
            let transport = transport_returning(1, Ok(Some(receipt.clone())));

            tokio_test::block_on(form.submit_with(&transport));

            assert_eq!(form.state().receipt(), Some(&receipt));
        }

        #[test]
        fn test_second_submit_while_sending_is_noop() {
            let mut form = filled_controller();
            let transport = transport_returning(1, Ok(None));

            let body = form.submit().expect("first submit sends");
            assert!(form.submit().is_none());
            assert!(form.submit().is_none());
            assert_eq!(form.status(), FormStatus::Sending);

            let outcome = tokio_test::block_on(transport.send_demo_request(&body));
            form.complete_submission(outcome);
            assert_eq!(form.status(), FormStatus::Sent);
        }

        #[test]
        fn test_server_error_preserves_fields() {
            let mut form = filled_controller();
            let transport = transport_returning(1, Err(SubmissionError::Status(500)));

            tokio_test::block_on(form.submit_with(&transport));

            assert_eq!(form.status(), FormStatus::Failed);
            assert_eq!(
                form.state().error_message().as_deref(),
                Some(SUBMISSION_MESSAGE)
            );
            assert_eq!(form.state().fields, filled_fields());
        }

        #[test]
        fn test_network_failure_preserves_fields() {
            let mut form = filled_controller();
            let transport = transport_returning(
                1,
                Err(SubmissionError::Transport("connection refused".into())),
            );

            tokio_test::block_on(form.submit_with(&transport));

            assert_eq!(form.status(), FormStatus::Failed);
            assert!(form.state().error_message().is_some());
            assert_eq!(form.state().fields, filled_fields());
        }

        #[test]
        fn test_timeout_has_own_message() {
            let mut form = filled_controller();
            let transport = transport_returning(1, Err(SubmissionError::Timeout));

            tokio_test::block_on(form.submit_with(&transport));

            assert_eq!(form.state().error_message().as_deref(), Some(TIMEOUT_MESSAGE));
        }

        #[test]
        fn test_retry_after_failure_sends_again() {
            let mut form = filled_controller();
            let mut transport = MockDemoRequestTransport::new();
            let mut seq = mockall::Sequence::new();
            transport
                .expect_send_demo_request()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(SubmissionError::Status(503)));
            transport
                .expect_send_demo_request()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(None));

            tokio_test::block_on(form.submit_with(&transport));
            assert_eq!(form.status(), FormStatus::Failed);
            tokio_test::block_on(form.submit_with(&transport));
            assert_eq!(form.status(), FormStatus::Sent);
            assert!(form.state().fields.is_empty());
        }

        #[test]
        fn test_submit_after_sent_is_ignored() {
            let mut form = filled_controller();
            let transport = transport_returning(1, Ok(None));
            tokio_test::block_on(form.submit_with(&transport));

            assert!(!tokio_test::block_on(form.submit_with(&transport)));
            assert_eq!(form.status(), FormStatus::Sent);
        }

        #[test]
        fn test_outcome_without_pending_request_is_dropped() {
            let mut form = filled_controller();
            form.complete_submission(Ok(None));
            assert_eq!(form.status(), FormStatus::Idle);
            assert_eq!(form.state().fields, filled_fields());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_from_sent_returns_to_idle() {
            let mut form = filled_controller();
            let transport = transport_returning(1, Ok(Some(receipt())));
            tokio_test::block_on(form.submit_with(&transport));

            form.reset();

            assert_eq!(form.state(), &FormState::default());
            assert!(form.state().error_message().is_none());
        }

        #[test]
        fn test_reset_outside_sent_is_noop() {
            let mut form = FormController::new();
            form.submit();
            form.reset();
            assert_eq!(form.status(), FormStatus::Failed);

            let mut sending = filled_controller();
            sending.submit();
            sending.reset();
            assert_eq!(sending.status(), FormStatus::Sending);
        }
    }

    mod listeners {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_state_changes_are_published() {
            let statuses = Arc::new(Mutex::new(Vec::new()));
            let mut form = FormController::new();
            let sink = Arc::clone(&statuses);
            form.on_state_change(move |state| sink.lock().unwrap().push(state.status()));

            let fields = filled_fields();
            for key in [FieldKey::Name, FieldKey::Email, FieldKey::Company] {
                form.update_field(key, fields.get(key));
            }
            form.submit();
            form.complete_submission(Ok(None));
            form.reset();

            assert_eq!(
                *statuses.lock().unwrap(),
                vec![
                    FormStatus::Idle,
                    FormStatus::Idle,
                    FormStatus::Idle,
                    FormStatus::Sending,
                    FormStatus::Sent,
                    FormStatus::Idle,
                ]
            );
        }

        #[test]
        fn test_ignored_submit_does_not_publish() {
            let count = Arc::new(Mutex::new(0));
            let mut form = filled_controller();
            form.submit();
            let counter = Arc::clone(&count);
            form.on_state_change(move |_| *counter.lock().unwrap() += 1);

            form.submit();

            assert_eq!(*count.lock().unwrap(), 0);
        }

        #[test]
        fn test_removed_listener_is_silent() {
            let count = Arc::new(Mutex::new(0));
            let mut form = FormController::new();
            let counter = Arc::clone(&count);
            let id = form.on_state_change(move |_| *counter.lock().unwrap() += 1);
            assert!(form.remove_listener(id));

            form.update_field(FieldKey::Name, "A");

            assert_eq!(*count.lock().unwrap(), 0);
        }
    }
}

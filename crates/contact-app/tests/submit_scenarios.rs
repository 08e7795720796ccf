//! End-to-end submission scenarios over mock effect handlers.

use contact_app::{SubmissionController, SubmitOutcome, FAILURE_NOTICE, SUCCESS_NOTICE};
use contact_core::{AuthSnapshot, ContactError, Field, SubmissionPhase};
use contact_testkit::{RecordingNotifier, ScriptedTransport};
use std::sync::Arc;

fn controller(
    auth: AuthSnapshot,
    transport: ScriptedTransport,
) -> (
    Arc<SubmissionController>,
    Arc<RecordingNotifier>,
    Arc<ScriptedTransport>,
) {
    let notifier = Arc::new(RecordingNotifier::new());
    let transport = Arc::new(transport);
    let controller = Arc::new(SubmissionController::new(
        auth,
        notifier.clone(),
        transport.clone(),
    ));
    (controller, notifier, transport)
}

fn fill(controller: &SubmissionController, name: &str, email: &str, message: &str) {
    controller.state().set_field(Field::Name, name);
    controller.state().set_field(Field::Email, email);
    controller.state().set_field(Field::Message, message);
}

#[tokio::test]
async fn validation_failure_makes_no_network_call() {
    // Scenario A: anonymous, missing name and email.
    let (controller, notifier, transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::created());
    fill(&controller, "", "", "hi");

    assert_eq!(controller.submit().await, SubmitOutcome::Rejected);

    let errors = controller.state().errors();
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Message), None);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(notifier.success_count() + notifier.failure_count(), 0);
    assert_eq!(controller.state().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn malformed_email_is_the_only_error() {
    // Scenario B.
    let (controller, _notifier, transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::created());
    fill(&controller, "Ana", "bad", "hi");

    assert_eq!(controller.submit().await, SubmitOutcome::Rejected);

    let errors = controller.state().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn success_notifies_and_resets_anonymous_form() {
    // Scenario C.
    let (controller, notifier, transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::created());
    fill(&controller, "Ana", "a@b.com", "hi");

    assert_eq!(controller.submit().await, SubmitOutcome::Accepted);

    assert_eq!(notifier.successes(), vec![SUCCESS_NOTICE]);
    assert_eq!(notifier.failure_count(), 0);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "a@b.com");
    assert_eq!(requests[0].name, "Ana");
    assert_eq!(requests[0].message, "hi");

    let data = controller.state().data();
    assert_eq!(data.name, "");
    assert_eq!(data.email, "");
    assert_eq!(data.message, "");
    assert_eq!(controller.state().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn success_keeps_identifier_for_authenticated_visitor() {
    // Scenario D: email is prefilled from the identity and survives the reset.
    let (controller, notifier, transport) = controller(
        AuthSnapshot::authenticated("a@b.com"),
        ScriptedTransport::created(),
    );
    controller.state().set_field(Field::Name, "Ana");
    controller.state().set_field(Field::Message, "hi");

    assert_eq!(controller.state().data().email, "a@b.com");
    assert_eq!(controller.submit().await, SubmitOutcome::Accepted);

    assert_eq!(notifier.success_count(), 1);
    assert_eq!(transport.requests()[0].email, "a@b.com");

    let data = controller.state().data();
    assert_eq!(data.name, "");
    assert_eq!(data.email, "a@b.com");
    assert_eq!(data.message, "");
}

#[tokio::test]
async fn authenticated_email_is_never_validated() {
    // An identity that is not email-shaped still submits cleanly.
    let (controller, _notifier, transport) = controller(
        AuthSnapshot::authenticated("user-42"),
        ScriptedTransport::created(),
    );
    controller.state().set_field(Field::Name, "Ana");
    controller.state().set_field(Field::Message, "hi");

    assert_eq!(controller.submit().await, SubmitOutcome::Accepted);
    assert_eq!(transport.requests()[0].email, "user-42");
}

#[tokio::test]
async fn non_created_status_preserves_input() {
    // Scenario E, status branch.
    let (controller, notifier, transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::status(500));
    fill(&controller, "Ana", "a@b.com", "hi");
    let before = controller.state().data();

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);

    assert_eq!(notifier.failures(), vec![FAILURE_NOTICE]);
    assert_eq!(notifier.success_count(), 0);
    assert_eq!(transport.request_count(), 1);
    assert_eq!(controller.state().data(), before);
    assert_eq!(controller.state().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn transport_error_preserves_input() {
    // Scenario E, failure branch.
    let (controller, notifier, _transport) = controller(
        AuthSnapshot::anonymous(),
        ScriptedTransport::failing("connection reset"),
    );
    fill(&controller, "Ana", "a@b.com", "hi");
    let before = controller.state().data();

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);

    assert_eq!(notifier.failures(), vec![FAILURE_NOTICE]);
    assert_eq!(controller.state().data(), before);
    assert_eq!(controller.state().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn second_submit_while_in_flight_is_rejected() {
    let (controller, notifier, transport) = controller(
        AuthSnapshot::anonymous(),
        ScriptedTransport::created().gated(),
    );
    fill(&controller, "Ana", "a@b.com", "hi");

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };

    // Wait for the first submit to reach the transport and hold there.
    while transport.request_count() == 0 {
        tokio::task::yield_now().await;
    }
    assert_eq!(controller.state().phase(), SubmissionPhase::Submitting);

    // Re-entrant call: no second request, no notification.
    assert_eq!(controller.submit().await, SubmitOutcome::AlreadyInFlight);
    assert_eq!(transport.request_count(), 1);

    transport.release();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Accepted);
    assert_eq!(transport.request_count(), 1);
    assert_eq!(notifier.success_count(), 1);
    assert_eq!(controller.state().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn resubmit_after_failure_reuses_preserved_input() {
    // Manual retry: the user just presses submit again.
    let (controller, notifier, transport) = controller(
        AuthSnapshot::anonymous(),
        ScriptedTransport::with_responses([
            Err(ContactError::network("timeout")),
            Ok(contact_core::STATUS_CREATED),
        ]),
    );
    fill(&controller, "Ana", "a@b.com", "hi");

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(controller.submit().await, SubmitOutcome::Accepted);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(notifier.failure_count(), 1);
    assert_eq!(notifier.success_count(), 1);
}

#[tokio::test]
async fn validation_errors_are_replaced_not_merged() {
    let (controller, _notifier, _transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::created());
    fill(&controller, "", "", "");

    assert_eq!(controller.submit().await, SubmitOutcome::Rejected);
    assert_eq!(controller.state().errors().len(), 3);

    // Fixing two fields leaves exactly one error on the next attempt.
    controller.state().set_field(Field::Name, "Ana");
    controller.state().set_field(Field::Email, "a@b.com");
    assert_eq!(controller.submit().await, SubmitOutcome::Rejected);

    let errors = controller.state().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Message), Some("Message is required"));
}

#[tokio::test]
async fn late_login_prefills_email_once() {
    let (controller, _notifier, transport) =
        controller(AuthSnapshot::anonymous(), ScriptedTransport::created());
    assert_eq!(controller.state().data().email, "");

    controller.update_auth(AuthSnapshot::authenticated("a@b.com"));
    assert_eq!(controller.state().data().email, "a@b.com");

    // Same transition observed again: no re-fire.
    controller.update_auth(AuthSnapshot::authenticated("other@b.com"));
    assert_eq!(controller.state().data().email, "a@b.com");

    // Authenticated now, so email is implicit and the submit goes through.
    controller.state().set_field(Field::Name, "Ana");
    controller.state().set_field(Field::Message, "hi");
    assert_eq!(controller.submit().await, SubmitOutcome::Accepted);
    assert_eq!(transport.requests()[0].email, "a@b.com");
}

//! Contact form journeys against the simulated gateway.
//!
//! All tests run on a paused clock: the virtual time only advances while
//! the runtime is idle, so latency assertions are exact.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use vitrine_core::{
    ContactMessage, FormSession, FormState, SimulatedGateway, SubmissionError, SUBMIT_LATENCY_MS,
};

fn valid_message() -> ContactMessage {
    ContactMessage::new(
        "Priya Nair",
        "priya@example.com",
        "Workshop inquiry",
        "Do you have availability in March?",
    )
}

// ── Visitor journeys ─────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn a_visitor_fixes_their_email_and_retries() {
    let gateway = Arc::new(SimulatedGateway::new());
    let mut session = FormSession::new(gateway.clone());

    // First attempt: typo in the address. Fails fast, gateway untouched.
    let started = Instant::now();
    let mut message = valid_message();
    message.email = "priya.example.com".to_string();
    let err = session.submit(message).await.expect_err("invalid email");

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(matches!(err, SubmissionError::Invalid(_)));
    assert!(gateway.received().is_empty());

    // Second attempt with the fixed address goes through.
    session.reset();
    let started = Instant::now();
    session.submit(valid_message()).await.expect("accepted");

    assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
    assert!(matches!(session.state(), FormState::Succeeded { .. }));
    assert_eq!(session.attempts(), 2);
    assert_eq!(gateway.received().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn an_intranet_address_reaches_the_gateway() {
    // Dotless domains pass the form's type="email" check, so they must
    // pass here too instead of failing fast.
    let gateway = Arc::new(SimulatedGateway::new());
    let mut session = FormSession::new(gateway.clone());

    let mut message = valid_message();
    message.email = "priya@intranet".to_string();

    let started = Instant::now();
    session.submit(message).await.expect("accepted");

    assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
    assert!(matches!(session.state(), FormState::Succeeded { .. }));
    assert_eq!(gateway.received().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn message_contents_do_not_change_the_latency() {
    let mut session = FormSession::new(Arc::new(SimulatedGateway::new()));

    let started = Instant::now();
    session
        .submit(ContactMessage::new("A", "a@b.co", "x", "y"))
        .await
        .expect("accepted");
    let short_fields = started.elapsed();

    session.reset();
    let started = Instant::now();
    session
        .submit(ContactMessage::new(
            "A much longer name than before",
            "someone.with.a.long.address@example-domain.org",
            "A subject line with many words in it",
            "body ".repeat(200),
        ))
        .await
        .expect("accepted");

    assert_eq!(short_fields, started.elapsed());
}

#[tokio::test(start_paused = true)]
async fn rejections_pay_the_same_latency_as_acceptances() {
    let mut session = FormSession::new(Arc::new(SimulatedGateway::rejecting("inbox full")));

    let started = Instant::now();
    let err = session.submit(valid_message()).await.expect_err("rejected");

    assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
    assert!(matches!(err, SubmissionError::Delivery { .. }));
    match session.state() {
        FormState::Failed { error } => assert!(error.contains("inbox full")),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn sessions_share_a_gateway_but_not_their_state() {
    let gateway = Arc::new(SimulatedGateway::new());
    let mut first = FormSession::new(gateway.clone());
    let mut second = FormSession::new(gateway.clone());

    first.submit(valid_message()).await.expect("accepted");
    let mut other = valid_message();
    other.subject = "Second visitor".to_string();
    second.submit(other).await.expect("accepted");

    assert_eq!(first.attempts(), 1);
    assert_eq!(second.attempts(), 1);

    let received = gateway.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[1].subject, "Second visitor");
}

#[tokio::test(start_paused = true)]
async fn configured_latency_flows_through_the_session() {
    let mut session = FormSession::new(Arc::new(SimulatedGateway::with_latency(
        Duration::from_millis(250),
    )));

    let started = Instant::now();
    session.submit(valid_message()).await.expect("accepted");
    assert_eq!(started.elapsed(), Duration::from_millis(250));
}

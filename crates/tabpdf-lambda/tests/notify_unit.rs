mod common;

use common::*;
use serde_json::json;
use tabpdf_lambda::config::Config;
use tabpdf_lambda::units::NotifyUnit;

fn unit(calls: &Recorder, reject: &[&str]) -> NotifyUnit<FakeMailer> {
    NotifyUnit::new(
        &Config::default(),
        FakeMailer {
            calls: calls.clone(),
            reject: reject.iter().map(|r| r.to_string()).collect(),
        },
    )
}

#[tokio::test]
async fn one_email_per_recipient() {
    let calls = Recorder::default();

    let response = unit(&calls, &[])
        .handle(json!({
            "emails": ["a@x.com", "b@x.com"],
            "email_sender": "reports@example.com",
            "url": "https://b.s3.amazonaws.com/k"
        }))
        .await;

    assert_eq!(response.status_code, 200);
    let calls = calls.calls();
    assert_eq!(calls.sent.len(), 2);
    assert_eq!(calls.sent[0].to, "a@x.com");
    assert_eq!(calls.sent[1].to, "b@x.com");
    assert!(calls.sent.iter().all(|e| e.from == "reports@example.com"));
    assert!(calls.sent[0].body.contains("https://b.s3.amazonaws.com/k"));
}

#[tokio::test]
async fn subject_and_message_defaults() {
    let calls = Recorder::default();

    unit(&calls, &[])
        .handle(json!({"emails": ["a@x.com"], "email_sender": "r@example.com"}))
        .await;

    let sent = &calls.calls().sent[0];
    assert_eq!(sent.subject, "Dragonite has a message for you!");
    assert!(sent.body.starts_with("\nHere's a link to your PDF report"));
    assert!(sent.body.contains("valid for only 48 hours"));
}

#[tokio::test]
async fn custom_subject_and_message() {
    let calls = Recorder::default();

    unit(&calls, &[])
        .handle(json!({
            "emails": ["a@x.com"],
            "email_sender": "r@example.com",
            "url": "u",
            "subject": "Q3 board pack",
            "message": "Numbers attached."
        }))
        .await;

    let sent = &calls.calls().sent[0];
    assert_eq!(sent.subject, "Q3 board pack");
    assert!(sent.body.starts_with("Numbers attached.\n"));
}

#[tokio::test]
async fn failed_recipient_is_reported_after_trying_everyone() {
    let calls = Recorder::default();

    let response = unit(&calls, &["a@x.com"])
        .handle(json!({
            "emails": ["a@x.com", "b@x.com"],
            "email_sender": "r@example.com",
            "url": "u"
        }))
        .await;

    assert_eq!(response.status_code, 500);
    let message = response.message.unwrap();
    assert!(message.contains("1 of 2"));
    assert!(message.contains("a@x.com"));
    assert_eq!(calls.calls().sent.len(), 2);
}

#[tokio::test]
async fn missing_recipients_is_invalid() {
    let calls = Recorder::default();

    let response = unit(&calls, &[])
        .handle(json!({"email_sender": "r@example.com"}))
        .await;

    assert_eq!(response.status_code, 500);
    assert!(calls.calls().sent.is_empty());
}

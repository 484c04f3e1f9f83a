//! Forwarding of registration submissions to the spreadsheet webhook.
//!
//! One best-effort POST per submission. Failures are reported to the caller
//! and never retried; the spreadsheet is reconciled manually if a row is lost.

use chrono::Utc;
use poise::serenity_prelude::UserId;
use serde::Serialize;

use crate::config;
use crate::error::{BotError, Result};

pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// Timestamp format shared by the webhook body and the audit embed
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One registration submission, as the spreadsheet expects it.
///
/// Built once per submission and sent to the webhook and the log channel;
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub discord_user: String,
    pub discord_id: u64,
    pub role: String,
    pub timestamp: String,
}

impl RegistrationRecord {
    pub fn new(
        name: String,
        email: Option<String>,
        discord_user: String,
        discord_id: UserId,
    ) -> Self {
        Self {
            name,
            email: normalize_email(email),
            discord_user,
            discord_id: discord_id.get(),
            role: config::FIRST_YEAR_ROLE_LABEL.to_string(),
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Empty or missing email becomes a sentinel so the spreadsheet column is
/// never blank.
fn normalize_email(email: Option<String>) -> String {
    match email {
        Some(value) if !value.trim().is_empty() => value,
        _ => EMAIL_NOT_PROVIDED.to_string(),
    }
}

/// Client for the registration webhook endpoint
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Send one record to the webhook. Non-2xx statuses and transport
    /// errors both come back as Err; the caller decides what to tell the
    /// user. No retry.
    pub async fn notify(&self, record: &RegistrationRecord) -> Result<()> {
        let response = self.client.post(&self.url).json(record).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::WebhookStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Json;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use std::net::SocketAddr;

    fn sample_record(email: Option<&str>) -> RegistrationRecord {
        RegistrationRecord::new(
            "Jane Doe".to_string(),
            email.map(str::to_string),
            "janedoe".to_string(),
            UserId::new(123456789),
        )
    }

    async fn spawn_stub(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[test]
    fn test_email_normalization() {
        assert_eq!(sample_record(None).email, EMAIL_NOT_PROVIDED);
        assert_eq!(sample_record(Some("")).email, EMAIL_NOT_PROVIDED);
        assert_eq!(sample_record(Some("   ")).email, EMAIL_NOT_PROVIDED);
        assert_eq!(sample_record(Some("jane@example.com")).email, "jane@example.com");
    }

    #[test]
    fn test_record_json_field_names() {
        let value = serde_json::to_value(sample_record(Some("jane@example.com"))).unwrap();

        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["discord_user"], "janedoe");
        assert_eq!(value["discord_id"], 123456789);
        assert_eq!(value["role"], "MS1 Year 1 Student");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_timestamp_format() {
        let record = sample_record(None);
        // "YYYY-MM-DD HH:MM:SS" must parse back under the same format string
        chrono::NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).unwrap();
    }

    #[tokio::test]
    async fn test_notify_succeeds_on_2xx() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<serde_json::Value>(1);
        let router = Router::new().route(
            "/",
            post(move |Json(body): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    tx.send(body).await.unwrap();
                    "ok"
                }
            }),
        );
        let addr = spawn_stub(router).await;

        let notifier = WebhookNotifier::new(format!("http://{}/", addr));
        notifier.notify(&sample_record(None)).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received["name"], "Jane Doe");
        assert_eq!(received["email"], EMAIL_NOT_PROVIDED);
    }

    #[tokio::test]
    async fn test_notify_fails_on_error_status() {
        let router = Router::new().route(
            "/",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "sheet unavailable") }),
        );
        let addr = spawn_stub(router).await;

        let notifier = WebhookNotifier::new(format!("http://{}/", addr));
        let err = notifier.notify(&sample_record(None)).await.unwrap_err();

        match err {
            BotError::WebhookStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "sheet unavailable");
            }
            other => panic!("expected WebhookStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_notify_fails_on_transport_error() {
        // Bind and immediately drop to get a port with no listener
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let notifier = WebhookNotifier::new(format!("http://{}/", addr));
        let err = notifier.notify(&sample_record(None)).await.unwrap_err();
        assert!(matches!(err, BotError::WebhookTransport { .. }));
    }
}

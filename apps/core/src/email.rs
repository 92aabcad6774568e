//! Mock email digest delivery.
//!
//! Keeps subscribers in memory, renders the HTML digest, and fakes the
//! transport with an artificial delay. Nothing ever leaves the process; a
//! real provider integration would replace `send_digest`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Duration};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Simulated transport latency per delivery.
const SEND_LATENCY: Duration = Duration::from_millis(1000);

/// How often a subscriber receives the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    Daily,
    Weekly,
    Custom,
}

/// Per-subscriber delivery preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestPreferences {
    pub categories: Vec<String>,
    pub frequency: DigestFrequency,
    /// Preferred delivery time, HH:MM.
    pub time: String,
}

/// A digest recipient.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Subscriber {
    pub id: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub preferences: DigestPreferences,
}

/// A rendered digest ready for (simulated) delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDigest {
    pub to: String,
    pub subject: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Outcome tally of a send-to-all run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failed: usize,
}

/// The simulated digest mailer.
pub struct DigestMailer {
    subscribers: Vec<Subscriber>,
}

impl Default for DigestMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestMailer {
    /// Create a mailer seeded with the demo subscriber list.
    pub fn new() -> Self {
        Self {
            subscribers: vec![
                Subscriber {
                    id: Uuid::new_v4().to_string(),
                    email: "founder@startup.com".to_string(),
                    name: "John Doe".to_string(),
                    preferences: DigestPreferences {
                        categories: vec!["technology".to_string(), "business".to_string()],
                        frequency: DigestFrequency::Daily,
                        time: "07:00".to_string(),
                    },
                },
                Subscriber {
                    id: Uuid::new_v4().to_string(),
                    email: "pm@company.com".to_string(),
                    name: "Jane Smith".to_string(),
                    preferences: DigestPreferences {
                        categories: vec![
                            "technology".to_string(),
                            "business".to_string(),
                            "environment".to_string(),
                        ],
                        frequency: DigestFrequency::Daily,
                        time: "08:00".to_string(),
                    },
                },
            ],
        }
    }

    /// Current subscriber list.
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Validate and register a new subscriber.
    pub fn add_subscriber(
        &mut self,
        email: String,
        name: String,
        preferences: DigestPreferences,
    ) -> Result<Subscriber, AppError> {
        let subscriber = Subscriber {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            preferences,
        };
        subscriber.validate()?;

        self.subscribers.push(subscriber.clone());
        info!(email = %subscriber.email, "subscriber added");
        Ok(subscriber)
    }

    /// Render and "send" one digest. The sleep stands in for the provider
    /// round-trip.
    pub async fn send_digest(
        &self,
        subscriber: &Subscriber,
        content: &str,
    ) -> Result<EmailDigest, AppError> {
        subscriber.validate()?;

        let digest = EmailDigest {
            to: subscriber.email.clone(),
            subject: format!(
                "Your Daily Market Trends Digest - {}",
                Utc::now().format("%Y-%m-%d")
            ),
            content: format_digest_html(content, &subscriber.name),
            timestamp: Utc::now(),
        };

        sleep(SEND_LATENCY).await;
        info!(to = %digest.to, subject = %digest.subject, "digest email sent");

        Ok(digest)
    }

    /// Deliver to every subscriber, tallying the outcome.
    pub async fn send_to_all(&self, content: &str) -> DeliveryReport {
        let mut sent = 0;
        let mut failed = 0;

        for subscriber in &self.subscribers {
            match self.send_digest(subscriber, content).await {
                Ok(_) => sent += 1,
                Err(err) => {
                    warn!(to = %subscriber.email, %err, "digest delivery failed");
                    failed += 1;
                }
            }
        }

        DeliveryReport { sent, failed }
    }

    /// Send to everyone and return the user-facing status line.
    pub async fn schedule_digest(&self, content: &str) -> String {
        let report = self.send_to_all(content).await;

        if report.failed > 0 {
            format!(
                "📧 Digest scheduled and sent to {} users. {} failed.",
                report.sent, report.failed
            )
        } else {
            format!("📧 Digest scheduled and sent to {} users.", report.sent)
        }
    }
}

/// Wrap digest content in the branded HTML shell.
fn format_digest_html(content: &str, user_name: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; text-align: center; }}
        .content {{ padding: 20px; }}
        .footer {{ background: #f8f9fa; padding: 15px; text-align: center; font-size: 12px; color: #666; }}
        .trend-item {{ background: #f8f9fa; padding: 15px; margin: 10px 0; border-radius: 8px; }}
        .cta-button {{ background: #667eea; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px; display: inline-block; margin: 15px 0; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>🚀 TrendDigest</h1>
        <p>Your Daily Market Intelligence</p>
    </div>

    <div class="content">
        <h2>Hi {user_name}!</h2>
        <p>Here's your personalized market trends digest for {date}:</p>

        <div class="trend-item">
            {body}
        </div>

        <a href="https://trenddigest.app/dashboard" class="cta-button">View Full Dashboard</a>

        <p>Want to customize your digest? <a href="https://trenddigest.app/settings">Update your preferences</a></p>
    </div>

    <div class="footer">
        <p>You're receiving this because you subscribed to TrendDigest. <a href="#">Unsubscribe</a></p>
        <p>© 2024 TrendDigest. All rights reserved.</p>
    </div>
</body>
</html>"##,
        user_name = user_name,
        date = Utc::now().format("%Y-%m-%d"),
        body = content.replace('\n', "<br>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_preferences() -> DigestPreferences {
        DigestPreferences {
            categories: vec!["technology".to_string()],
            frequency: DigestFrequency::Weekly,
            time: "09:00".to_string(),
        }
    }

    #[test]
    fn test_seeded_subscribers() {
        let mailer = DigestMailer::new();

        assert_eq!(mailer.subscribers().len(), 2);
        assert_eq!(mailer.subscribers()[0].email, "founder@startup.com");
    }

    #[test]
    fn test_add_subscriber_validates_email() {
        let mut mailer = DigestMailer::new();

        let err = mailer.add_subscriber(
            "not-an-email".to_string(),
            "Sam".to_string(),
            demo_preferences(),
        );
        assert!(err.is_err());
        assert_eq!(mailer.subscribers().len(), 2);
    }

    #[test]
    fn test_add_subscriber_assigns_unique_ids() {
        let mut mailer = DigestMailer::new();

        let a = mailer
            .add_subscriber("a@example.com".to_string(), "A".to_string(), demo_preferences())
            .expect("valid subscriber");
        let b = mailer
            .add_subscriber("b@example.com".to_string(), "B".to_string(), demo_preferences())
            .expect("valid subscriber");
        assert_ne!(a.id, b.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_digest_renders_html() {
        let mailer = DigestMailer::new();

        let digest = mailer
            .send_digest(&mailer.subscribers()[0], "line one\nline two")
            .await
            .expect("delivery");
        assert_eq!(digest.to, "founder@startup.com");
        assert!(digest.subject.starts_with("Your Daily Market Trends Digest"));
        assert!(digest.content.contains("Hi John Doe!"));
        assert!(digest.content.contains("line one<br>line two"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_to_all_tallies() {
        let mailer = DigestMailer::new();

        let report = mailer.send_to_all("digest body").await;
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_digest_status_line() {
        let mailer = DigestMailer::new();

        let status = mailer.schedule_digest("digest body").await;
        assert_eq!(status, "📧 Digest scheduled and sent to 2 users.");
    }
}

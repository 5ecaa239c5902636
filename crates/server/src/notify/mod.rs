//! Notification fan-out channel.
//!
//! A single broadcast channel delivers registrant mutations to every
//! currently connected admin view. Delivery is best-effort: no
//! acknowledgment, no replay for late joiners, and a publish with no
//! listeners is not an error. Ordering follows emission order; a receiver
//! that falls behind the channel capacity drops the oldest events.

use serde::Serialize;
use tokio::sync::broadcast;

use matchday_core::Email;

use crate::models::{Registrant, RegistrantPatch};

/// Buffered events per subscriber before the oldest are dropped.
const CHANNEL_CAPACITY: usize = 64;

/// A server-originated push event, tagged for the wire as
/// `{"event": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum Event {
    /// A signup was accepted; carries the full record.
    NewUser(Registrant),
    /// A registrant was updated; carries the email plus changed fields only.
    UpdateUser(RegistrantPatch),
    /// A registrant was deleted; carries just the email.
    DeleteUser(Email),
}

/// Publish/subscribe handle for the admin push channel.
///
/// Cheap to share: publishing and subscribing both go through the same
/// internally synchronized broadcast sender.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Event>,
}

impl Notifier {
    /// Create a new notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to future events. The receiver sees nothing published
    /// before this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Broadcast an event to every currently connected subscriber.
    ///
    /// Returns the number of subscribers the event was delivered to;
    /// zero when nobody is listening.
    pub fn publish(&self, event: Event) -> usize {
        let delivered = self.tx.send(event).unwrap_or(0);
        tracing::debug!(subscribers = delivered, "Broadcast event");
        delivered
    }

    /// Number of currently connected subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use matchday_core::RegistrantId;

    fn sample_registrant() -> Registrant {
        Registrant {
            id: RegistrantId::new(1),
            fullname: "Ada Lovelace".to_string(),
            email: Email::parse("ada@example.com").unwrap(),
            phone: "555-0100".to_string(),
            created_at: "2026-08-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_not_an_error() {
        let notifier = Notifier::new();
        assert_eq!(notifier.publish(Event::DeleteUser(Email::parse("a@b.c").unwrap())), 0);
    }

    #[tokio::test]
    async fn test_fan_out_to_all_subscribers() {
        let notifier = Notifier::new();
        let mut rx1 = notifier.subscribe();
        let mut rx2 = notifier.subscribe();
        assert_eq!(notifier.subscriber_count(), 2);

        let delivered = notifier.publish(Event::NewUser(sample_registrant()));
        assert_eq!(delivered, 2);

        assert!(matches!(rx1.recv().await.unwrap(), Event::NewUser(_)));
        assert!(matches!(rx2.recv().await.unwrap(), Event::NewUser(_)));
    }

    #[tokio::test]
    async fn test_late_joiner_sees_nothing_until_next_mutation() {
        let notifier = Notifier::new();
        notifier.publish(Event::DeleteUser(Email::parse("a@b.c").unwrap()));

        let mut rx = notifier.subscribe();
        notifier.publish(Event::DeleteUser(Email::parse("b@c.d").unwrap()));

        let Event::DeleteUser(email) = rx.recv().await.unwrap() else {
            panic!("expected deleteUser");
        };
        assert_eq!(email.as_str(), "b@c.d");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_event_wire_format() {
        let event = Event::NewUser(sample_registrant());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "newUser");
        assert_eq!(json["data"]["email"], "ada@example.com");

        let event = Event::UpdateUser(RegistrantPatch {
            email: Email::parse("ada@example.com").unwrap(),
            fullname: None,
            phone: Some("555-0199".to_string()),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "updateUser");
        assert_eq!(json["data"]["phone"], "555-0199");
        assert!(json["data"].get("fullname").is_none());

        let event = Event::DeleteUser(Email::parse("ada@example.com").unwrap());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "deleteUser");
        assert_eq!(json["data"], "ada@example.com");
    }
}

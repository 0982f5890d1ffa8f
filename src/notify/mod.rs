//! In-process pub/sub used to tell editing sessions about completed
//! autosaves.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic: String,
    pub event: String,
    pub payload: Value,
}

/// Topic-keyed fan-out. Subscribers that have gone away are pruned on the
/// next publish to their topic.
#[derive(Default)]
pub struct Notifier {
    topics: Mutex<HashMap<String, Vec<Sender<Notification>>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: &str) -> Receiver<Notification> {
        let (sender, receiver) = channel();
        self.lock().entry(topic.to_string()).or_default().push(sender);
        receiver
    }

    /// Delivers to every live subscriber of `topic`; returns how many
    /// received it.
    pub fn publish(&self, topic: &str, event: &str, payload: Value) -> usize {
        let mut topics = self.lock();
        let Some(subscribers) = topics.get_mut(topic) else {
            return 0;
        };
        let notification = Notification {
            topic: topic.to_string(),
            event: event.to_string(),
            payload,
        };
        subscribers.retain(|subscriber| subscriber.send(notification.clone()).is_ok());
        if subscribers.is_empty() {
            topics.remove(topic);
            return 0;
        }
        subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Sender<Notification>>>> {
        self.topics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn delivers_to_topic_subscribers_only() {
        let notifier = Notifier::new();
        let posts = notifier.subscribe("post.1");
        let other = notifier.subscribe("post.2");

        let delivered = notifier.publish("post.1", "autosave.saved", json!({ "ok": true }));
        assert_eq!(delivered, 1);

        let received = posts.try_recv().expect("subscribed topic");
        assert_eq!(received.event, "autosave.saved");
        assert!(other.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let notifier = Notifier::new();
        drop(notifier.subscribe("post.1"));
        assert_eq!(notifier.publish("post.1", "autosave.saved", json!({})), 0);
        // Topic entry is gone entirely after the prune.
        assert_eq!(notifier.publish("post.1", "autosave.saved", json!({})), 0);
    }
}

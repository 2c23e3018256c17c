//! Observable chat store
//!
//! `ChatStore` owns the message list and the draft input for one chat
//! screen. All updates go through the explicit API below; the list is
//! replaced wholesale on every mutation and subscribers are notified with a
//! snapshot, never a live reference into the lock.

use crate::message::ChatMessage;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Handle returned by [`ChatStore::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&[ChatMessage]) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    messages: Vec<ChatMessage>,
    input: String,
}

/// Owned, observable state for one chat screen
#[derive(Default)]
pub struct ChatStore {
    inner: Mutex<StoreInner>,
    subscribers: Mutex<FxHashMap<SubscriptionId, Subscriber>>,
    next_subscription: AtomicU64,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Messages ==========

    /// Snapshot of the current message list
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.lock().unwrap().messages.clone()
    }

    /// Replace the whole message list
    pub fn set_messages(&self, messages: Vec<ChatMessage>) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.messages = messages;
        }
        self.notify();
    }

    /// Append one message
    pub fn append_message(&self, message: ChatMessage) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.messages.push(message);
        }
        self.notify();
    }

    /// Remove all messages
    pub fn clear(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.messages.clear();
        }
        self.notify();
    }

    // ========== Draft input ==========

    /// Current draft input text
    pub fn input(&self) -> String {
        self.inner.lock().unwrap().input.clone()
    }

    /// Replace the draft input text
    pub fn set_input(&self, input: impl Into<String>) {
        self.inner.lock().unwrap().input = input.into();
    }

    /// Take the draft input, leaving it empty
    pub fn take_input(&self) -> String {
        std::mem::take(&mut self.inner.lock().unwrap().input)
    }

    // ========== Subscriptions ==========

    /// Register a callback invoked with a snapshot after every message-list
    /// mutation
    pub fn subscribe(
        &self,
        callback: impl Fn(&[ChatMessage]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap()
            .insert(id, Box::new(callback));
        id
    }

    /// Remove a subscription; unknown ids are ignored
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().unwrap().remove(&id);
    }

    fn notify(&self) {
        // Snapshot outside the subscriber lock so callbacks can re-read the
        // store without deadlocking.
        let snapshot = self.messages();
        let subscribers = self.subscribers.lock().unwrap();
        tracing::trace!(
            messages = snapshot.len(),
            subscribers = subscribers.len(),
            "ChatStore::notify"
        );
        for callback in subscribers.values() {
            callback(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn mutations_notify_with_a_snapshot() {
        let store = ChatStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_callback = Arc::clone(&seen);
        store.subscribe(move |messages| {
            seen_in_callback.store(messages.len(), Ordering::SeqCst);
        });

        store.append_message(ChatMessage::text(Role::User, "hi"));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        store.set_messages(vec![
            ChatMessage::text(Role::User, "hi"),
            ChatMessage::text(Role::Assistant, "hello"),
        ]);
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        store.clear();
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert!(store.messages().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = ChatStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_callback = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            calls_in_callback.fetch_add(1, Ordering::SeqCst);
        });

        store.append_message(ChatMessage::text(Role::User, "one"));
        store.unsubscribe(id);
        store.append_message(ChatMessage::text(Role::User, "two"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn input_edits_do_not_notify() {
        let store = ChatStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_callback = Arc::clone(&calls);
        store.subscribe(move |_| {
            calls_in_callback.fetch_add(1, Ordering::SeqCst);
        });

        store.set_input("draft");
        assert_eq!(store.input(), "draft");
        assert_eq!(store.take_input(), "draft");
        assert_eq!(store.input(), "");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

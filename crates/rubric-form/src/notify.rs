//! Edit Notifications
//!
//! Items announce creation, edits and removal without knowing who listens.
//! Dispatch is synchronous and in firing order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One-shot message fired by an item. Serialises as
/// `{"event": "optionAdd", "criterionName": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Notification {
    OptionAdd {
        criterion_name: String,
        criterion_label: String,
        name: String,
        label: String,
        points: Option<i64>,
    },
    OptionRemove {
        criterion_name: String,
        name: String,
    },
    OptionUpdated {
        criterion_name: String,
        name: String,
        label: String,
        points: Option<i64>,
    },
    CriterionRemove {
        criterion_name: String,
    },
    CriterionUpdated {
        criterion_name: String,
        criterion_label: String,
    },
}

impl Notification {
    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::OptionAdd { .. } => "optionAdd",
            Notification::OptionRemove { .. } => "optionRemove",
            Notification::OptionUpdated { .. } => "optionUpdated",
            Notification::CriterionRemove { .. } => "criterionRemove",
            Notification::CriterionUpdated { .. } => "criterionUpdated",
        }
    }
}

/// Fire-and-forget sink for notifications
pub trait Notifier {
    fn notification_fired(&self, notification: &Notification);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notification_fired(&self, _notification: &Notification) {}
}

/// Keeps every notification in firing order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    fired: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fired(&self) -> Vec<Notification> {
        self.fired.borrow().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.fired.borrow().iter().map(Notification::event_name).collect()
    }

    /// Drain what has been recorded so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.fired.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notification_fired(&self, notification: &Notification) {
        self.fired.borrow_mut().push(notification.clone());
    }
}

/// Handle returned by `NotificationBus::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&Notification)>;

/// Synchronous publish/subscribe channel.
///
/// A notification fired while subscribers are running is queued and
/// delivered once the current one has reached every subscriber.
#[derive(Default)]
pub struct NotificationBus {
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<Notification>>,
    dispatching: Cell<bool>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Notification) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl Notifier for NotificationBus {
    fn notification_fired(&self, notification: &Notification) {
        self.queue.borrow_mut().push_back(notification.clone());
        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(current) = next else { break };
            log::debug!("[notify] {}", current.event_name());
            // Snapshot so subscribers may (un)subscribe while running
            let subscribers: Vec<Subscriber> = self
                .subscribers
                .borrow()
                .iter()
                .map(|(_, subscriber)| subscriber.clone())
                .collect();
            for subscriber in subscribers {
                subscriber(&current);
            }
        }
        self.dispatching.set(false);
    }
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.subscriber_count())
            .field("queued", &self.queue.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion_removed(name: &str) -> Notification {
        Notification::CriterionRemove {
            criterion_name: name.to_string(),
        }
    }

    #[test]
    fn test_wire_shape() {
        let notification = Notification::OptionAdd {
            criterion_name: "0".to_string(),
            criterion_label: "Ideas".to_string(),
            name: "1".to_string(),
            label: "Good".to_string(),
            points: Some(3),
        };
        let json = serde_json::to_value(&notification).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "event": "optionAdd",
                "criterionName": "0",
                "criterionLabel": "Ideas",
                "name": "1",
                "label": "Good",
                "points": 3
            })
        );
        assert_eq!(notification.event_name(), "optionAdd");
    }

    #[test]
    fn test_bus_delivers_in_order() {
        let bus = NotificationBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(move |n| {
            if let Notification::CriterionRemove { criterion_name } = n {
                sink.borrow_mut().push(criterion_name.clone());
            }
        });

        bus.notification_fired(&criterion_removed("0"));
        bus.notification_fired(&criterion_removed("1"));
        assert_eq!(*seen.borrow(), vec!["0".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_nested_fire_is_queued() {
        let bus = Rc::new(NotificationBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = Rc::downgrade(&bus);
        let first = seen.clone();
        bus.subscribe(move |n| {
            first.borrow_mut().push(format!("a:{}", n.event_name()));
            if let (Notification::CriterionRemove { .. }, Some(bus)) = (n, inner_bus.upgrade()) {
                bus.notification_fired(&Notification::CriterionUpdated {
                    criterion_name: "0".to_string(),
                    criterion_label: String::new(),
                });
            }
        });
        let second = seen.clone();
        bus.subscribe(move |n| second.borrow_mut().push(format!("b:{}", n.event_name())));

        bus.notification_fired(&criterion_removed("0"));
        assert_eq!(
            *seen.borrow(),
            vec![
                "a:criterionRemove",
                "b:criterionRemove",
                "a:criterionUpdated",
                "b:criterionUpdated"
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let bus = NotificationBus::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let id = bus.subscribe(move |_| counter.set(counter.get() + 1));

        bus.notification_fired(&criterion_removed("0"));
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.notification_fired(&criterion_removed("0"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_recording_notifier() {
        let recorder = RecordingNotifier::new();
        recorder.notification_fired(&criterion_removed("2"));
        assert_eq!(recorder.event_names(), vec!["criterionRemove"]);
        assert_eq!(recorder.take().len(), 1);
        assert!(recorder.fired().is_empty());
    }
}

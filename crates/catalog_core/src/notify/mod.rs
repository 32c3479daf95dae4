//! Change-event contract and in-process delivery.
//!
//! # Responsibility
//! - Define the two catalog change events and their wire names.
//! - Provide the sink seam the repository emits through, plus a fan-out
//!   hub for in-process subscribers.
//!
//! # Invariants
//! - Delivery is fire-and-forget: `emit` never fails and never blocks on
//!   slow or departed subscribers.
//! - Wire names stay `productAdded` / `productDeleted`; subscribers key
//!   on them.

use crate::model::product::Product;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// One catalog change, carrying the full affected record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    /// A record entered the collection; payload includes the assigned id.
    Added(Product),
    /// A record left the collection; payload is the pre-removal record.
    Deleted(Product),
}

impl ProductEvent {
    /// Wire-level event name as subscribers observe it.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Added(_) => "productAdded",
            Self::Deleted(_) => "productDeleted",
        }
    }

    /// The record the event carries.
    pub fn product(&self) -> &Product {
        match self {
            Self::Added(product) | Self::Deleted(product) => product,
        }
    }
}

/// Sink the repository notifies on add/remove.
///
/// Implementations must not block the caller; there is no delivery
/// guarantee or acknowledgment in this contract.
pub trait NotificationSink {
    fn emit(&self, event: &ProductEvent);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn emit(&self, event: &ProductEvent) {
        (**self).emit(event)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn emit(&self, event: &ProductEvent) {
        (**self).emit(event)
    }
}

/// Sink for callers that do not observe changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn emit(&self, _event: &ProductEvent) {}
}

/// In-process fan-out hub.
///
/// Subscribers receive events over an unbounded channel; a subscriber
/// that drops its receiver is pruned on the next emit.
#[derive(Default)]
pub struct SubscriberHub {
    subscribers: Mutex<Vec<Sender<ProductEvent>>>,
}

impl SubscriberHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its event receiver.
    pub fn subscribe(&self) -> Receiver<ProductEvent> {
        let (sender, receiver) = channel();
        self.subscribers
            .lock()
            .expect("subscriber hub lock")
            .push(sender);
        receiver
    }

    /// Number of live subscribers at the last emit or subscribe.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().expect("subscriber hub lock").len()
    }
}

impl NotificationSink for SubscriberHub {
    fn emit(&self, event: &ProductEvent) {
        let mut subscribers = self.subscribers.lock().expect("subscriber hub lock");
        subscribers.retain(|sender| sender.send(event.clone()).is_ok());
    }
}

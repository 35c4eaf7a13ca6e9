//! Outbound channel mirroring layer changes to other participants.
//!
//! Emission is fire-and-forget: the layer's own state is authoritative the
//! moment a mutation returns, whether or not anything is listening.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};
use serde::Serialize;

use crate::shape::ServerShape;

/// A change other participants should replay.
///
/// Serializes as `{ "event": "Shape.Add", "payload": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum RelayEvent {
    #[serde(rename = "Shape.Add")]
    ShapeAdded { shape: ServerShape, temporary: bool },
    #[serde(rename = "Shape.Remove")]
    ShapeRemoved { shape: ServerShape, temporary: bool },
    #[serde(rename = "Shape.Order.Set")]
    ShapeOrderChanged { shape: ServerShape, index: usize },
}

impl RelayEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            RelayEvent::ShapeAdded { .. } => "Shape.Add",
            RelayEvent::ShapeRemoved { .. } => "Shape.Remove",
            RelayEvent::ShapeOrderChanged { .. } => "Shape.Order.Set",
        }
    }

    pub fn shape(&self) -> &ServerShape {
        match self {
            RelayEvent::ShapeAdded { shape, .. }
            | RelayEvent::ShapeRemoved { shape, .. }
            | RelayEvent::ShapeOrderChanged { shape, .. } => shape,
        }
    }
}

/// Sending half handed to layers.
#[derive(Debug, Clone)]
pub struct Relay {
    tx: UnboundedSender<RelayEvent>,
}

/// Receiving half, drained by the network transport.
#[derive(Debug)]
pub struct RelayReceiver {
    rx: UnboundedReceiver<RelayEvent>,
}

/// Creates a connected relay pair.
pub fn channel() -> (Relay, RelayReceiver) {
    let (tx, rx) = mpsc::unbounded();
    (Relay { tx }, RelayReceiver { rx })
}

impl Relay {
    /// A relay whose receiver is already gone; every emission is dropped.
    ///
    /// For scenes that never synchronize (offline editing, tooling).
    pub fn disconnected() -> Self {
        channel().0
    }

    pub fn emit(&self, event: RelayEvent) {
        if let Err(err) = self.tx.unbounded_send(event) {
            log::debug!("relay closed, dropping {}", err.into_inner().name());
        }
    }
}

impl RelayReceiver {
    /// Everything queued so far, oldest first. Never waits.
    pub fn drain(&mut self) -> Vec<RelayEvent> {
        std::iter::from_fn(|| self.rx.next().now_or_never().flatten()).collect()
    }

    /// The underlying stream, for async transports.
    pub fn into_stream(self) -> UnboundedReceiver<RelayEvent> {
        self.rx
    }
}

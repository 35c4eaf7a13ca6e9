//! Services a layer reads and mutates besides its own state.

use crate::floor::FloorPlan;
use crate::registry::SceneRegistry;
use crate::relay::{self, Relay, RelayReceiver};
use crate::signal::SelectionSignal;
use crate::visibility::{Visibility, VisibilityStore};

/// Borrowed view of the scene services, threaded into layer operations.
///
/// Constructed per call site (usually via [`SceneServices::ctx`]) so that
/// several independent scenes can coexist and tests can swap in fakes.
pub struct SceneCtx<'a> {
    pub registry: &'a mut SceneRegistry,
    pub visibility: &'a mut dyn Visibility,
    pub relay: &'a Relay,
    pub floors: &'a FloorPlan,
    pub selection_signal: &'a mut SelectionSignal,
}

/// Owned bundle of scene services backed by the in-process implementations.
#[derive(Debug)]
pub struct SceneServices {
    pub registry: SceneRegistry,
    pub visibility: VisibilityStore,
    pub relay: Relay,
    pub floors: FloorPlan,
    pub selection_signal: SelectionSignal,
}

impl SceneServices {
    /// Services for `local_user`, plus the receiving end of the relay.
    pub fn new(local_user: impl Into<String>, floors: FloorPlan) -> (Self, RelayReceiver) {
        let (relay, rx) = relay::channel();
        let services = Self {
            registry: SceneRegistry::new(local_user),
            visibility: VisibilityStore::new(),
            relay,
            floors,
            selection_signal: SelectionSignal::new(),
        };
        (services, rx)
    }

    pub fn ctx(&mut self) -> SceneCtx<'_> {
        SceneCtx {
            registry: &mut self.registry,
            visibility: &mut self.visibility,
            relay: &self.relay,
            floors: &self.floors,
            selection_signal: &mut self.selection_signal,
        }
    }
}

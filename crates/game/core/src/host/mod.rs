//! Mutable host capabilities handed to each attack attempt.
mod hooks;
mod sink;

pub use hooks::ProgressionHooks;
pub use sink::{
    CombatMessage, CombatSink, CombatText, EntityUpdate, Fx, SoundId, TextStyle, VisualEffect,
};

use crate::state::EntityStore;

/// Entity store, notification sink and progression hooks for one attempt.
///
/// The three are borrowed separately so a host can keep them in disjoint
/// fields of its world struct.
pub struct CombatHost<'a> {
    pub store: &'a mut dyn EntityStore,
    pub sink: &'a mut dyn CombatSink,
    pub hooks: &'a mut dyn ProgressionHooks,
}

impl<'a> CombatHost<'a> {
    pub fn new(
        store: &'a mut dyn EntityStore,
        sink: &'a mut dyn CombatSink,
        hooks: &'a mut dyn ProgressionHooks,
    ) -> Self {
        Self { store, sink, hooks }
    }

    /// Sends a console message to `recipient`.
    pub(crate) fn tell(&mut self, recipient: crate::state::EntityId, message: CombatMessage) {
        self.sink.combat_message(recipient, message);
    }
}

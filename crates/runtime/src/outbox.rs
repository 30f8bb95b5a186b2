//! Buffered combat notifications.
//!
//! [`Outbox`] is the runtime's [`CombatSink`]: it records every notification
//! in emission order so the network layer can drain and deliver them after
//! each tick. Notifications serialize to JSON for that hand-off.

use combat_core::{
    CombatMessage, CombatSink, EntityId, EntityUpdate, SoundId, Timestamp, VisualEffect,
};
use serde::{Deserialize, Serialize};

/// A notification addressed to one entity or broadcast around one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// Console line for `recipient`; `text` is the rendered message.
    Console {
        recipient: EntityId,
        message: CombatMessage,
        text: String,
    },
    /// Private component update.
    Update {
        recipient: EntityId,
        update: EntityUpdate,
    },
    /// Component update for everyone observing `subject`.
    Broadcast {
        subject: EntityId,
        update: EntityUpdate,
    },
    Effect {
        effect: VisualEffect,
    },
    Sound {
        origin: EntityId,
        sound: SoundId,
    },
}

impl Notification {
    /// Entity the notification is addressed to or centred on.
    pub fn anchor(&self) -> EntityId {
        match self {
            Self::Console { recipient, .. } | Self::Update { recipient, .. } => *recipient,
            Self::Broadcast { subject, .. } => *subject,
            Self::Effect { effect } => effect.attached_to,
            Self::Sound { origin, .. } => *origin,
        }
    }
}

/// Notification stamped with the tick it was produced in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub at: Timestamp,
    #[serde(flatten)]
    pub notification: Notification,
}

#[derive(Clone, Debug, Default)]
pub struct Outbox {
    now: Timestamp,
    pending: Vec<Envelope>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps subsequent notifications with `now`.
    pub fn set_clock(&mut self, now: Timestamp) {
        self.now = now;
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[Envelope] {
        &self.pending
    }

    /// Takes every pending notification in emission order.
    pub fn drain(&mut self) -> Vec<Envelope> {
        std::mem::take(&mut self.pending)
    }

    /// Console lines rendered for `recipient`, oldest first.
    pub fn console_for(&self, recipient: EntityId) -> Vec<&str> {
        self.pending
            .iter()
            .filter_map(|envelope| match &envelope.notification {
                Notification::Console {
                    recipient: to,
                    text,
                    ..
                } if *to == recipient => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drains pending notifications as newline-delimited JSON.
    pub fn drain_json_lines(&mut self) -> serde_json::Result<String> {
        let mut out = String::new();
        for envelope in self.drain() {
            out.push_str(&serde_json::to_string(&envelope)?);
            out.push('\n');
        }
        Ok(out)
    }

    fn push(&mut self, notification: Notification) {
        self.pending.push(Envelope {
            at: self.now,
            notification,
        });
    }
}

impl CombatSink for Outbox {
    fn combat_message(&mut self, recipient: EntityId, message: CombatMessage) {
        let text = message.to_string();
        self.push(Notification::Console {
            recipient,
            message,
            text,
        });
    }

    fn entity_update(&mut self, recipient: EntityId, update: EntityUpdate) {
        self.push(Notification::Update { recipient, update });
    }

    fn broadcast_update(&mut self, subject: EntityId, update: EntityUpdate) {
        self.push(Notification::Broadcast { subject, update });
    }

    fn broadcast_effect(&mut self, effect: VisualEffect) {
        self.push(Notification::Effect { effect });
    }

    fn play_sound(&mut self, origin: EntityId, sound: SoundId) {
        self.push(Notification::Sound { origin, sound });
    }
}

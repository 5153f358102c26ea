//! Transient per-capability status messages.
//!
//! DESIGN
//! ======
//! Slots are keyed by capability name and live outside the rendered cards, so
//! a message shown by a successful mutation survives the re-render that
//! follows it. Every `show` hands back a token; a delayed `hide` only clears
//! the slot when its token is still the latest, so an older auto-hide can
//! never swallow a newer message.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS class for the message element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

/// A single message area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
    seq: u64,
}

impl StatusSlot {
    /// Show `message`, superseding whatever was there. Returns the hide token.
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.seq += 1;
        self.current = Some(message);
        self.seq
    }

    /// Hide the message shown with `token`. Stale tokens are ignored.
    pub fn hide(&mut self, token: u64) -> bool {
        if token != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Hide unconditionally; pending hide tokens become stale.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.current = None;
    }

    pub fn visible(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Whether a hide with `token` would still clear something.
    pub fn is_pending(&self, token: u64) -> bool {
        token == self.seq && self.current.is_some()
    }
}

/// All status slots of the board.
///
/// Tokens increase across the whole board, so a slot dropped by [`prune`]
/// and created again never hands out a token an older hide still holds.
///
/// [`prune`]: StatusBoard::prune
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBoard {
    slots: HashMap<String, StatusSlot>,
    last_token: u64,
}

impl StatusBoard {
    pub fn show(&mut self, capability: &str, message: StatusMessage) -> u64 {
        let slot = self.slots.entry(capability.to_owned()).or_default();
        slot.seq = slot.seq.max(self.last_token);
        self.last_token = slot.show(message);
        self.last_token
    }

    pub fn hide(&mut self, capability: &str, token: u64) -> bool {
        self.slots.get_mut(capability).is_some_and(|slot| slot.hide(token))
    }

    pub fn clear(&mut self, capability: &str) {
        if let Some(slot) = self.slots.get_mut(capability) {
            slot.clear();
            self.last_token = self.last_token.max(slot.seq);
        }
    }

    pub fn visible(&self, capability: &str) -> Option<&StatusMessage> {
        self.slots.get(capability).and_then(StatusSlot::visible)
    }

    pub fn is_pending(&self, capability: &str, token: u64) -> bool {
        self.slots.get(capability).is_some_and(|slot| slot.is_pending(token))
    }

    /// Drop empty slots of capabilities not in `listed`. Showing slots are kept
    /// so their pending hide still finds them.
    pub fn prune<'a>(&mut self, listed: impl IntoIterator<Item = &'a str>) {
        let listed: HashSet<&str> = listed.into_iter().collect();
        self.slots
            .retain(|name, slot| slot.visible().is_some() || listed.contains(name.as_str()));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

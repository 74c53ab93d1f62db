//! In-memory settings store with synchronous observers
//!
//! The store owns the single `Settings` value. Every update merges a patch
//! onto the current value, swaps in the result, then notifies observers in
//! subscription order and finally hands the value to the persistence sink.

use std::fmt;

use super::{Settings, SettingsPatch};
use crate::error::Result;

pub type SettingsObserver = Box<dyn FnMut(&Settings)>;

/// On-change sink for the persistence collaborator
pub trait SettingsSink {
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct SettingsStore {
    current: Settings,
    observers: Vec<(SubscriptionId, SettingsObserver)>,
    sink: Option<Box<dyn SettingsSink>>,
    next_id: u64,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
            sink: None,
            next_id: 0,
        }
    }

    pub fn with_sink(initial: Settings, sink: Box<dyn SettingsSink>) -> Self {
        let mut store = Self::new(initial);
        store.sink = Some(sink);
        store
    }

    /// Snapshot of the current value
    pub fn get(&self) -> Settings {
        self.current.clone()
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Merge `patch` onto the current value and notify every observer, in
    /// subscription order, even when the merge changed nothing.
    ///
    /// The sink only sees values that differ from the previous one.
    pub fn update(&mut self, patch: SettingsPatch) {
        let next = patch.apply_to(&self.current);
        let changed = next != self.current;
        if changed {
            tracing::debug!("Settings updated: {:?}", patch.touched_fields());
        } else {
            tracing::trace!("Settings patch was a no-op: {:?}", patch.touched_fields());
        }
        self.current = next;

        for (_, observer) in self.observers.iter_mut() {
            observer(&self.current);
        }

        if !changed {
            return;
        }
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save(&self.current) {
                tracing::warn!("Failed to persist settings: {}", e);
            }
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

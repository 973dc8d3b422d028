//! Typed signals between site components.
//!
//! Components announce state changes on a [`SignalBus`] instead of
//! dispatching loosely-typed DOM events. Listeners run synchronously, in
//! registration order, before `emit` returns.

use crate::types::{Filter, LayoutMode, ScrollDirection, StageId, ThemeMode};

#[derive(Debug, Clone, PartialEq)]
pub enum SiteSignal {
    /// Loading finished and the loading screen is gone
    AppReady,
    /// The duality switch changed mode
    ModeChanged(ThemeMode),
    FilterChanged { filter: Filter, visible: usize },
    ActiveSectionChanged(Option<String>),
    StageChanged(StageId),
    LayoutChanged(LayoutMode),
    MotionChanged { reduced: bool },
    ScrollDirectionChanged(ScrollDirection),
}

/// Handle returned by [`SignalBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SiteSignal)>;

#[derive(Default)]
pub struct SignalBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SiteSignal) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        before != self.listeners.len()
    }

    pub fn emit(&mut self, signal: SiteSignal) {
        tracing::trace!(?signal, "signal");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&signal);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

//! Document-level pointer listener registry.
//!
//! A drag keeps receiving pointer moves and the release even after the
//! pointer leaves the widget, so the widget subscribes to document-level
//! listeners for the duration of the drag. The host consults
//! [`PointerListeners::is_listening`] to decide whether to forward events that
//! fall outside every widget.
//!
//! Ids come from a counter owned by the registry, so independent documents
//! (and tests) never share state.

/// Handle returned by [`PointerListeners::subscribe`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Which document-level event a listener wants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

#[derive(Debug, Default)]
pub struct PointerListeners {
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, kind));
        log::trace!("subscribed {:?} listener {:?}", kind, id);
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.active.iter().position(|(active, _)| *active == id) {
            Some(i) => {
                let (_, kind) = self.active.swap_remove(i);
                log::trace!("unsubscribed {:?} listener {:?}", kind, id);
                true
            }
            None => {
                log::warn!("listener {:?} was not subscribed", id);
                false
            }
        }
    }

    #[inline]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.active.iter().any(|(_, k)| *k == kind)
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

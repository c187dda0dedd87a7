//! A minimal subject/observer list, decoupled from any UI toolkit.

/// Handle returned by [`Subject::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// An explicit observer list for one event type.
pub struct Subject<E> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn FnMut(&E) + Send>)>,
}

impl<E> Subject<E> {
    /// An empty subject.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer; it is called for every subsequent emission.
    pub fn subscribe(&mut self, observer: impl FnMut(&E) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Notify every registered observer, in subscription order.
    pub fn emit(&mut self, event: &E) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

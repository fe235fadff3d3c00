// SPDX-License-Identifier: MPL-2.0
//! The notification store: the single source of truth for active toasts.
//!
//! A [`NotificationStore`] owns the ordered list of active entries (oldest
//! first, newest last) and the close delay shared by all of them. Every
//! mutation bumps a revision counter and synchronously hands the resulting
//! [`Snapshot`] to each observer, once per effective change. Removing an
//! absent id or clearing an empty store changes nothing and notifies no one.
//!
//! The store is a cheap handle around shared state, so lifecycle timers can
//! hold a non-owning reference and remove their entry from any thread.

use super::close_delay::CloseDelay;
use super::entry::{NotificationEntry, NotificationId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use std::time::Duration;

type ObserverFn = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Immutable view of the store contents after a mutation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    revision: u64,
    entries: Arc<[NotificationEntry]>,
}

impl Snapshot {
    /// Monotonic counter bumped by every effective mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Active entries in arrival order (newest last).
    #[must_use]
    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }
}

#[derive(Default)]
struct State {
    entries: Vec<NotificationEntry>,
    revision: u64,
    observers: Vec<(u64, ObserverFn)>,
    next_observer: u64,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            entries: self.entries.iter().cloned().collect(),
        }
    }
}

struct Shared {
    dismiss_delay: CloseDelay,
    state: Mutex<State>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of the active notifications and their mutation API.
#[derive(Clone)]
pub struct NotificationStore {
    shared: Arc<Shared>,
}

impl NotificationStore {
    /// Creates an empty store whose entries dismiss after `close_delay`.
    #[must_use]
    pub fn new(close_delay: CloseDelay) -> Self {
        Self {
            shared: Arc::new(Shared {
                dismiss_delay: close_delay,
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// Creates an empty store from a close delay in seconds.
    #[must_use]
    pub fn with_close_delay_secs(secs: f64) -> Self {
        Self::new(CloseDelay::from_secs_f64(secs))
    }

    /// Process-wide default store, created on first access and kept until exit.
    ///
    /// This is the ambient fallback used by an overlay that was not given a
    /// store. Tests and embedders that run several UIs should build their own
    /// stores instead of sharing this one.
    pub fn standard() -> Self {
        static STANDARD: OnceLock<NotificationStore> = OnceLock::new();
        STANDARD.get_or_init(Self::default).clone()
    }

    /// Delay after which each entry of this store dismisses itself.
    #[must_use]
    pub fn dismiss_delay(&self) -> Duration {
        self.shared.dismiss_delay.as_duration()
    }

    /// Appends an entry at the end of the list and notifies observers.
    pub fn add(&self, entry: NotificationEntry) {
        let id = entry.id();
        self.mutate(|entries| {
            entries.push(entry);
            true
        });
        tracing::trace!(?id, "notification added");
    }

    /// Removes the entry with `id`, keeping the others in order.
    ///
    /// Removing an id that is not present is a no-op and notifies no one.
    /// Returns whether an entry was removed.
    pub fn remove(&self, id: NotificationId) -> bool {
        let removed = self.mutate(|entries| {
            match entries.iter().position(|entry| entry.id() == id) {
                Some(pos) => {
                    entries.remove(pos);
                    true
                }
                None => false,
            }
        });
        if removed {
            tracing::trace!(?id, "notification removed");
        }
        removed
    }

    /// Removes every entry in one update. An empty store is left untouched.
    pub fn remove_all(&self) {
        let cleared = self.mutate(|entries| {
            if entries.is_empty() {
                return false;
            }
            entries.clear();
            true
        });
        if cleared {
            tracing::trace!("all notifications removed");
        }
    }

    /// Returns the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.shared
            .lock()
            .entries
            .iter()
            .any(|entry| entry.id() == id)
    }

    /// Registers a callback run after every effective mutation with the
    /// post-mutation snapshot. The callback runs outside the store lock, so
    /// it may call back into the store.
    ///
    /// Dropping the returned guard unsubscribes.
    pub fn observe(&self, observer: impl Fn(&Snapshot) + Send + Sync + 'static) -> ObserverGuard {
        let mut state = self.shared.lock();
        let key = state.next_observer;
        state.next_observer += 1;
        state.observers.push((key, Arc::new(observer)));
        ObserverGuard {
            store: Arc::downgrade(&self.shared),
            key,
        }
    }

    /// Returns a reference that does not keep the store alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakStore {
        WeakStore(Arc::downgrade(&self.shared))
    }

    /// Applies `change` under the lock; when it reports a change, bumps the
    /// revision and notifies observers after releasing the lock.
    fn mutate(&self, change: impl FnOnce(&mut Vec<NotificationEntry>) -> bool) -> bool {
        let (snapshot, observers) = {
            let mut state = self.shared.lock();
            if !change(&mut state.entries) {
                return false;
            }
            state.revision += 1;
            let observers: Vec<ObserverFn> = state
                .observers
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            (state.snapshot(), observers)
        };

        for observer in observers {
            observer(&snapshot);
        }
        true
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(CloseDelay::default())
    }
}

/// Handles compare and hash by identity: two handles are equal when they
/// share the same underlying store.
impl PartialEq for NotificationStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for NotificationStore {}

impl Hash for NotificationStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.shared).hash(state);
    }
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("NotificationStore")
            .field("dismiss_delay", &self.shared.dismiss_delay)
            .field("entries", &state.entries.len())
            .field("revision", &state.revision)
            .finish()
    }
}

/// Non-owning store reference held by lifecycle timers.
#[derive(Debug, Clone)]
pub struct WeakStore(Weak<Shared>);

impl WeakStore {
    /// Returns the store if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<NotificationStore> {
        self.0.upgrade().map(|shared| NotificationStore { shared })
    }
}

/// Keeps an observer registered; unsubscribes on drop.
#[must_use = "dropping the guard unsubscribes the observer"]
pub struct ObserverGuard {
    store: Weak<Shared>,
    key: u64,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        if let Some(shared) = self.store.upgrade() {
            shared.lock().observers.retain(|(key, _)| *key != self.key);
        }
    }
}

impl fmt::Debug for ObserverGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverGuard").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ids(store: &NotificationStore) -> Vec<NotificationId> {
        store.snapshot().entries().iter().map(NotificationEntry::id).collect()
    }

    fn counting_observer(store: &NotificationStore) -> (Arc<AtomicUsize>, ObserverGuard) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let guard = store.observe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (count, guard)
    }

    #[test]
    fn new_store_is_empty() {
        let store = NotificationStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.snapshot().revision(), 0);
        assert_eq!(store.dismiss_delay(), Duration::from_secs(3));
    }

    #[test]
    fn add_appends_at_tail() {
        let store = NotificationStore::default();
        let a = NotificationEntry::info("a");
        let b = NotificationEntry::info("b");
        let (a_id, b_id) = (a.id(), b.id());

        store.add(a);
        store.add(b);

        assert_eq!(ids(&store), vec![a_id, b_id]);
    }

    #[test]
    fn add_notifies_with_final_position() {
        let store = NotificationStore::default();
        store.add(NotificationEntry::info("first"));
        let entry = NotificationEntry::info("second");
        let id = entry.id();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _guard = store.observe(move |snapshot| {
            let last = snapshot.entries().last().map(NotificationEntry::id);
            sink.lock().unwrap().push((snapshot.len(), last));
        });

        store.add(entry);

        assert_eq!(*seen.lock().unwrap(), vec![(2, Some(id))]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let store = NotificationStore::default();
        let entries: Vec<_> = ["a", "b", "c"].into_iter().map(NotificationEntry::info).collect();
        let [a, b, c] = [entries[0].id(), entries[1].id(), entries[2].id()];
        for entry in entries {
            store.add(entry);
        }

        assert!(store.remove(b));
        assert_eq!(ids(&store), vec![a, c]);
    }

    #[test]
    fn remove_absent_id_does_not_notify() {
        let store = NotificationStore::default();
        store.add(NotificationEntry::info("kept"));
        let (count, _guard) = counting_observer(&store);
        let before = store.snapshot().revision();

        assert!(!store.remove(NotificationEntry::info("never added").id()));

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().revision(), before);
    }

    #[test]
    fn remove_twice_matches_remove_once() {
        let store = NotificationStore::default();
        let entry = NotificationEntry::info("once");
        let id = entry.id();
        store.add(entry);
        store.add(NotificationEntry::info("other"));
        let (count, _guard) = counting_observer(&store);

        assert!(store.remove(id));
        let after_first = ids(&store);
        assert!(!store.remove(id));

        assert_eq!(ids(&store), after_first);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remove_all_notifies_once() {
        let store = NotificationStore::default();
        for i in 0..5 {
            store.add(NotificationEntry::info(format!("test-{i}")));
        }
        let (count, _guard) = counting_observer(&store);

        store.remove_all();

        assert!(store.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remove_all_on_empty_store_is_silent() {
        let store = NotificationStore::default();
        let (count, _guard) = counting_observer(&store);

        store.remove_all();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot().revision(), 0);
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let store = NotificationStore::default();
        let (count, guard) = counting_observer(&store);

        store.add(NotificationEntry::info("seen"));
        drop(guard);
        store.add(NotificationEntry::info("unseen"));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn observer_may_reenter_store() {
        let store = NotificationStore::default();
        let handle = store.clone();
        let _guard = store.observe(move |snapshot| {
            if snapshot.len() > 1 {
                if let Some(oldest) = snapshot.entries().first() {
                    handle.remove(oldest.id());
                }
            }
        });

        store.add(NotificationEntry::info("one"));
        store.add(NotificationEntry::info("two"));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let store = NotificationStore::default();
        let other = store.clone();
        store.add(NotificationEntry::info("shared"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn weak_store_does_not_keep_store_alive() {
        let store = NotificationStore::default();
        let weak = store.downgrade();
        assert!(weak.upgrade().is_some());
        drop(store);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn standard_store_is_shared() {
        let first = NotificationStore::standard();
        let second = NotificationStore::standard();
        assert!(Arc::ptr_eq(&first.shared, &second.shared));
    }

    #[test]
    fn handles_compare_by_identity() {
        use std::collections::HashSet;

        let store = NotificationStore::default();
        let other = NotificationStore::default();
        assert_eq!(store, store.clone());
        assert_ne!(store, other);

        let set: HashSet<_> = [store.clone(), store.clone(), other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn close_delay_is_fixed_per_store() {
        let store = NotificationStore::with_close_delay_secs(5.0);
        assert_eq!(store.dismiss_delay(), Duration::from_secs(5));
    }
}

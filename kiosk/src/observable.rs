//! Copy-on-write list with change notification
//!
//! Backing container for the menu and cart stores. The current contents live
//! in a `tokio::sync::watch` channel as an immutable `Arc<[T]>` snapshot:
//!
//! - readers clone the `Arc` and never block writers for long
//! - every effective mutation installs a brand new `Arc`, so observers can
//!   detect change with [`Arc::ptr_eq`]
//! - subscribers are woken synchronously by the mutating call
//! - a mutation that changes nothing keeps the old snapshot and wakes nobody

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Immutable view of a list at one point in time
pub type Snapshot<T> = Arc<[T]>;

pub struct ObservableList<T> {
    tx: Arc<watch::Sender<Snapshot<T>>>,
}

impl<T> ObservableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::from(items));
        Self { tx: Arc::new(tx) }
    }

    /// Current contents
    pub fn snapshot(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    /// Receiver that is marked changed on every effective mutation
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Apply `f` atomically under the channel's write lock
    ///
    /// `f` returns the replacement contents, or `None` to leave the list as
    /// is. Returns whether the list was replaced. `f` must not call back into
    /// this list.
    pub fn replace_with<F>(&self, f: F) -> bool
    where
        F: FnOnce(&[T]) -> Option<Vec<T>>,
    {
        self.tx.send_if_modified(|current| match f(current) {
            Some(next) => {
                *current = Snapshot::from(next);
                true
            }
            None => false,
        })
    }
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.snapshot())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_installs_new_snapshot() {
        let list = ObservableList::new(vec![1, 2, 3]);
        let before = list.snapshot();

        let replaced = list.replace_with(|items| Some(items.iter().map(|n| n * 10).collect()));
        assert!(replaced);

        let after = list.snapshot();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(&*before, &[1, 2, 3]);
        assert_eq!(&*after, &[10, 20, 30]);
    }

    #[test]
    fn test_noop_keeps_identity_and_does_not_notify() {
        let list = ObservableList::new(vec!["a"]);
        let rx = list.subscribe();
        let before = list.snapshot();

        assert!(!list.replace_with(|_| None));

        assert!(Arc::ptr_eq(&before, &list.snapshot()));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_subscribers_see_changes_synchronously() {
        let list = ObservableList::new(Vec::<u32>::new());
        let mut a = list.subscribe();
        let b = list.clone().subscribe();
        assert_eq!(list.subscriber_count(), 2);

        list.replace_with(|items| {
            let mut next = items.to_vec();
            next.push(7);
            Some(next)
        });

        assert!(a.has_changed().unwrap());
        assert!(b.has_changed().unwrap());
        assert_eq!(&**a.borrow_and_update(), &[7]);
        assert!(!a.has_changed().unwrap());
    }

    #[test]
    fn test_clones_share_state() {
        let list = ObservableList::new(vec![1]);
        let other = list.clone();
        other.replace_with(|_| Some(vec![2]));
        assert_eq!(&*list.snapshot(), &[2]);
    }
}

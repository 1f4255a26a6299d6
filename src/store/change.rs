//! Structural-change notifications emitted by [`VideoListStore`](super::VideoListStore).

use std::sync::mpsc;

/// Which positions of the list changed.
///
/// `Reset` means "discard all cached row state".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Reset,
    InsertRange { start: usize, count: usize },
    RemoveAt(usize),
    Move { from: usize, to: usize },
}

/// Observer of list changes.
///
/// Implemented for closures and for `mpsc::Sender<ListChange>` so a host can
/// either react inline or drain events from its own loop.
pub trait ChangeListener {
    fn on_change(&mut self, change: &ListChange);
}

impl<F> ChangeListener for F
where
    F: FnMut(&ListChange),
{
    fn on_change(&mut self, change: &ListChange) {
        self(change)
    }
}

impl ChangeListener for mpsc::Sender<ListChange> {
    fn on_change(&mut self, change: &ListChange) {
        // Receiver gone means the host stopped listening
        let _ = self.send(*change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_listener_forwards_change() {
        let (mut tx, rx) = mpsc::channel();

        tx.on_change(&ListChange::RemoveAt(3));

        assert_eq!(rx.try_recv(), Ok(ListChange::RemoveAt(3)));
    }

    #[test]
    fn sender_listener_ignores_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel();
        drop(rx);

        // Must not panic
        tx.on_change(&ListChange::Reset);
    }

    #[test]
    fn closure_listener_receives_change() {
        let mut seen = Vec::new();
        {
            let mut listener = |change: &ListChange| seen.push(*change);
            listener.on_change(&ListChange::Move { from: 1, to: 2 });
        }
        assert_eq!(seen, vec![ListChange::Move { from: 1, to: 2 }]);
    }
}

//! Per-frame event queue
//!
//! The fold session records what happened during a gesture; the app drains
//! the queue once per frame and forwards each event to whoever cares
//! (haptics today). The session never calls those collaborators directly.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue: EventQueue<&str> = EventQueue::new();
        queue.send("fold");
        queue.send("wrap");

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec!["fold", "wrap"]);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_partial_drain_still_empties() {
        let mut queue = EventQueue::new();
        queue.send(1);
        queue.send(2);
        assert_eq!(queue.drain().next(), Some(1));
        assert_eq!(queue.drain().count(), 0);
    }
}

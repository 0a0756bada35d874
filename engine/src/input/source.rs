//! Input Sources
//!
//! Anything that yields keyboard notifications in delivery order.

use std::collections::VecDeque;

use super::event::InputEvent;

/// A platform input source.
pub trait InputSource {
    /// Next pending event, or `None` when the source is drained.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// FIFO queue of events.
///
/// Used to feed translated window events into the tracker once per frame,
/// and to simulate input in tests.
#[derive(Debug, Clone, Default)]
pub struct QueuedSource {
    events: VecDeque<InputEvent>,
}

impl QueuedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for QueuedSource {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

impl Extend<InputEvent> for QueuedSource {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

impl FromIterator<InputEvent> for QueuedSource {
    fn from_iter<T: IntoIterator<Item = InputEvent>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut source: QueuedSource = [
            InputEvent::key_down("KeyA"),
            InputEvent::Blur,
            InputEvent::key_up("KeyA"),
        ]
        .into_iter()
        .collect();

        assert_eq!(source.len(), 3);
        assert_eq!(source.poll_event(), Some(InputEvent::key_down("KeyA")));
        assert_eq!(source.poll_event(), Some(InputEvent::Blur));
        assert_eq!(source.poll_event(), Some(InputEvent::key_up("KeyA")));
        assert_eq!(source.poll_event(), None);
    }
}

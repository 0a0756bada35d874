//! Input Events
//!
//! Platform-agnostic key events as delivered to the tracker.

/// A single key-down or key-up notification.
///
/// Carries the raw platform code plus the "default prevented" flag a bound
/// callback may set. Hosts read [`KeyEvent::default_prevented`] after
/// dispatch to decide whether their own handling of the key should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Raw platform code, e.g. `"KeyA"`, `"Digit5"`, `"ArrowLeft"`
    pub code: String,
    /// Auto-repeat from a held key
    pub repeat: bool,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: false,
            default_prevented: false,
        }
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Suppress the platform's built-in handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Which notification an [`InputEvent`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    /// Window lost focus
    Blur,
}

/// Notification emitted by an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    Blur,
}

impl InputEvent {
    pub fn key_down(code: impl Into<String>) -> Self {
        Self::KeyDown(KeyEvent::new(code))
    }

    pub fn key_up(code: impl Into<String>) -> Self {
        Self::KeyUp(KeyEvent::new(code))
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::Blur => EventKind::Blur,
        }
    }

    /// The key event payload, `None` for focus loss.
    pub fn key_event(&self) -> Option<&KeyEvent> {
        match self {
            Self::KeyDown(evt) | Self::KeyUp(evt) => Some(evt),
            Self::Blur => None,
        }
    }

    /// Whether a callback asked to suppress default handling of this event.
    pub fn default_prevented(&self) -> bool {
        self.key_event().is_some_and(KeyEvent::default_prevented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default() {
        let mut evt = KeyEvent::new("KeyA");
        assert!(!evt.default_prevented());
        evt.prevent_default();
        assert!(evt.default_prevented());
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(InputEvent::key_down("KeyA").kind(), EventKind::KeyDown);
        assert_eq!(InputEvent::key_up("KeyA").kind(), EventKind::KeyUp);
        assert_eq!(InputEvent::Blur.kind(), EventKind::Blur);
        assert!(InputEvent::Blur.key_event().is_none());
        assert!(!InputEvent::Blur.default_prevented());
    }
}

//! Transient toast notifications
//!
//! Every `show` call produces an independent toast (uuid identity, never
//! coalesced). A toast is visible for a fixed delay, plays a short exit
//! transition, then is pruned by `update`. There is no caller-driven
//! dismissal.

use ratatui::style::Color;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity of a notification, fixed palette per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Level {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Rgb(0x27, 0xae, 0x60),
            Self::Error => Color::Rgb(0xe7, 0x4c, 0x3c),
            Self::Warning => Color::Rgb(0xf3, 0x9c, 0x12),
            Self::Info => Color::Rgb(0x34, 0x98, 0xdb),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

/// Lifecycle phase of a single toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting,
    Expired,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub level: Level,
    created_at: Instant,
}

impl Notification {
    /// How long a toast stays fully visible
    const DISPLAY_DURATION: Duration = Duration::from_millis(5000);
    /// Exit transition before removal
    const EXIT_DURATION: Duration = Duration::from_millis(300);

    fn new(message: String, level: Level, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: now,
        }
    }

    pub fn phase(&self, now: Instant) -> Phase {
        let elapsed = now.duration_since(self.created_at);
        if elapsed < Self::DISPLAY_DURATION {
            Phase::Visible
        } else if elapsed < Self::DISPLAY_DURATION + Self::EXIT_DURATION {
            Phase::Exiting
        } else {
            Phase::Expired
        }
    }
}

/// The live toast stack, newest last
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new toast; each call is an independent instance
    pub fn show(&mut self, message: impl Into<String>, level: Level, now: Instant) {
        self.items.push(Notification::new(message.into(), level, now));
    }

    /// Drop expired toasts. Called once per event-loop tick.
    pub fn update(&mut self, now: Instant) {
        self.items.retain(|n| n.phase(now) != Phase::Expired);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    mod level {
        use super::*;

        #[test]
        fn test_default_is_info() {
            assert_eq!(Level::default(), Level::Info);
        }

        #[test]
        fn test_palette_is_fixed() {
            assert_eq!(Level::Success.color(), Color::Rgb(0x27, 0xae, 0x60));
            assert_eq!(Level::Error.color(), Color::Rgb(0xe7, 0x4c, 0x3c));
            assert_eq!(Level::Warning.color(), Color::Rgb(0xf3, 0x9c, 0x12));
            assert_eq!(Level::Info.color(), Color::Rgb(0x34, 0x98, 0xdb));
        }
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_visible_then_exiting_then_expired() {
            let start = Instant::now();
            let toast = Notification::new("x".into(), Level::Info, start);
            assert_eq!(toast.phase(at(start, 0)), Phase::Visible);
            assert_eq!(toast.phase(at(start, 4999)), Phase::Visible);
            assert_eq!(toast.phase(at(start, 5000)), Phase::Exiting);
            assert_eq!(toast.phase(at(start, 5299)), Phase::Exiting);
            assert_eq!(toast.phase(at(start, 5300)), Phase::Expired);
        }

        #[test]
        fn test_update_prunes_expired() {
            let start = Instant::now();
            let mut stack = Notifications::new();
            stack.show("x", Level::Success, start);
            stack.update(at(start, 5299));
            assert!(!stack.is_empty());
            stack.update(at(start, 5301));
            assert!(stack.is_empty());
        }

        #[test]
        fn test_update_keeps_younger_toasts() {
            let start = Instant::now();
            let mut stack = Notifications::new();
            stack.show("first", Level::Info, start);
            stack.show("second", Level::Info, at(start, 3000));
            stack.update(at(start, 5400));
            let remaining: Vec<_> = stack.iter().map(|n| n.message.as_str()).collect();
            assert_eq!(remaining, vec!["second"]);
        }
    }

    mod stacking {
        use super::*;

        #[test]
        fn test_repeated_messages_are_not_coalesced() {
            let start = Instant::now();
            let mut stack = Notifications::new();
            stack.show("same", Level::Warning, start);
            stack.show("same", Level::Warning, start);
            assert_eq!(stack.iter().count(), 2);
        }

        #[test]
        fn test_each_toast_has_unique_identity() {
            let start = Instant::now();
            let mut stack = Notifications::new();
            stack.show("same", Level::Warning, start);
            stack.show("same", Level::Warning, start);
            let ids: Vec<_> = stack.iter().map(|n| n.id).collect();
            assert_ne!(ids[0], ids[1]);
        }

        #[test]
        fn test_stack_order_is_newest_last() {
            let start = Instant::now();
            let mut stack = Notifications::new();
            stack.show("a", Level::Info, start);
            stack.show("b", Level::Info, at(start, 10));
            let messages: Vec<_> = stack.iter().map(|n| n.message.as_str()).collect();
            assert_eq!(messages, vec!["a", "b"]);
        }
    }
}

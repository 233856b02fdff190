//! Transient, auto-dismissing status messages.
//!
//! Each notification runs its own timer: `Created -> Visible -> Fading -> Removed`.
//! Time is passed in by the caller so the phases can be driven deterministically.

use std::time::{Duration, Instant};

pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn display_duration(self) -> Duration {
        match self {
            NotificationKind::Success => SUCCESS_DISPLAY,
            NotificationKind::Error => ERROR_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPhase {
    Created,
    Visible,
    Fading,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    created_at: Instant,
    phase: NotificationPhase,
}

impl Notification {
    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    fn fade_starts_at(&self) -> Instant {
        self.created_at + self.kind.display_duration()
    }

    fn removed_at(&self) -> Instant {
        self.fade_starts_at() + FADE_DURATION
    }

    fn phase_at(&self, now: Instant) -> NotificationPhase {
        if now >= self.removed_at() {
            NotificationPhase::Removed
        } else if now >= self.fade_starts_at() {
            NotificationPhase::Fading
        } else {
            NotificationPhase::Visible
        }
    }

    /// 0.0 while visible, rising to 1.0 at removal.
    pub fn fade_progress(&self, now: Instant) -> f32 {
        let faded = now.saturating_duration_since(self.fade_starts_at());
        (faded.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct Notifications {
    next_id: u64,
    entries: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
            created_at: now,
            phase: NotificationPhase::Created,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> NotificationId {
        self.push(NotificationKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> NotificationId {
        self.push(NotificationKind::Error, message, now)
    }

    /// Advances every timer and drops removed notifications.
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            entry.phase = entry.phase.max(entry.phase_at(now));
        }
        self.entries
            .retain(|entry| entry.phase != NotificationPhase::Removed);
    }

    /// Earliest instant at which some notification changes phase.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .map(|entry| match entry.phase {
                NotificationPhase::Created | NotificationPhase::Visible => entry.fade_starts_at(),
                NotificationPhase::Fading | NotificationPhase::Removed => entry.removed_at(),
            })
            .min()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/notifications_tests.rs"]
mod tests;

//! Crossfade between an outgoing and an incoming stat title.
//!
//! `next` follows the input immediately; `current` catches up once the
//! fade delay elapses. The presenter itself does not own a timer: the
//! caller schedules [`FadeTitle::settle`] after [`FADE_MS`] and must drop
//! any earlier pending settle when the title is retargeted (see
//! [`crate::panel`]).

use tracing::debug;

/// Length of the crossfade.
pub const FADE_MS: u32 = 300;

/// Settled title plus the title being faded in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FadeTitle {
    current: String,
    next: String,
}

/// What the view should draw for one title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FadeFrame {
    /// Title being faded out, or the settled title
    pub outgoing: String,
    /// Title being faded in, present only mid-transition
    pub incoming: Option<String>,
}

impl FadeFrame {
    /// Mid-transition: the outgoing span fades out while `incoming` fades in.
    pub fn is_fading(&self) -> bool {
        self.incoming.is_some()
    }
}

impl FadeTitle {
    /// A settled title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            current: title.clone(),
            next: title,
        }
    }

    /// Title currently committed.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Title being faded towards. Equal to `current` when settled.
    pub fn next(&self) -> &str {
        &self.next
    }

    /// Whether a settle is still outstanding.
    pub fn is_fading(&self) -> bool {
        self.current != self.next
    }

    /// Point the fade at a new title.
    ///
    /// Returns `false` when `title` is already the target, in which case
    /// no settle needs to be scheduled.
    pub fn retarget(&mut self, title: &str) -> bool {
        if self.next == title {
            return false;
        }
        self.next = title.to_string();
        true
    }

    /// Commit `title` as the displayed title.
    ///
    /// A settle carrying anything other than the current target is stale
    /// and ignored, so only the last of a burst of titles can win.
    pub fn settle(&mut self, title: &str) -> bool {
        if self.next != title {
            debug!(stale = title, target = %self.next, "ignoring stale fade settle");
            return false;
        }
        if self.current == title {
            return false;
        }
        self.current = title.to_string();
        true
    }

    /// What to draw right now.
    pub fn frame(&self) -> FadeFrame {
        FadeFrame {
            outgoing: self.current.clone(),
            incoming: self.is_fading().then(|| self.next.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn settled_title_has_no_incoming() {
        let fade = FadeTitle::new("A");
        assert_eq!(
            fade.frame(),
            FadeFrame {
                outgoing: "A".into(),
                incoming: None
            }
        );
    }

    #[test]
    fn retarget_starts_fade_and_settle_finishes_it() {
        let mut fade = FadeTitle::new("A");
        assert!(fade.retarget("B"));
        assert!(fade.frame().is_fading());
        assert_eq!(fade.frame().incoming.as_deref(), Some("B"));
        assert_eq!(fade.current(), "A");

        assert!(fade.settle("B"));
        assert_eq!(fade.current(), "B");
        assert!(!fade.is_fading());
    }

    #[test]
    fn retarget_to_same_title_is_noop() {
        let mut fade = FadeTitle::new("A");
        assert!(!fade.retarget("A"));
        assert!(fade.retarget("B"));
        assert!(!fade.retarget("B"));
    }

    #[test]
    fn stale_settle_cannot_win() {
        let mut fade = FadeTitle::new("A");
        fade.retarget("B");
        fade.retarget("C");
        assert!(!fade.settle("B"));
        assert_eq!(fade.current(), "A");
        assert!(fade.settle("C"));
        assert_eq!(fade.current(), "C");
    }

    #[test]
    fn returning_to_current_title_ends_fade() {
        let mut fade = FadeTitle::new("A");
        fade.retarget("B");
        fade.retarget("A");
        assert!(!fade.is_fading());
        assert!(!fade.settle("A"));
    }
}

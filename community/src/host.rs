//! The environment the stat panel runs in: timers and page visibility.
//!
//! Every registration returns a guard. Dropping the guard cancels the timer
//! or removes the listener, so whoever owns the guards owns the lifetime of
//! the callbacks. The browser implementation lives in `community-wasm`;
//! tests use [`manual::ManualHost`], which drives virtual time by hand.

/// Scheduling and visibility primitives of the hosting page.
pub trait Host: Clone + 'static {
    /// Repeating timer, cancelled on drop.
    type Interval: 'static;
    /// One-shot timer, cancelled on drop.
    type Timeout: 'static;
    /// Visibility listener, removed on drop.
    type Subscription: 'static;

    /// Call `callback` every `period_ms` until the guard is dropped.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Interval;

    /// Call `callback` once after `delay_ms` unless the guard is dropped first.
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timeout;

    /// Whether the page is currently in the background.
    fn is_hidden(&self) -> bool;

    /// Call `callback` with the new hidden flag whenever visibility changes.
    fn on_visibility_change(&self, callback: Box<dyn FnMut(bool)>) -> Self::Subscription;
}

//! The mounted rotating stat panel.
//!
//! [`StatPanel::mount`] wires a [`RotationState`] to a [`Host`]: a 2 s
//! interval advances one slot per tick while the page is visible, and each
//! changed title crossfades through a [`FadePresenter`]. The panel owns
//! every guard it acquires, so dropping it is the unmount.
//!
//! Host callbacks only hold weak references. A callback that outlives the
//! panel finds nothing to upgrade and returns.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::catalog::{SLOT_COUNT, StatCatalog};
use crate::fade::{FADE_MS, FadeFrame, FadeTitle};
use crate::host::Host;
use crate::rotation::{ROTATION_PERIOD_MS, RotationState};

/// Attribute holding the slot index on each rendered stat.
pub const SLOT_ATTR: &str = "data-stat-slot";
/// Attribute naming a node's role inside a stat slot.
pub const PART_ATTR: &str = "data-stat-part";
/// [`PART_ATTR`] of the settled or outgoing title.
pub const PART_CURRENT: &str = "current";
/// [`PART_ATTR`] of the incoming title.
pub const PART_NEXT: &str = "next";
/// [`PART_ATTR`] of the stat value.
pub const PART_VALUE: &str = "value";

/// Receives the panel's render updates.
pub trait StatView {
    /// Replace the value text of `slot`.
    fn show_value(&mut self, slot: usize, value: &str);
    /// Draw the title of `slot` as `frame`.
    fn show_title(&mut self, slot: usize, frame: &FadeFrame);
}

type FrameSink = Rc<dyn Fn(&FadeFrame)>;

/// One crossfading title with its pending settle timer.
pub struct FadePresenter<H: Host> {
    host: H,
    title: Rc<RefCell<FadeTitle>>,
    pending: Option<H::Timeout>,
    sink: FrameSink,
}

impl<H: Host> FadePresenter<H> {
    /// A settled presenter that reports every frame change to `sink`.
    pub fn new(host: H, initial: &str, sink: impl Fn(&FadeFrame) + 'static) -> Self {
        Self {
            host,
            title: Rc::new(RefCell::new(FadeTitle::new(initial))),
            pending: None,
            sink: Rc::new(sink),
        }
    }

    /// Frame currently on screen.
    pub fn frame(&self) -> FadeFrame {
        self.title.borrow().frame()
    }

    /// Committed title.
    pub fn current(&self) -> String {
        self.title.borrow().current().to_string()
    }

    /// Start fading towards `title`.
    ///
    /// Any settle still pending from an earlier retarget is cancelled by
    /// replacing its guard.
    pub fn set_title(&mut self, title: &str) {
        let frame = {
            let mut state = self.title.borrow_mut();
            if !state.retarget(title) {
                return;
            }
            state.frame()
        };
        (self.sink)(&frame);

        if !frame.is_fading() {
            // back to the settled title before the delay ran out
            self.pending = None;
            return;
        }

        let weak = Rc::downgrade(&self.title);
        let sink = Rc::clone(&self.sink);
        let target = title.to_string();
        self.pending = Some(self.host.after(
            FADE_MS,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let frame = {
                    let mut state = state.borrow_mut();
                    if !state.settle(&target) {
                        return;
                    }
                    state.frame()
                };
                debug!(title = %target, "fade settled");
                sink(&frame);
            }),
        ));
    }
}

struct PanelState<H: Host> {
    catalog: StatCatalog,
    rotation: RotationState,
    visible: bool,
    titles: Vec<FadePresenter<H>>,
    view: Rc<RefCell<dyn StatView>>,
}

impl<H: Host> PanelState<H> {
    fn on_tick(&mut self) {
        let Some(slot) = self.rotation.tick(&self.catalog, self.visible) else {
            return;
        };
        let entry = self.catalog.entry(slot, self.rotation.active_indexes()[slot]);
        self.view
            .borrow_mut()
            .show_value(slot, &entry.display_value());
        self.titles[slot].set_title(entry.title);
    }
}

/// Read-only view of a mounted panel, for inspection and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSnapshot {
    /// Which entry each slot shows
    pub rotation: RotationState,
    /// Whether ticks currently advance the rotation
    pub visible: bool,
    /// Title frame per slot
    pub titles: Vec<FadeFrame>,
}

/// A rotating stat panel bound to a host and a view.
///
/// Field order is drop order: the interval and the visibility listener are
/// released before the state they point at.
pub struct StatPanel<H: Host> {
    _interval: H::Interval,
    _visibility: H::Subscription,
    state: Rc<RefCell<PanelState<H>>>,
}

impl<H: Host> StatPanel<H> {
    /// Render the initial stats into `view` and start rotating.
    ///
    /// Rotation starts paused when the host page is hidden.
    pub fn mount(host: H, catalog: StatCatalog, view: impl StatView + 'static) -> Self {
        let view: Rc<RefCell<dyn StatView>> = Rc::new(RefCell::new(view));
        let rotation = RotationState::new();
        let visible = !host.is_hidden();

        let titles = (0..SLOT_COUNT)
            .map(|slot| {
                let entry = rotation.entry(&catalog, slot);
                view.borrow_mut().show_value(slot, &entry.display_value());
                let sink_view = Rc::clone(&view);
                let presenter = FadePresenter::new(host.clone(), entry.title, move |frame| {
                    sink_view.borrow_mut().show_title(slot, frame)
                });
                view.borrow_mut().show_title(slot, &presenter.frame());
                presenter
            })
            .collect();

        let state = Rc::new(RefCell::new(PanelState {
            catalog,
            rotation,
            visible,
            titles,
            view,
        }));

        let weak: Weak<RefCell<PanelState<H>>> = Rc::downgrade(&state);
        let interval = host.every(
            ROTATION_PERIOD_MS,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().on_tick();
                }
            }),
        );

        let weak = Rc::downgrade(&state);
        let visibility = host.on_visibility_change(Box::new(move |hidden| {
            if let Some(state) = weak.upgrade() {
                debug!(hidden, "page visibility changed");
                state.borrow_mut().visible = !hidden;
            }
        }));

        info!(visible, "stat panel mounted");
        Self {
            _interval: interval,
            _visibility: visibility,
            state,
        }
    }

    /// Current panel state.
    pub fn snapshot(&self) -> PanelSnapshot {
        let state = self.state.borrow();
        PanelSnapshot {
            rotation: state.rotation,
            visible: state.visible,
            titles: state.titles.iter().map(FadePresenter::frame).collect(),
        }
    }
}

impl<H: Host> Drop for StatPanel<H> {
    fn drop(&mut self) {
        info!("stat panel unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::manual::ManualHost;
    use crate::rotation::ROTATION_ORDER;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Value(usize, String),
        Title(usize, FadeFrame),
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl StatView for Recorder {
        fn show_value(&mut self, slot: usize, value: &str) {
            self.0.borrow_mut().push(Event::Value(slot, value.to_string()));
        }
        fn show_title(&mut self, slot: usize, frame: &FadeFrame) {
            self.0.borrow_mut().push(Event::Title(slot, frame.clone()));
        }
    }

    fn mount(host: &ManualHost) -> (StatPanel<ManualHost>, Recorder) {
        let recorder = Recorder::default();
        let panel = StatPanel::mount(host.clone(), *StatCatalog::builtin(), recorder.clone());
        (panel, recorder)
    }

    #[test]
    fn mount_renders_initial_entries() {
        let host = ManualHost::new();
        let (_panel, recorder) = mount(&host);
        let events = recorder.take();
        assert_eq!(events.len(), 8);
        assert_eq!(events[0], Event::Value(0, "30".into()));
        assert_eq!(
            events[1],
            Event::Title(
                0,
                FadeFrame {
                    outgoing: "Active Countries".into(),
                    incoming: None
                }
            )
        );
    }

    #[test]
    fn ticks_advance_slots_in_rotation_order() {
        let host = ManualHost::new();
        let (panel, recorder) = mount(&host);
        recorder.take();

        let mut advanced = Vec::new();
        for _ in 0..9 {
            host.advance(u64::from(ROTATION_PERIOD_MS));
            advanced.extend(recorder.take().into_iter().filter_map(|e| match e {
                Event::Value(slot, _) => Some(slot),
                Event::Title(..) => None,
            }));
        }
        let expected: Vec<usize> = (0..9).map(|i| ROTATION_ORDER[i % 4]).collect();
        assert_eq!(advanced, expected);
        assert_eq!(panel.snapshot().rotation.rotation_pointer(), 1);
    }

    #[test]
    fn title_crossfades_then_settles() {
        let host = ManualHost::new();
        let (panel, _recorder) = mount(&host);

        host.advance(u64::from(ROTATION_PERIOD_MS));
        let frame = &panel.snapshot().titles[2];
        assert_eq!(frame.outgoing, "Ecosystem Partnerships");
        assert_eq!(frame.incoming.as_deref(), Some("Conference Appearances"));

        host.advance(u64::from(FADE_MS));
        let frame = &panel.snapshot().titles[2];
        assert_eq!(frame.outgoing, "Conference Appearances");
        assert!(!frame.is_fading());
    }

    #[test]
    fn hidden_page_freezes_rotation() {
        let host = ManualHost::new();
        let (panel, recorder) = mount(&host);
        host.advance(u64::from(ROTATION_PERIOD_MS));
        let before = panel.snapshot().rotation;

        host.set_hidden(true);
        assert!(!panel.snapshot().visible);
        recorder.take();
        host.advance(10 * u64::from(ROTATION_PERIOD_MS));
        assert_eq!(panel.snapshot().rotation, before);
        assert!(recorder.take().iter().all(|e| matches!(e, Event::Title(..))));
        // the interval keeps running while hidden
        assert_eq!(host.pending_timers(), 1);

        host.set_hidden(false);
        host.advance(u64::from(ROTATION_PERIOD_MS));
        assert_ne!(panel.snapshot().rotation, before);
    }

    #[test]
    fn mounting_in_background_starts_hidden() {
        let host = ManualHost::new();
        host.set_hidden(true);
        let (panel, _recorder) = mount(&host);
        host.advance(4 * u64::from(ROTATION_PERIOD_MS));
        assert_eq!(panel.snapshot().rotation, RotationState::new());
    }

    #[test]
    fn unmount_releases_timers_and_listener() {
        let host = ManualHost::new();
        let (panel, recorder) = mount(&host);
        // mid-fade: interval plus one pending settle
        host.advance(u64::from(ROTATION_PERIOD_MS));
        assert_eq!(host.pending_timers(), 2);
        assert_eq!(host.listeners(), 1);

        drop(panel);
        assert_eq!(host.pending_timers(), 0);
        assert_eq!(host.listeners(), 0);

        recorder.take();
        host.advance(10 * u64::from(ROTATION_PERIOD_MS));
        host.set_hidden(true);
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn rapid_titles_commit_only_the_last() {
        let host = ManualHost::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&frames);
        let mut presenter = FadePresenter::new(host.clone(), "start", move |f: &FadeFrame| {
            log.borrow_mut().push(f.clone())
        });

        for title in ["A", "B", "C"] {
            presenter.set_title(title);
            host.advance(100);
        }
        assert_eq!(presenter.current(), "start");
        assert_eq!(host.pending_timers(), 1);

        host.advance(u64::from(FADE_MS));
        assert_eq!(presenter.current(), "C");
        assert_eq!(host.pending_timers(), 0);

        let settled: Vec<_> = frames
            .borrow()
            .iter()
            .filter(|f| !f.is_fading())
            .map(|f| f.outgoing.clone())
            .collect();
        assert_eq!(settled, vec!["C".to_string()]);
    }

    #[test]
    fn retarget_back_to_current_cancels_pending_settle() {
        let host = ManualHost::new();
        let mut presenter = FadePresenter::new(host.clone(), "A", |_: &FadeFrame| {});
        presenter.set_title("B");
        presenter.set_title("A");
        assert_eq!(host.pending_timers(), 0);
        assert!(!presenter.frame().is_fading());
    }
}

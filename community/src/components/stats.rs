//! The rotating stat panel in its server-rendered initial state.
//!
//! Markup contract with `community-wasm` (see `DomStatView`):
//!
//! - the panel root has id [`STAT_PANEL_ID`]
//! - each slot carries [`SLOT_ATTR`](crate::panel::SLOT_ATTR) with its index
//! - inside a slot, [`PART_ATTR`](crate::panel::PART_ATTR) is one of
//!   `current`, `next` and `value`

use leptos::prelude::*;

use crate::catalog::StatCatalog;
use crate::fade::{FadeFrame, FadeTitle};
use crate::panel::{PART_CURRENT, PART_NEXT, PART_VALUE};
use crate::rotation::RotationState;
use crate::types::StatEntry;

/// Element id the browser binding mounts on.
pub const STAT_PANEL_ID: &str = "stat-panel";

/// Two stacked spans: the outgoing title and, mid-fade, the incoming one.
#[component]
pub fn FadeTitleView(frame: FadeFrame) -> impl IntoView {
    let fading = frame.is_fading();
    view! {
        <span class="stat-title">
            <span
                class=if fading { "stat-title-current fade-out" } else { "stat-title-current" }
                data-stat-part=PART_CURRENT
            >
                {frame.outgoing}
            </span>
            <span class="stat-fade-in" data-stat-part=PART_NEXT hidden={!fading}>
                {frame.incoming.unwrap_or_default()}
            </span>
        </span>
    }
}

#[component]
fn StatSlot(index: usize, entry: &'static StatEntry) -> impl IntoView {
    let frame = FadeTitle::new(entry.title).frame();
    view! {
        <div class="stat" data-stat-slot=index.to_string()>
            <FadeTitleView frame=frame />
            <span class="stat-value" data-stat-part=PART_VALUE>{entry.display_value()}</span>
        </div>
    }
}

/// The four stat slots, each on the first entry of its group.
#[component]
pub fn RotatingStatPanel(catalog: &'static StatCatalog) -> impl IntoView {
    let shown = RotationState::new().displayed(catalog);
    view! {
        <div id=STAT_PANEL_ID class="stats-panel">
            {shown
                .into_iter()
                .enumerate()
                .map(|(index, entry)| view! { <StatSlot index=index entry=entry /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SLOT_COUNT;
    use crate::panel::{PART_ATTR, SLOT_ATTR};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn fading_frame_renders_both_titles() {
        let frame = FadeFrame {
            outgoing: "Grants Awarded".into(),
            incoming: Some("Events Launched".into()),
        };
        let html = view! { <FadeTitleView frame=frame /> }.to_html();
        assert!(html.contains("stat-title-current fade-out"));
        assert!(html.contains("Grants Awarded"));
        assert!(html.contains("Events Launched"));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn settled_frame_hides_incoming_span() {
        let frame = FadeTitle::new("Devs Trained").frame();
        let html = view! { <FadeTitleView frame=frame /> }.to_html();
        assert!(html.contains("hidden"));
        assert!(!html.contains("fade-out"));
    }

    #[test]
    fn every_slot_carries_the_parts_the_binding_queries() {
        let html = view! { <RotatingStatPanel catalog=StatCatalog::builtin() /> }.to_html();
        let slots: Vec<&str> = html.split(SLOT_ATTR).skip(1).collect();
        assert_eq!(slots.len(), SLOT_COUNT);
        for (index, markup) in slots.into_iter().enumerate() {
            assert!(markup.starts_with(&format!(r#"="{index}""#)), "slot {index}: {markup}");
            for part in [PART_CURRENT, PART_NEXT, PART_VALUE] {
                let attr = format!(r#"{PART_ATTR}="{part}""#);
                assert!(markup.contains(&attr), "slot {index} lacks {attr}");
            }
        }
    }
}

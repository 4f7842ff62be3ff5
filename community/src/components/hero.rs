use leptos::prelude::*;

use crate::types::{Hub, HubMarker};

/// JSON array of globe markers for every hub with coordinates.
pub fn hub_markers_json(hubs: &[Hub]) -> String {
    let markers: Vec<HubMarker> = hubs.iter().filter_map(Hub::marker).collect();
    // a Vec of plain structs always serialises
    serde_json::to_string(&markers).unwrap_or_else(|_| "[]".into())
}

/// Mount point for the external globe widget.
///
/// The widget reads its markers from the JSON script that follows the
/// container, keyed by `data-markers`.
#[component]
pub fn GlobeMount(
    hubs: &'static [Hub],
    mount_id: &'static str,
    #[prop(default = "globe")] variant: &'static str,
) -> impl IntoView {
    let markers_id = format!("{mount_id}-markers");
    view! {
        <div id=mount_id class=variant data-markers=markers_id.clone() role="img" aria-label="Map of ICP.Hub locations"></div>
        <script type="application/json" id=markers_id>{hub_markers_json(hubs)}</script>
    }
}

/// Page header with the hub globe.
#[component]
pub fn Hero(hubs: &'static [Hub]) -> impl IntoView {
    view! {
        <section class="hero bg-infinite">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "ICP Community"
                        <br />
                        "around the world"
                    </h1>
                    <p class="hero-lead">
                        "Be part of the inspiring collective of Web3 creators, builders, educators, "
                        "and enthusiasts as we set out to explore how the Internet Computer can "
                        "address challenges within today's blockchain ecosystem."
                    </p>
                </div>
                <GlobeMount hubs=hubs mount_id="hero-globe" variant="globe hero-globe" />
            </div>
        </section>
    }
}

//! WASM binding for the community page stat panel.
//!
//! The page is rendered ahead of time by `community-page`. This module is
//! loaded by the bootstrap script at the end of the document and mounts a
//! [`StatPanel`] on the server-rendered markup, using the browser's timers
//! and page visibility API.
//!
//! ```js
//! import init, { mount_stat_panel } from '/pkg/community_wasm.js';
//! await init();
//! const panel = mount_stat_panel('stat-panel');
//! // later, e.g. on client-side navigation away
//! panel.unmount();
//! ```

mod browser;
mod dom;

pub use browser::{BrowserHost, VisibilityListener};
pub use dom::{DomStatView, part_selector};

use community_page::catalog::StatCatalog;
use community_page::panel::StatPanel;
use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// A mounted stat panel. Freeing the handle from JS also unmounts it.
#[wasm_bindgen]
pub struct PanelHandle {
    panel: Option<StatPanel<BrowserHost>>,
}

#[wasm_bindgen]
impl PanelHandle {
    /// Stop rotation and release the timers and visibility listener.
    pub fn unmount(&mut self) {
        self.panel = None;
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.panel.is_some()
    }
}

/// Mount the rotating stat panel on the element with id `root_id`.
#[wasm_bindgen]
pub fn mount_stat_panel(root_id: &str) -> Result<PanelHandle, JsValue> {
    let host = BrowserHost::new()?;
    let root = host
        .document()
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("no stat panel element #{root_id}")))?;
    let view = DomStatView::bind(&root)?;
    let panel = StatPanel::mount(host, *StatCatalog::builtin(), view);
    Ok(PanelHandle { panel: Some(panel) })
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("community-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use community_page::catalog::SLOT_COUNT;
    use community_page::fade::{FADE_MS, FadeFrame};
    use community_page::panel::{PART_CURRENT, PART_NEXT, PART_VALUE, StatView};
    use community_page::rotation::{ROTATION_ORDER, ROTATION_PERIOD_MS};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Same shape as the SSR panel in `community_page::components`.
    fn panel_root(id: &str) -> Element {
        let markup: String = (0..SLOT_COUNT)
            .map(|slot| {
                format!(
                    r#"<div data-stat-slot="{slot}">
                         <span data-stat-part="current"></span>
                         <span data-stat-part="next" hidden></span>
                         <span data-stat-part="value"></span>
                       </div>"#
                )
            })
            .collect();
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_id(id);
        root.set_inner_html(&markup);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn part(root: &Element, slot: usize, part: &str) -> Element {
        root.query_selector(&part_selector(slot, part)).unwrap().unwrap()
    }

    fn is_fading_out(node: &Element) -> bool {
        node.class_list().contains("fade-out")
    }

    #[wasm_bindgen_test]
    fn mount_fills_initial_stats_and_unmounts() {
        let root = panel_root("test-stat-panel");

        let mut handle = mount_stat_panel("test-stat-panel").unwrap();
        let current = part(&root, 1, PART_CURRENT);
        assert_eq!(current.text_content().as_deref(), Some("University Collaborations"));
        assert!(part(&root, 1, PART_NEXT).has_attribute("hidden"));

        handle.unmount();
        assert!(!handle.mounted());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn missing_root_is_an_error() {
        assert!(mount_stat_panel("no-such-panel").is_err());
    }

    #[wasm_bindgen_test]
    fn show_title_toggles_fade_class_and_hidden() {
        let root = panel_root("fade-stat-panel");
        let mut view = DomStatView::bind(&root).unwrap();

        view.show_title(
            0,
            &FadeFrame {
                outgoing: "Active Countries".into(),
                incoming: Some("Grants Awarded".into()),
            },
        );
        let (current, next) = (part(&root, 0, PART_CURRENT), part(&root, 0, PART_NEXT));
        assert!(is_fading_out(&current));
        assert!(!next.has_attribute("hidden"));
        assert_eq!(next.text_content().as_deref(), Some("Grants Awarded"));

        view.show_title(
            0,
            &FadeFrame {
                outgoing: "Grants Awarded".into(),
                incoming: None,
            },
        );
        assert!(!is_fading_out(&current));
        assert!(next.has_attribute("hidden"));
        assert_eq!(current.text_content().as_deref(), Some("Grants Awarded"));
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn tick_crossfades_then_settles() {
        let root = panel_root("tick-stat-panel");
        let mut handle = mount_stat_panel("tick-stat-panel").unwrap();
        let slot = ROTATION_ORDER[0];
        let incoming = StatCatalog::builtin().entry(slot, 1);

        TimeoutFuture::new(ROTATION_PERIOD_MS + 100).await;
        let (current, next) = (part(&root, slot, PART_CURRENT), part(&root, slot, PART_NEXT));
        assert!(is_fading_out(&current));
        assert_eq!(next.text_content().as_deref(), Some(incoming.title));
        let value = part(&root, slot, PART_VALUE);
        assert_eq!(value.text_content(), Some(incoming.display_value()));

        TimeoutFuture::new(FADE_MS + 100).await;
        assert!(!is_fading_out(&current));
        assert!(next.has_attribute("hidden"));
        assert_eq!(current.text_content().as_deref(), Some(incoming.title));

        handle.unmount();
        root.remove();
    }
}

//! # community-page
//!
//! The ICP community landing page: constant content tables, the rotating
//! stat panel state machines, and a Leptos SSR renderer for the static
//! markup.
//!
//! ## Architecture
//!
//! - [`types`] and [`data`] - the content model and its constant tables
//! - [`catalog`], [`rotation`], [`fade`], [`format`] - pure stat panel logic
//! - [`host`] and [`panel`] - the mounted panel, generic over the timers
//!   and visibility API of its environment
//! - [`components`] - Leptos components (feature `render`)
//! - [`config`] - [`PageMeta`](types::PageMeta) loading
//!
//! The browser side lives in the `community-wasm` crate, which implements
//! [`host::Host`] for the real page and mounts a [`panel::StatPanel`] on
//! the markup rendered here.
//!
//! ## Quick Start
//!
//! ```rust
//! use community_page::{render_page, types::PageMeta};
//!
//! let html = render_page(&PageMeta::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod data;
pub mod fade;
pub mod format;
pub mod host;
pub mod panel;
pub mod rotation;
pub mod types;

#[cfg(feature = "render")]
pub mod components;
#[cfg(feature = "render")]
pub mod styles;

#[cfg(feature = "render")]
pub use render::render_page;

#[cfg(feature = "render")]
mod render {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use tracing::info;

    use crate::components::CommunityDocument;
    use crate::types::PageMeta;

    /// Render the complete community page, including `<!DOCTYPE html>`.
    pub fn render_page(meta: &PageMeta) -> String {
        let doc = view! { <CommunityDocument meta=meta.clone() /> };
        let html = doc.to_html();
        info!(title = %meta.title, bytes = html.len(), "rendered community page");

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", html)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::components::hub_markers_json;
        use crate::data::{HIGHLIGHTS, HUBS, NEWSLETTER};
        use crate::types::HubMarker;
        use pretty_assertions::assert_eq;

        fn page() -> String {
            render_page(&PageMeta::default())
        }

        #[test]
        fn renders_document_shell() {
            let html = page();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("<title>ICP Community almost everywhere</title>"));
            assert!(html.contains(
                r#"<meta property="og:title" content="ICP Community almost everywhere""#
            ));
            assert!(html.contains(r#"<meta property="og:description" content="Be part of"#));
            assert!(html.contains(
                r#"<meta property="og:image" content="/img/shareImages/share-community.jpg""#
            ));
            assert!(html.contains("Edit this page"));
        }

        #[test]
        fn renders_every_hub_and_highlight() {
            let html = page();
            for hub in HUBS {
                assert!(html.contains(hub.name), "missing hub {}", hub.name);
            }
            assert!(html.contains("Internet Computer at Korea Blockchain Week 2023"));
            assert!(html.contains("Learn more"));
            assert_eq!(HIGHLIGHTS.len(), 8);
        }

        #[test]
        fn stat_panel_starts_on_first_entries() {
            let html = page();
            assert!(html.contains(r#"id="stat-panel""#));
            assert!(html.contains(r#"data-stat-slot="3""#));
            assert!(html.contains("Active Countries"));
            assert!(html.contains("University Collaborations"));
            assert!(html.contains("Ecosystem Partnerships"));
            assert!(html.contains("Hackathons Held"));
            assert!(!html.contains("Devs Trained"));
            assert!(!html.contains("fade-out\""));
        }

        #[test]
        fn newsletter_posts_email_field() {
            let html = page();
            assert!(html.contains("list-manage.com/subscribe/post?u=33c727489e01ff5b6e1fb6cc6"));
            assert!(html.contains(r#"name="EMAIL""#));
            assert!(html.contains(r#"type="email""#));
            assert!(html.contains(NEWSLETTER.cta_label));
        }

        #[test]
        fn disabled_cta_has_no_link() {
            let html = page();
            assert!(html.contains("Coming soon"));
            assert!(html.contains(r#"aria-disabled="true""#));
        }

        #[test]
        fn hub_markers_round_trip_through_json() {
            let markers: Vec<HubMarker> = serde_json::from_str(&hub_markers_json(HUBS)).unwrap();
            assert_eq!(markers.len(), HUBS.len());
            assert_eq!(markers[0].name, "ICP.HUB India");
            assert_eq!((markers[0].lat, markers[0].lng), (20.5937, 78.9629));
            assert!(page().contains(r#"id="hubs-globe-markers""#));
        }

        #[test]
        fn wasm_bootstrap_is_optional() {
            assert!(page().contains("mount_stat_panel('stat-panel')"));

            let meta = PageMeta {
                wasm_glue: None,
                edit_url: None,
                ..PageMeta::default()
            };
            let html = render_page(&meta);
            assert!(!html.contains("mount_stat_panel"));
            assert!(!html.contains("Edit this page"));
        }
    }
}

//! Leptos components for the community page.
//!
//! Every component here is static: it maps the constant tables in
//! [`crate::data`] to markup. The stat panel is rendered in its initial
//! rotation state and carries `data-stat-*` hooks that the
//! `community-wasm` binding drives after load.
//!
//! # Component Hierarchy
//!
//! ```text
//! CommunityDocument
//! ├── Hero
//! │   └── GlobeMount
//! ├── RotatingStatPanel
//! │   └── FadeTitleView (per slot)
//! ├── InfoCardRow: Explore community initiatives
//! ├── InfoCardRow: Build the community
//! ├── HighlightsSection
//! │   ├── FeatureBlockView (ICP Asia Alliance)
//! │   └── HighlightCard (per event)
//! ├── HubsSection
//! │   ├── GlobeMount
//! │   └── HubCard (per hub)
//! ├── EducationSection
//! │   └── CourseCardView (per course)
//! ├── GalleryCta
//! └── NewsletterForm
//! ```

mod cards;
mod document;
mod education;
mod hero;
mod hubs;
mod newsletter;
mod stats;

pub use cards::{CtaLink, InfoCardRow, InfoCardView, SectionHeading};
pub use document::CommunityDocument;
pub use education::{CourseCardView, EducationSection};
pub use hero::{GlobeMount, Hero, hub_markers_json};
pub use hubs::{FeatureBlockView, HighlightCard, HighlightsSection, HubCard, HubsSection};
pub use newsletter::{GalleryCta, NewsletterForm};
pub use stats::{FadeTitleView, RotatingStatPanel, STAT_PANEL_ID};

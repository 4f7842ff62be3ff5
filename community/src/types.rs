//! Data model for the community page.
//!
//! Everything here describes constant content: the tables in
//! [`crate::data`] are built from these types at compile time and never
//! mutated. The only runtime-configurable piece is [`PageMeta`], which is
//! loaded by [`crate::config`].
//!
//! # Example
//!
//! ```rust
//! use community_page::types::StatEntry;
//!
//! let entry = StatEntry::new("New Users Accounts", "25000");
//! assert_eq!(entry.display_value(), "25000");
//! ```

use serde::{Deserialize, Serialize};

use crate::format::format_stat;

/// A single rotating statistic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// Label shown above the number
    pub title: &'static str,
    /// Decimal digits, e.g. `"2000"`
    pub value: &'static str,
    /// Shown when `value` does not parse
    pub fallback_value: &'static str,
}

impl StatEntry {
    /// Entry with an empty fallback, the common case.
    pub const fn new(title: &'static str, value: &'static str) -> Self {
        Self {
            title,
            value,
            fallback_value: "",
        }
    }

    /// Parsed value, `None` when `value` is not a non-negative integer.
    pub fn numeric_value(&self) -> Option<u64> {
        self.value.trim().parse().ok()
    }

    /// Formatted number, or the fallback text if the value is not numeric.
    pub fn display_value(&self) -> String {
        match self.numeric_value() {
            Some(value) => format_stat(value),
            None => self.fallback_value.to_string(),
        }
    }
}

/// One category of rotating statistics.
pub type StatGroup = &'static [StatEntry];

/// Regional community chapter, or (without coordinates) a highlight card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hub {
    /// Display name, e.g. "ICP.HUB India"
    pub name: &'static str,
    /// Region label; empty for highlight cards
    pub location: &'static str,
    /// Card body text
    pub description: &'static str,
    /// Image path relative to the site root
    pub image: &'static str,
    /// Hub website or social page
    pub link: &'static str,
    /// `(latitude, longitude)` in degrees
    pub coordinates: Option<(f64, f64)>,
}

/// Globe marker derived from a [`Hub`] with coordinates.
///
/// Serialised into the page for the external globe widget to pick up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HubMarker {
    /// Hub name shown in the marker tooltip
    pub name: String,
    /// Region label
    pub location: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Hub {
    /// Marker for the globe, `None` for hubs without coordinates.
    pub fn marker(&self) -> Option<HubMarker> {
        self.coordinates.map(|(lat, lng)| HubMarker {
            name: self.name.to_string(),
            location: self.location.to_string(),
            lat,
            lng,
        })
    }
}

/// Icon shown after a call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkArrow {
    /// In-page anchor
    Down,
    /// Same-site page
    Right,
    /// External site
    UpRight,
}

/// Call-to-action link. `href: None` renders as a disabled label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    /// Link text
    pub label: &'static str,
    /// Target URL or in-page anchor
    pub href: Option<&'static str>,
    /// Trailing icon
    pub arrow: LinkArrow,
}

/// Icon card used by the "Explore" and "Build" rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    /// Icon image path
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// Card text
    pub body: &'static str,
    /// Call to action at the bottom of the card
    pub cta: Link,
}

/// Educational resource card. The title is split on line breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseCard {
    /// Heading, one entry per rendered line
    pub title_lines: &'static [&'static str],
    /// Course description
    pub body: &'static str,
    /// Link to the course
    pub cta: Link,
}

/// Large feature block ("ICP Asia Alliance").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureBlock {
    /// Block heading
    pub title: &'static str,
    /// Lead paragraph
    pub lead: &'static str,
    /// Illustration path
    pub image: &'static str,
    /// Call to action under the lead
    pub cta: Link,
}

/// A newsletter form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    /// Form field name posted to the list service
    pub name: &'static str,
    /// Placeholder text
    pub placeholder: &'static str,
    /// HTML input type
    pub kind: &'static str,
    /// Whether the browser requires a value
    pub required: bool,
}

/// Newsletter signup block. Submission is a plain form POST.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Newsletter {
    /// Form action URL
    pub post_url: &'static str,
    /// Inputs in display order
    pub fields: &'static [FormField],
    /// Submit button label
    pub cta_label: &'static str,
    /// Block heading
    pub heading: &'static str,
    /// Text under the heading
    pub subheading: &'static str,
    /// Decorative image path
    pub decoration: &'static str,
}

/// Document-level metadata handed to the layout.
///
/// Every field has a default matching the published page, so a config
/// file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// Document `<title>` and Open Graph title
    pub title: String,
    /// Meta and Open Graph description
    pub description: String,
    /// Open Graph share image
    pub share_image: String,
    /// "Edit this page" link, omitted when `None`
    pub edit_url: Option<String>,
    /// URL of the `community-wasm` JS glue, omitted when `None`
    pub wasm_glue: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "ICP Community almost everywhere".into(),
            description: "Be part of the inspiring collective of Web3 creators, builders, educators, \
                          and enthusiasts as we set out to explore how the Internet Computer can \
                          address challenges within today's blockchain ecosystem."
                .into(),
            share_image: "/img/shareImages/share-community.jpg".into(),
            edit_url: Some(
                "https://github.com/dfinity/portal/edit/master/src/pages/community.tsx".into(),
            ),
            wasm_glue: Some("/pkg/community_wasm.js".into()),
        }
    }
}

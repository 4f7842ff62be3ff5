//! Hub directory, highlight cards and the alliance feature block.

use leptos::prelude::*;

use super::{CtaLink, GlobeMount, SectionHeading};
use crate::data::TELEGRAM_URL;
use crate::types::{FeatureBlock, Hub, Link, LinkArrow};

/// One regional hub.
#[component]
pub fn HubCard(hub: &'static Hub) -> impl IntoView {
    view! {
        <a class="hub-card card-white" href=hub.link target="_blank" rel="noopener">
            <img src=hub.image alt=hub.name loading="lazy" class="hub-card-image" />
            <div class="hub-card-body">
                <h3 class="hub-card-name">{hub.name}</h3>
                <p class="hub-card-location">{hub.location}</p>
                <p class="hub-card-description">{hub.description}</p>
            </div>
        </a>
    }
}

/// Event or launch card; same record shape as a hub, without a location.
#[component]
pub fn HighlightCard(hub: &'static Hub) -> impl IntoView {
    let more = Link {
        label: "Learn more",
        href: Some(hub.link),
        arrow: LinkArrow::UpRight,
    };
    view! {
        <article class="highlight-card">
            <img src=hub.image alt=hub.name loading="lazy" class="highlight-card-image" />
            <h3 class="highlight-card-name">{hub.name}</h3>
            <p class="highlight-card-description">{hub.description}</p>
            <p class="highlight-card-cta">
                <CtaLink link=more variant="button-outline button-small" />
            </p>
        </article>
    }
}

/// Large image block with a lead paragraph.
#[component]
pub fn FeatureBlockView(block: FeatureBlock) -> impl IntoView {
    view! {
        <div class="feature-block">
            <div class="feature-block-image">
                <img src=block.image alt="" loading="lazy" />
            </div>
            <div class="feature-block-content">
                <h2 class="gradient-text">{block.title}</h2>
                <p class="feature-block-lead">{block.lead}</p>
                <p>
                    <CtaLink link=block.cta />
                </p>
            </div>
        </div>
    }
}

/// "The best of ICP.Hubs": the alliance block followed by highlight cards.
#[component]
pub fn HighlightsSection(alliance: FeatureBlock, highlights: &'static [Hub]) -> impl IntoView {
    view! {
        <section class="highlights">
            <SectionHeading title="The best of ICP.Hubs" />
            <FeatureBlockView block=alliance />
            <div class="highlight-grid">
                {highlights
                    .iter()
                    .map(|hub| view! { <HighlightCard hub=hub /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// The `#hubs` section: hub grid, Telegram link and globe.
#[component]
pub fn HubsSection(hubs: &'static [Hub]) -> impl IntoView {
    view! {
        <section id="hubs" class="hubs">
            <div class="hubs-intro">
                <img src="/img/community/icp-hubs-logo.svg" alt="Official ICP.Hubs" class="hubs-logo" />
                <p class="hubs-lead">
                    "ICP communities are forming and taking shape in various regions around the globe, "
                    "bringing entrepreneurs, developers, venture capitalists, educators, enthusiasts "
                    "and experts under one regional roof."
                </p>
                <p>
                    <a class="link-white" href=TELEGRAM_URL>
                        "Join the official ICP Telegram Space"
                    </a>
                </p>
                <GlobeMount hubs=hubs mount_id="hubs-globe" />
            </div>
            <div class="hub-grid">
                {hubs.iter().map(|hub| view! { <HubCard hub=hub /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

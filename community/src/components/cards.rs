//! Shared card and link building blocks.

use leptos::prelude::*;

use crate::types::{InfoCard, Link, LinkArrow};

fn arrow_glyph(arrow: LinkArrow) -> &'static str {
    match arrow {
        LinkArrow::Down => "↓",
        LinkArrow::Right => "→",
        LinkArrow::UpRight => "↗",
    }
}

/// Call-to-action link; a link without a target renders disabled.
#[component]
pub fn CtaLink(
    link: Link,
    #[prop(default = "link-primary")] variant: &'static str,
) -> impl IntoView {
    let glyph = arrow_glyph(link.arrow);
    match link.href {
        Some(href) => {
            let external = href.starts_with("http");
            view! {
                <a
                    class=format!("{variant} link-with-icon")
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener")
                >
                    {if link.arrow == LinkArrow::Right {
                        view! { <span class="link-arrow">{glyph}</span>" "{link.label} }.into_any()
                    } else {
                        view! { {link.label}" "<span class="link-arrow">{glyph}</span> }.into_any()
                    }}
                </a>
            }
            .into_any()
        }
        None => view! {
            <span class="link-primary-disabled link-with-icon" aria-disabled="true">
                {link.label}
            </span>
        }
        .into_any(),
    }
}

/// Gradient section title.
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="text-gradient">{title}</h2>
        </div>
    }
}

/// Icon card with a call to action.
#[component]
pub fn InfoCardView(card: &'static InfoCard) -> impl IntoView {
    view! {
        <article class="card-white info-card">
            <img src=card.icon alt="" loading="lazy" class="info-card-icon" />
            <h3 class="info-card-title">{card.title}</h3>
            <p class="info-card-body">{card.body}</p>
            <p class="info-card-cta">
                <CtaLink link=card.cta />
            </p>
        </article>
    }
}

/// Heading plus a row of icon cards.
#[component]
pub fn InfoCardRow(title: &'static str, cards: &'static [InfoCard]) -> impl IntoView {
    view! {
        <section class="card-row-section">
            <SectionHeading title=title />
            <div class="card-row">
                {cards.iter().map(|card| view! { <InfoCardView card=card /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

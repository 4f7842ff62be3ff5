//! Closing sections: the gallery call-to-action and the newsletter form.

use leptos::prelude::*;

use crate::data::TELEGRAM_URL;
use crate::types::Newsletter;

/// Copy shown beside the photo gallery. The gallery itself is mounted by
/// the host site into `#community-gallery`.
#[component]
pub fn GalleryCta() -> impl IntoView {
    view! {
        <section class="gallery bg-infinite">
            <div id="community-gallery" class="gallery-mount"></div>
            <div class="gallery-copy">
                <h2>"Join, collaborate and connect"</h2>
                <p>
                    "The ICP community is currently active in around 30 countries and collaborates "
                    "with up to 50 well-known crypto organizations and 32 universities. "
                    "Haven't joined yet? What are you waiting for?"
                </p>
                <p>
                    <a class="link-white" href=TELEGRAM_URL>
                        "Join the official ICP Telegram Space"
                    </a>
                </p>
            </div>
        </section>
    }
}

/// Signup form posting straight to the list provider.
#[component]
pub fn NewsletterForm(newsletter: Newsletter) -> impl IntoView {
    view! {
        <section class="newsletter">
            <div class="newsletter-copy">
                <h2>
                    {newsletter.heading}
                    <br />
                    <span class="text-white-60">{newsletter.subheading}</span>
                </h2>
                <form action=newsletter.post_url method="post" target="_blank" class="newsletter-form">
                    {newsletter
                        .fields
                        .iter()
                        .map(|field| {
                            view! {
                                <input
                                    type=field.kind
                                    name=field.name
                                    placeholder=field.placeholder
                                    required=field.required
                                    class="newsletter-input"
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button type="submit" class="button-white">{newsletter.cta_label}</button>
                </form>
            </div>
            <img src=newsletter.decoration alt="" loading="lazy" class="newsletter-decoration" />
        </section>
    }
}

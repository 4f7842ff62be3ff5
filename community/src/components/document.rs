//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{
    EducationSection, GalleryCta, Hero, HighlightsSection, HubsSection, InfoCardRow,
    NewsletterForm, RotatingStatPanel, STAT_PANEL_ID,
};
use crate::catalog::StatCatalog;
use crate::data::{ALLIANCE, BUILD_CARDS, EDUCATION, HIGHLIGHTS, HUBS, INITIATIVES, NEWSLETTER};
use crate::styles::{CSP, page_css};
use crate::types::PageMeta;

/// The complete HTML document for the community page
#[component]
pub fn CommunityDocument(meta: PageMeta) -> impl IntoView {
    let PageMeta {
        title,
        description,
        share_image,
        edit_url,
        wasm_glue,
    } = meta;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title.clone()}</title>
                <meta name="description" content=description.clone() />
                {og_meta("og:title", title)}
                {og_meta("og:description", description)}
                {og_meta("og:image", share_image.clone())}
                <meta name="twitter:image" content=share_image />
                <style>{page_css()}</style>
            </head>
            <body>
                <main class="community">
                    <Hero hubs=HUBS />
                    <div class="bg-page stats-wrap">
                        <RotatingStatPanel catalog=StatCatalog::builtin() />
                    </div>
                    <InfoCardRow title="Explore community initiatives" cards=INITIATIVES />
                    <InfoCardRow title="Build the community" cards=BUILD_CARDS />
                    <HighlightsSection alliance=ALLIANCE highlights=HIGHLIGHTS />
                    <HubsSection hubs=HUBS />
                    <EducationSection courses=EDUCATION />
                    <GalleryCta />
                    <NewsletterForm newsletter=NEWSLETTER />
                </main>
                {edit_url.map(|url| view! {
                    <footer class="edit-page">
                        <a href=url target="_blank" rel="noopener">"Edit this page"</a>
                    </footer>
                })}
                {wasm_glue.map(|glue| view! { <script type="module">{panel_bootstrap(&glue)}</script> })}
            </body>
        </html>
    }
}

/// `<meta property=...>`; `property` has no typed attribute in the view macro.
fn og_meta(property: &'static str, content: String) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}

/// Module script that loads `community-wasm` and mounts the stat panel.
fn panel_bootstrap(glue: &str) -> String {
    format!(
        "import init, {{ mount_stat_panel }} from '{glue}';\n\
         await init();\n\
         window.communityStatPanel = mount_stat_panel('{STAT_PANEL_ID}');\n"
    )
}

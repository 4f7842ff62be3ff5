//! Stylesheet shipped with the page.
//!
//! Site-wide styling comes from the host layout. This only covers what the
//! stat panel's crossfade and the globe mount need to work on their own.

use crate::fade::FADE_MS;

/// Content-Security-Policy for the rendered document.
///
/// `wasm-unsafe-eval` is required to instantiate the stat panel module.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; \
                       style-src 'self' 'unsafe-inline'; \
                       script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
                       form-action https://dfinity.us16.list-manage.com";

/// Crossfade and layout rules for the stat panel.
pub fn page_css() -> String {
    format!(
        r#"
.stats-panel {{ display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 24px; }}
.stat {{ display: flex; flex-direction: column; align-items: center; }}
.stat-title {{ display: inline-grid; text-align: center; white-space: nowrap; }}
.stat-title span {{ grid-column: 1; grid-row: 1; }}
.stat-title-current {{ opacity: 1; transition: none; }}
.stat-title-current.fade-out {{ opacity: 0; transition: opacity {FADE_MS}ms; }}
.stat-fade-in {{ animation: stat-fade-in {FADE_MS}ms ease-in both; }}
@keyframes stat-fade-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}
.globe {{ aspect-ratio: 1 / 1; }}
@media (max-width: 767px) {{ .stats-panel {{ grid-template-columns: repeat(2, minmax(0, 1fr)); }} }}
"#
    )
}

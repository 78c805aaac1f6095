//! HTTP API handlers.

mod inspect;
mod meta;

pub use inspect::{
    check_domain_handler, check_sitemap_handler, check_url_handler, fetch_sitemap_urls_handler,
};
pub use meta::{render_title_handler, root_handler};

//! Server-rendered HTML for the storefront.
//!
//! Each submodule renders one section of a page into a `String`; `layout`
//! wraps sections into a full document. Everything interpolated from the CMS
//! goes through [`escape`].

mod alert;
mod assets;
mod card;
mod coupons;
mod home;
mod layout;
mod product;
mod rich_text;

pub use alert::{error_alert, error_page};
pub use assets::{SCRIPT, STYLESHEET};
pub use card::product_card;
pub use coupons::{coupon_list, coupons_error};
pub use home::{feed_error_fragment, feed_fragment, home_page, HomeView};
pub use layout::{document, Head, SocialImage};
pub use product::{product_not_found_page, product_page};
pub use rich_text::render_rich_text;

use vitrine_cms::ProductFilter;

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `href` unless it would run script; `#` otherwise.
pub(crate) fn safe_href(href: Option<&str>) -> &str {
    match href {
        Some(href) if !href.trim_start().to_ascii_lowercase().starts_with("javascript:") => href,
        _ => "#",
    }
}

/// Query string for a listing: `category` always, `search` only when set,
/// `page` only past the first.
pub(crate) fn listing_query(filter: &ProductFilter, page: u32) -> String {
    let mut query = format!(
        "category={}",
        urlencoding::encode(filter.category.as_selection())
    );
    if let Some(search) = &filter.search {
        query.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if page > 1 {
        query.push_str(&format!("&page={page}"));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn script_hrefs_are_neutralized() {
        assert_eq!(safe_href(Some("https://loja.example.com")), "https://loja.example.com");
        assert_eq!(safe_href(Some("  JavaScript:alert(1)")), "#");
        assert_eq!(safe_href(None), "#");
    }

    #[test]
    fn listing_query_encodes_parts() {
        assert_eq!(listing_query(&ProductFilter::all(), 1), "category=Todas");
        assert_eq!(
            listing_query(&ProductFilter::new("Eletrônicos", "fone bt"), 3),
            "category=Eletr%C3%B4nicos&search=fone%20bt&page=3"
        );
    }
}

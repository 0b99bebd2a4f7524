//! Catalog records and their CMS wire shapes.

use serde::{Deserialize, Serialize};

use crate::rich_text::RichText;

/// A product as shown on cards and detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_specs: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_links: Option<Vec<AffiliateLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<RichText>,
}

impl Product {
    /// Cover image when present, otherwise the card image.
    pub fn hero_image(&self) -> &str {
        self.cover_image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.image_url)
    }

    pub fn affiliate_links(&self) -> &[AffiliateLink] {
        self.affiliate_links.as_deref().unwrap_or_default()
    }

    pub fn long_description_text(&self) -> Option<String> {
        self.long_description
            .as_ref()
            .map(RichText::plain_text)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateLink {
    pub name: String,
    pub url: String,
}

/// One page of a filtered listing plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_products: usize,
}

impl ProductPage {
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            total_products: 0,
        }
    }
}

impl vitrine_query::Page for ProductPage {
    fn item_count(&self) -> usize {
        self.products.len()
    }

    fn total(&self) -> usize {
        self.total_products
    }
}

/// A discount code listed in the coupon dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    /// `DD/MM/YYYY`, as typed in the CMS.
    pub expiration: String,
    #[serde(default)]
    pub label: String,
}

// --- wire shapes -----------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct Asset {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RichTextField {
    pub raw: RichText,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HygraphProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<Asset>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub cover_image: Option<Asset>,
    #[serde(default)]
    pub technical_specs: Option<RichTextField>,
    #[serde(default)]
    pub affiliate_links: Option<Vec<AffiliateLink>>,
    #[serde(default)]
    pub long_description: Option<RichTextField>,
}

impl From<HygraphProduct> for Product {
    fn from(p: HygraphProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description.unwrap_or_default(),
            image_url: p.image_url.map(|a| a.url).unwrap_or_default(),
            category: p.category.map(|c| c.name).unwrap_or_default(),
            cover_image: p.cover_image.map(|a| a.url),
            technical_specs: p.technical_specs.map(|f| f.raw),
            affiliate_links: p.affiliate_links,
            long_description: p.long_description.map(|f| f.raw),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Aggregate {
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection {
    pub aggregate: Aggregate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsResponse {
    pub products: Vec<HygraphProduct>,
    pub products_connection: Connection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductResponse {
    pub product: Option<HygraphProduct>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryNode {
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub products: Vec<CategoryNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CouponsResponse {
    pub coupons: Vec<Coupon>,
}

//! GraphQL documents sent to the CMS.

use serde_json::{json, Value};

use crate::filter::ProductFilter;

/// Page size used when walking the whole catalog for category names.
pub(crate) const CATEGORY_SCAN_PAGE: u32 = 100;

const PRODUCT_FIELDS: &str = r#"
fragment ProductFields on Product {
  id
  name
  description
  imageUrl { url }
  category { name }
  coverImage { url }
  technicalSpecs { raw }
  affiliateLinks { name url }
  longDescription { raw }
}
"#;

pub(crate) fn products_query() -> String {
    format!(
        r#"query GetProducts($first: Int!, $skip: Int!, $where: ProductWhereInput) {{
  products(first: $first, skip: $skip, where: $where, orderBy: createdAt_DESC) {{
    ...ProductFields
  }}
  productsConnection(where: $where) {{
    aggregate {{ count }}
  }}
}}
{PRODUCT_FIELDS}"#
    )
}

pub(crate) fn product_by_id_query() -> String {
    format!(
        r#"query GetProductById($id: ID!) {{
  product(where: {{ id: $id }}) {{
    ...ProductFields
  }}
}}
{PRODUCT_FIELDS}"#
    )
}

pub(crate) const CATEGORIES_QUERY: &str = r#"query GetCategories($first: Int!, $skip: Int!) {
  products(first: $first, skip: $skip, orderBy: createdAt_DESC) {
    category { name }
  }
}"#;

pub(crate) const COUPONS_QUERY: &str = r#"query GetCoupons {
  coupons(first: 100, orderBy: createdAt_DESC) {
    id
    code
    expiration
    label
  }
}"#;

/// `ProductWhereInput` for a filter; `null` when nothing is filtered.
///
/// Rich-text fields cannot be matched with `_contains`, so remote search
/// covers the name and the short description.
pub(crate) fn where_input(filter: &ProductFilter) -> Value {
    let mut clauses = Vec::new();

    if let Some(category) = filter.category.name() {
        clauses.push(json!({ "category": { "name": category } }));
    }

    if let Some(term) = &filter.search {
        clauses.push(json!({
            "OR": [
                { "name_contains": term },
                { "description_contains": term }
            ]
        }));
    }

    match clauses.len() {
        0 => Value::Null,
        1 => clauses.remove(0),
        _ => json!({ "AND": clauses }),
    }
}

//! Catalog fixtures shared by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use vitrine_cms::rich_text::{Element, ElementKind, Node, Text};
use vitrine_cms::{
    AffiliateLink, CatalogSource, CmsError, Coupon, FixtureCatalog, Product, ProductPage,
    ProductQuery, RichText, TransportError,
};

const CATEGORIES: [&str; 3] = ["Eletrônicos", "Livros", "Casa"];

/// `prod-1..=count`, categories cycling so that `prod-1` is a book.
/// `prod-1` also carries the detail page fields.
pub(crate) fn sample_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let mut product = Product {
                id: format!("prod-{i}"),
                name: format!("Produto {i}"),
                description: format!("Descrição breve do Produto {i}."),
                image_url: format!("https://picsum.photos/seed/{i}/300/200"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                cover_image: None,
                technical_specs: None,
                affiliate_links: None,
                long_description: None,
            };
            if i == 1 {
                product.cover_image = Some("https://cdn.example.com/capa-1.jpg".to_string());
                product.technical_specs = Some(RichText {
                    children: vec![Node::Element(Element::new(
                        ElementKind::Paragraph,
                        vec![
                            Node::Text(Text {
                                text: "Páginas:".to_string(),
                                bold: true,
                                ..Default::default()
                            }),
                            Node::Text(Text::plain(" 320")),
                        ],
                    ))],
                });
                product.long_description =
                    Some(RichText::from_plain("Um romance sobre <fronteiras>."));
                product.affiliate_links = Some(vec![AffiliateLink {
                    name: "Amazon".to_string(),
                    url: "https://amazon.example.com/produto-1".to_string(),
                }]);
            }
            product
        })
        .collect()
}

pub(crate) fn sample_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            id: "c1".to_string(),
            code: "ONTECH10".to_string(),
            expiration: "31/12/2999".to_string(),
            label: "10% em eletrônicos".to_string(),
        },
        Coupon {
            id: "c2".to_string(),
            code: "VELHO5".to_string(),
            expiration: "01/01/2020".to_string(),
            label: "5% em livros".to_string(),
        },
    ]
}

pub(crate) fn sample_catalog(count: usize) -> FixtureCatalog {
    FixtureCatalog::new(sample_products(count), sample_coupons())
}

/// Counts calls per operation and fails them on demand.
pub(crate) struct CountingSource {
    inner: FixtureCatalog,
    pub products: AtomicUsize,
    pub product: AtomicUsize,
    pub categories: AtomicUsize,
    pub coupons: AtomicUsize,
    pub fail: AtomicBool,
}

impl CountingSource {
    pub fn new(inner: FixtureCatalog) -> Self {
        Self {
            inner,
            products: AtomicUsize::new(0),
            product: AtomicUsize::new(0),
            categories: AtomicUsize::new(0),
            coupons: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    fn check(&self, counter: &AtomicUsize, what: &str) -> Result<(), CmsError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(CmsError::Fetch {
                message: format!("Não foi possível carregar {what} do Hygraph."),
                source: TransportError::GraphQl(vec!["upstream unavailable".to_string()]),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn products(&self, query: &ProductQuery) -> Result<ProductPage, CmsError> {
        self.check(&self.products, "os produtos")?;
        self.inner.products(query).await
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, CmsError> {
        self.check(&self.product, &format!("o produto {id}"))?;
        self.inner.product(id).await
    }

    async fn categories(&self) -> Result<Vec<String>, CmsError> {
        self.check(&self.categories, "as categorias")?;
        self.inner.categories().await
    }

    async fn coupons(&self) -> Result<Vec<Coupon>, CmsError> {
        self.check(&self.coupons, "os cupons")?;
        self.inner.coupons().await
    }
}

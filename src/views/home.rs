//! Home page: filters, product grid and the infinite-scroll status block.

use vitrine_cms::{ProductFilter, ProductPage};
use vitrine_query::InfiniteData;

use super::{error_alert, escape, listing_query, product_card};
use crate::catalog::{reachable_next_page, FeedPage};

pub struct HomeView<'a> {
    pub categories: &'a [String],
    pub filter: &'a ProductFilter,
    pub feed: &'a InfiniteData<ProductPage>,
    pub debounce_ms: u64,
}

pub fn home_page(view: &HomeView<'_>) -> String {
    let filter = view.filter;
    let selected = filter.category.as_selection();

    let cards: String = view
        .feed
        .pages
        .iter()
        .flat_map(|page| page.products.iter())
        .map(product_card)
        .collect();

    let (next_page, truncated) = reachable_next_page(
        view.feed.next_page_param().filter(|_| view.feed.has_next_page()),
    );
    let status = feed_status(
        filter,
        view.feed.item_count() > 0,
        view.feed.total(),
        next_page,
        truncated,
    );

    format!(
        r#"<main class="container page">
    <h1 class="page-title">Nossos Produtos</h1>
    <section id="catalog" data-category="{category}" data-search="{search}" data-debounce-ms="{debounce}">
        <div class="card filters">
            <h2 class="filters-title">Filtrar Produtos</h2>
            <div class="filters-row">
                <div class="filters-categories">
                    <p class="filters-label">Por Categoria:</p>
                    <div class="category-buttons">{buttons}</div>
                </div>
                <form class="filters-search" method="get" action="/">
                    <label class="filters-label" for="search">Busca Específica:</label>
                    <input type="hidden" name="category" value="{category}">
                    <input id="search" class="input" type="search" name="search" placeholder="Buscar por nome ou descrição..." value="{search}" autocomplete="off">
                </form>
            </div>
        </div>
        <div id="product-grid" class="product-grid">{cards}</div>
        {status}
    </section>
</main>"#,
        category = escape(selected),
        search = escape(filter.search_term()),
        debounce = view.debounce_ms,
        buttons = category_buttons(view.categories, filter),
    )
}

/// Cards for one requested page plus the status block that replaces the
/// current one.
pub fn feed_fragment(filter: &ProductFilter, page: &FeedPage) -> String {
    let cards: String = page.products.iter().map(product_card).collect();
    let status = feed_status(
        filter,
        page.page > 1 || !page.products.is_empty(),
        page.total_products,
        page.next_page,
        page.truncated,
    );
    format!(
        r#"<div data-role="cards">{cards}</div>
{status}"#
    )
}

/// Empty cards and an alert in place of the status block.
pub fn feed_error_fragment(message: &str) -> String {
    format!(
        r#"<div data-role="cards"></div>
<div id="feed-status" class="feed-status">
        {}
    </div>"#,
        error_alert(
            "Erro ao carregar dados",
            "Não foi possível carregar os produtos.",
            message
        )
    )
}

fn category_buttons(categories: &[String], filter: &ProductFilter) -> String {
    categories
        .iter()
        .map(|category| {
            let target = ProductFilter::new(category, filter.search_term());
            let variant = if target.category == filter.category {
                "active"
            } else {
                "outline"
            };
            format!(
                r#"<a class="btn {variant}" href="/?{href}" data-category="{name}">{name}</a>"#,
                href = listing_query(&target, 1),
                name = escape(category),
            )
        })
        .collect()
}

/// Sentinel while more pages exist, then the end or empty message.
fn feed_status(
    filter: &ProductFilter,
    has_products: bool,
    total: usize,
    next_page: Option<u32>,
    truncated: bool,
) -> String {
    let body = match next_page {
        Some(page) => format!(
            r#"<div id="feed-sentinel" class="sentinel" data-next-page="{page}">
            <a class="btn" href="/?{href}" data-load-more>Carregar mais produtos</a>
            <span class="loading-more"><span class="spinner" aria-hidden="true"></span> Carregando mais...</span>
        </div>"#,
            href = listing_query(filter, page),
        ),
        None if truncated => format!(
            r#"<p class="feed-end muted center">Você chegou ao fim da listagem de {total} produtos. Use a busca ou as categorias para encontrar o restante.</p>"#
        ),
        None if has_products => {
            format!(r#"<p class="feed-end muted center">Você viu todos os {total} produtos!</p>"#)
        }
        None => r#"<p class="feed-empty muted center">Nenhum produto encontrado com os filtros aplicados.</p>"#
            .to_string(),
    };

    format!(
        r#"<div id="feed-status" class="feed-status">
        {body}
    </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_products;

    fn page(products: usize, total: usize) -> ProductPage {
        ProductPage {
            products: sample_products(products),
            total_products: total,
        }
    }

    fn categories() -> Vec<String> {
        ["Todas", "Livros", "Casa"].map(String::from).to_vec()
    }

    #[test]
    fn first_page_with_more_shows_sentinel() {
        let filter = ProductFilter::new("Livros", "");
        let feed = InfiniteData::first(page(12, 30));
        let html = home_page(&HomeView {
            categories: &categories(),
            filter: &filter,
            feed: &feed,
            debounce_ms: 500,
        });

        assert_eq!(html.matches(r#"class="card product-card""#).count(), 12);
        assert!(html.contains(r#"data-next-page="2""#));
        assert!(html.contains(r#"href="/?category=Livros&page=2""#));
        assert!(html.contains("Carregar mais produtos"));
        assert!(html.contains(r#"<a class="btn active" href="/?category=Livros" data-category="Livros">Livros</a>"#));
        assert!(html.contains(r#"<a class="btn outline" href="/?category=Todas" data-category="Todas">Todas</a>"#));
        assert!(html.contains(r#"data-debounce-ms="500""#));
    }

    #[test]
    fn exhausted_feed_shows_total() {
        let filter = ProductFilter::all();
        let feed = InfiniteData::first(page(5, 5));
        let html = home_page(&HomeView {
            categories: &categories(),
            filter: &filter,
            feed: &feed,
            debounce_ms: 500,
        });
        assert!(!html.contains("feed-sentinel"));
        assert!(html.contains("Você viu todos os 5 produtos!"));
    }

    #[test]
    fn empty_feed_shows_no_results() {
        let filter = ProductFilter::new("Todas", "xyz");
        let feed = InfiniteData::first(page(0, 0));
        let html = home_page(&HomeView {
            categories: &categories(),
            filter: &filter,
            feed: &feed,
            debounce_ms: 500,
        });
        assert!(html.contains("Nenhum produto encontrado com os filtros aplicados."));
        assert!(html.contains(r#"value="xyz""#));
        // category links keep the search term
        assert!(html.contains(r#"href="/?category=Casa&search=xyz""#));
    }

    #[test]
    fn fragment_for_last_page() {
        let filter = ProductFilter::all();
        let last = FeedPage {
            page: 3,
            products: sample_products(6),
            total_products: 30,
            next_page: None,
            truncated: false,
        };
        let html = feed_fragment(&filter, &last);
        assert!(html.starts_with(r#"<div data-role="cards">"#));
        assert!(html.contains("Você viu todos os 30 produtos!"));

        let past_end = FeedPage {
            page: 4,
            products: Vec::new(),
            total_products: 30,
            next_page: None,
            truncated: false,
        };
        assert!(feed_fragment(&filter, &past_end).contains("Você viu todos os 30 produtos!"));
    }

    #[test]
    fn truncated_fragment_ends_without_sentinel() {
        let filter = ProductFilter::all();
        let deepest = FeedPage {
            page: 50,
            products: sample_products(12),
            total_products: 700,
            next_page: None,
            truncated: true,
        };
        let html = feed_fragment(&filter, &deepest);
        assert!(!html.contains("data-next-page"));
        assert!(html.contains("Você chegou ao fim da listagem de 700 produtos."));
        assert!(!html.contains("Você viu todos"));
    }
}

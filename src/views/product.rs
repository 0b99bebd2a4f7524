//! Product detail page.

use vitrine_cms::Product;
use vitrine_kernel::settings::StoreSettings;

use super::{document, escape, render_rich_text, safe_href, Head};

pub fn product_page(store: &StoreSettings, product: &Product) -> String {
    let name = escape(&product.name);
    let hero = product.hero_image();

    let specs = product
        .technical_specs
        .as_ref()
        .filter(|specs| !specs.is_empty())
        .map(|specs| {
            format!(
                r#"<div class="card specs">
                <h2 class="section-title">Ficha Técnica</h2>
                {}
            </div>"#,
                render_rich_text(specs)
            )
        })
        .unwrap_or_default();

    let description = match product.long_description.as_ref().filter(|d| !d.is_empty()) {
        Some(long) => render_rich_text(long),
        None => format!(r#"<p class="lead">{}</p>"#, escape(&product.description)),
    };

    let links = product.affiliate_links();
    let buy = if links.is_empty() {
        String::new()
    } else {
        let buttons: String = links
            .iter()
            .map(|link| {
                format!(
                    r#"<a class="btn large block" href="{}" target="_blank" rel="noopener noreferrer">Comprar na {}</a>"#,
                    escape(safe_href(Some(&link.url))),
                    escape(&link.name)
                )
            })
            .collect();
        format!(
            r#"<div class="buy">
                <h2 class="section-title">Onde Comprar</h2>
                <div class="buy-links">{buttons}</div>
            </div>"#
        )
    };

    let main = format!(
        r#"<main class="container page">
    <a href="/" class="btn outline back">&larr; Voltar para os Produtos</a>
    <div class="product-detail">
        <div class="product-media">
            <div class="hero-image">
                <img src="{image}" alt="{name}">
            </div>
            {specs}
        </div>
        <div class="product-info">
            <h1 class="product-name">{name}</h1>
            {description}
            <hr class="separator">
            {buy}
        </div>
    </div>
</main>"#,
        image = escape(hero),
    );

    let head = Head::new(product.name.clone(), product.description.clone())
        .with_image(hero, product.name.clone());
    document(store, &head, &main)
}

pub fn product_not_found_page(store: &StoreSettings, id: &str) -> String {
    let main = format!(
        r#"<main class="container page center">
    <div class="alert" role="status">
        <div>
            <h5 class="alert-title">Produto não encontrado</h5>
            <p class="alert-description">O produto com o ID "{}" não foi encontrado.</p>
        </div>
    </div>
    <a href="/" class="btn">Voltar para a Home</a>
</main>"#,
        escape(id)
    );

    let head = Head::new(
        "Produto Não Encontrado - Sua Loja",
        "O produto que você está procurando não foi encontrado em nossa loja.",
    );
    document(store, &head, &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_products;

    #[test]
    fn full_product_renders_every_section() {
        let product = &sample_products(1)[0];
        let html = product_page(&StoreSettings::default(), product);

        assert!(html.contains("<title>Produto 1</title>"));
        assert!(html.contains(r#"<meta property="og:image" content="https://cdn.example.com/capa-1.jpg">"#));
        assert!(html.contains(r#"<img src="https://cdn.example.com/capa-1.jpg" alt="Produto 1">"#));
        assert!(html.contains("Ficha Técnica"));
        assert!(html.contains(r#"<b class="rt-bold">Páginas:</b>"#));
        assert!(html.contains("Um romance sobre &lt;fronteiras&gt;."));
        assert!(html.contains(
            r#"href="https://amazon.example.com/produto-1" target="_blank" rel="noopener noreferrer">Comprar na Amazon</a>"#
        ));
    }

    #[test]
    fn bare_product_falls_back() {
        let product = &sample_products(2)[1];
        let html = product_page(&StoreSettings::default(), product);

        assert!(html.contains(r#"<img src="https://picsum.photos/seed/2/300/200" alt="Produto 2">"#));
        assert!(!html.contains("Ficha Técnica"));
        assert!(!html.contains("Onde Comprar"));
        assert!(html.contains(r#"<p class="lead">Descrição breve do Produto 2.</p>"#));
    }

    #[test]
    fn script_affiliate_link_is_not_live() {
        let mut product = sample_products(1).remove(0);
        product.affiliate_links = Some(vec![vitrine_cms::AffiliateLink {
            name: "Golpe".to_string(),
            url: "javascript:alert(document.cookie)".to_string(),
        }]);
        let html = product_page(&StoreSettings::default(), &product);
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a class="btn large block" href="#" target="_blank""##));
    }

    #[test]
    fn not_found_names_the_id() {
        let html = product_not_found_page(&StoreSettings::default(), "nao-existe");
        assert!(html.contains("<title>Produto Não Encontrado - Sua Loja</title>"));
        assert!(html.contains(r#"O produto com o ID "nao-existe" não foi encontrado."#));
        assert!(html.contains("Voltar para a Home"));
    }
}

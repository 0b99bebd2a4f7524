use vitrine_cms::Product;

use super::escape;

/// Grid card linking to the product page.
pub fn product_card(product: &Product) -> String {
    let name = escape(&product.name);
    format!(
        r#"<article class="card product-card" data-product-id="{id}">
    <div class="card-media">
        <img src="{image}" alt="{name}" loading="lazy">
    </div>
    <div class="card-content">
        <h3 class="card-title" title="{name}">{name}</h3>
        <p class="card-description">{description}</p>
    </div>
    <div class="card-footer">
        <a href="/product/{href}" class="btn block">Ver mais</a>
    </div>
</article>"#,
        id = escape(&product.id),
        image = escape(&product.image_url),
        description = escape(&product.description),
        href = urlencoding::encode(&product.id),
    )
}

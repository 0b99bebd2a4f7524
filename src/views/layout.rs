//! Document shell: head metadata, header with the coupon dialog, footer.

use time::OffsetDateTime;
use vitrine_kernel::settings::StoreSettings;

use super::escape;

/// Image advertised to link previews.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialImage {
    pub url: String,
    pub alt: String,
}

/// Page metadata. With an image, OpenGraph and Twitter card tags are emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Head {
    pub title: String,
    pub description: String,
    pub image: Option<SocialImage>,
}

impl Head {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn for_store(store: &StoreSettings) -> Self {
        Self::new(format!("{} Online", store.name), store.description.clone())
    }

    pub fn with_image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(SocialImage {
            url: url.into(),
            alt: alt.into(),
        });
        self
    }

    fn render(&self) -> String {
        let title = escape(&self.title);
        let description = escape(&self.description);

        let mut tags = format!(
            r#"<title>{title}</title>
    <meta name="description" content="{description}">"#
        );

        if let Some(image) = &self.image {
            let url = escape(&image.url);
            tags.push_str(&format!(
                r#"
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{url}">
    <meta property="og:image:alt" content="{}">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{description}">
    <meta name="twitter:image" content="{url}">"#,
                escape(&image.alt)
            ));
        }

        tags
    }
}

/// Wrap `main` into a full HTML document.
pub fn document(store: &StoreSettings, head: &Head, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {}
    <link rel="stylesheet" href="/assets/vitrine.css">
    <script src="/assets/vitrine.js" defer></script>
</head>
<body class="dark">
{}
{}
{}
</body>
</html>"#,
        head.render(),
        header(store),
        main,
        footer(store, OffsetDateTime::now_utc().year())
    )
}

fn header(store: &StoreSettings) -> String {
    let nav: String = ["Produtos", "Categorias", "Contato", "Minha Conta"]
        .iter()
        .map(|label| format!(r#"<button type="button" class="btn ghost">{label}</button>"#))
        .collect();

    format!(
        r#"<header class="site-header">
    <div class="container header-bar">
        <a href="/" class="brand">{}</a>
        <details class="mobile-menu">
            <summary class="btn ghost" aria-label="Abrir menu">&#9776;</summary>
            <nav class="mobile-nav">{nav}</nav>
        </details>
        <nav class="main-nav">{nav}</nav>
        <button type="button" class="btn ghost" data-open-coupons>Cupons</button>
    </div>
    <dialog id="coupons-dialog" class="dialog">
        <div class="dialog-header">
            <h2 class="dialog-title">Meus cupons</h2>
            <button type="button" class="btn ghost" data-close aria-label="Fechar">&times;</button>
        </div>
        <div class="dialog-body" data-role="coupons">
            <p class="muted center">Carregando cupons...</p>
        </div>
    </dialog>
</header>"#,
        escape(&store.name)
    )
}

fn footer(store: &StoreSettings, year: i32) -> String {
    let credit = store
        .developer_url
        .as_deref()
        .map(|url| {
            format!(
                r#"
    <p class="credit">Desenvolvido por <a href="{}" target="_blank" rel="noopener noreferrer">DosSantosdev</a></p>"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<footer class="site-footer">
    <p>&copy; {year} {}. Todos os direitos reservados.</p>{credit}
</footer>"#,
        escape(&store.owner)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_year_and_owner() {
        let html = footer(&StoreSettings::default(), 2031);
        assert!(html.contains("&copy; 2031 OnTech. Todos os direitos reservados."));
        assert!(!html.contains("Desenvolvido por"));

        let store = StoreSettings {
            developer_url: Some("https://dossantosdev.com.br/".to_string()),
            ..StoreSettings::default()
        };
        assert!(footer(&store, 2031).contains(r#"href="https://dossantosdev.com.br/""#));
    }

    #[test]
    fn social_tags_only_with_image() {
        let plain = Head::new("Minha Loja Online", "Loja").render();
        assert!(!plain.contains("og:title"));

        let shared = Head::new("Fone \"X\"", "Sem fio")
            .with_image("https://cdn.example.com/fone.jpg", "Fone")
            .render();
        assert!(shared.contains(r#"<meta property="og:title" content="Fone &quot;X&quot;">"#));
        assert!(shared.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(shared.contains(r#"<meta name="twitter:image" content="https://cdn.example.com/fone.jpg">"#));
    }

    #[test]
    fn document_has_store_header_and_dialog() {
        let store = StoreSettings::default();
        let html = document(&store, &Head::for_store(&store), "<main></main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Minha Loja Online</title>"));
        assert!(html.contains(r#"<a href="/" class="brand">Minha Loja</a>"#));
        assert!(html.contains("Meus cupons"));
        assert!(html.contains("Minha Conta"));
    }
}

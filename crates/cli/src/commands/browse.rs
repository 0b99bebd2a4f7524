//! Line-oriented catalog browser.
//!
//! Plain lines are typed into the search box; `/cat NAME` selects a category,
//! `/more` loads the next page and `/quit` leaves.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use vitrine_app::{build_state, BrowserView, CatalogBrowser};
use vitrine_kernel::settings::Settings;

use super::BrowseArgs;

enum Input<'a> {
    Category(&'a str),
    More,
    Quit,
    Search(&'a str),
}

fn parse(line: &str) -> Input<'_> {
    match line.trim_end_matches(['\r', '\n']) {
        "/quit" | "/q" => Input::Quit,
        "/more" => Input::More,
        "/cat" => Input::Category(""),
        line => match line.strip_prefix("/cat ") {
            Some(rest) => Input::Category(rest.trim()),
            None => Input::Search(line),
        },
    }
}

pub async fn run(args: BrowseArgs, settings: &Settings) -> Result<()> {
    let state = build_state(settings)?;
    let debounce = Duration::from_millis(args.debounce_ms.unwrap_or(settings.search.debounce_ms));

    let categories = state.storefront.categories().await?;
    println!("Categorias: {}", categories.join(", "));
    println!("Comandos: /cat NOME, /more, /quit; qualquer outro texto busca.");

    let mut browser = CatalogBrowser::open(state.storefront.clone(), debounce).await?;
    print_view(&browser.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match parse(&line) {
            Input::Quit => break,
            Input::Category(name) => {
                browser.select_category(name);
                browser.refresh().await
            }
            Input::Search(term) => {
                browser.type_search(term);
                browser.settle().await
            }
            Input::More => match browser.load_more().await {
                Ok(false) => {
                    println!("Nada mais para carregar.");
                    Ok(())
                }
                other => other.map(|_| ()),
            },
        };

        if let Err(err) = outcome {
            tracing::debug!(error = %err, "browse step failed");
        }
        print_view(&browser.view());
    }

    Ok(())
}

fn print_view(view: &BrowserView) {
    let search = if view.search_input.is_empty() {
        String::new()
    } else {
        format!(", busca \"{}\"", view.search_input)
    };
    println!("== {}{} ==", view.category, search);

    if let Some(error) = &view.error {
        println!("Erro ao carregar dados: {error}");
    }
    if view.is_placeholder {
        println!("(exibindo resultados anteriores)");
    }

    for product in &view.products {
        println!("  - {} [{}]", product.name, product.category);
    }

    if view.products.is_empty() {
        println!("Nenhum produto encontrado com os filtros aplicados.");
    } else if view.has_next {
        println!("{} de {} produtos. /more carrega mais.", view.products.len(), view.total);
    } else {
        println!("Você viu todos os {} produtos!", view.total);
    }
}

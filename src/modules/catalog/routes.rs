use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use vitrine_cms::Product;
use vitrine_http::AppError;

use crate::catalog::FeedPage;
use crate::modules::{ListingParams, SharedState};
use crate::views::{
    document, error_page, feed_error_fragment, feed_fragment, home_page, Head, HomeView,
};

/// `GET /`: the first `page` pages of the filtered listing.
pub async fn home(
    State(state): State<SharedState>,
    Query(params): Query<ListingParams>,
) -> Response {
    let filter = params.filter();
    // the page links are generated by us; a mangled one just starts over
    let pages = params.page().unwrap_or(1) as usize;
    let storefront = &state.storefront;

    let (categories, feed) =
        tokio::join!(storefront.categories(), storefront.feed(&filter, pages));

    match (categories, feed) {
        (Ok(categories), Ok(feed)) => {
            let main = home_page(&HomeView {
                categories: &categories,
                filter: &filter,
                feed: &feed,
                debounce_ms: state.debounce_ms,
            });
            Html(document(&state.store, &Head::for_store(&state.store), &main)).into_response()
        }
        (Err(err), _) | (_, Err(err)) => {
            tracing::error!(error = %err, "home page failed");
            let html = error_page(
                &state.store,
                "Erro ao carregar dados",
                "Não foi possível carregar os produtos ou categorias.",
                &err.to_string(),
            );
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

/// `GET /fragments/products`: cards of one page plus the next status block.
pub async fn products_fragment(
    State(state): State<SharedState>,
    Query(params): Query<ListingParams>,
) -> Response {
    let filter = params.filter();
    let page = params.page().unwrap_or(1);

    match state.storefront.page(&filter, page).await {
        Ok(feed_page) => Html(feed_fragment(&filter, &feed_page)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, page, "products fragment failed");
            (StatusCode::BAD_GATEWAY, Html(feed_error_fragment(&err.to_string()))).into_response()
        }
    }
}

pub async fn list_products(
    State(state): State<SharedState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<FeedPage>, AppError> {
    let page = params.page().map_err(AppError::bad_request)?;
    let feed_page = state
        .storefront
        .page(&params.filter(), page)
        .await
        .map_err(|err| AppError::upstream(&err))?;
    Ok(Json(feed_page))
}

pub async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    state
        .storefront
        .product(&id)
        .await
        .map_err(|err| AppError::upstream(&err))?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("O produto com o ID \"{id}\" não foi encontrado.")))
}

pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<String>>, AppError> {
    let categories = state
        .storefront
        .categories()
        .await
        .map_err(|err| AppError::upstream(&err))?;
    Ok(Json(categories))
}

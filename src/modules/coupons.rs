use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use time::OffsetDateTime;
use vitrine_cms::Coupon;
use vitrine_http::AppError;
use vitrine_kernel::Module;

use super::SharedState;
use crate::views::{coupon_list, coupons_error};

/// Coupon dialog body and the coupon list API.
pub struct CouponsModule {
    state: SharedState,
}

impl CouponsModule {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

/// A coupon with its expiry resolved at request time.
#[derive(Debug, Serialize)]
pub struct CouponView {
    pub id: String,
    pub code: String,
    pub label: String,
    /// `dd/mm/yyyy`, or the raw CMS value when it does not parse
    pub expiration: String,
    pub expired: bool,
}

impl CouponView {
    fn at(coupon: &Coupon, now: OffsetDateTime) -> Self {
        Self {
            id: coupon.id.clone(),
            code: coupon.code.clone(),
            label: coupon.label.clone(),
            expiration: coupon.display_expiration(),
            expired: coupon.status_at(now).is_expired(),
        }
    }
}

#[async_trait]
impl Module for CouponsModule {
    fn name(&self) -> &'static str {
        "coupons"
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_coupons))
            .with_state(self.state.clone())
    }

    fn pages(&self) -> Router {
        Router::new()
            .route("/fragments/coupons", get(coupons_fragment))
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List coupons",
                        "tags": ["Coupons"],
                        "responses": {
                            "200": {
                                "description": "Every coupon, expired ones included",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Coupon"
                                            }
                                        }
                                    }
                                }
                            },
                            "502": {
                                "description": "The CMS request failed",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Coupon": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "code": { "type": "string" },
                            "label": { "type": "string" },
                            "expiration": {
                                "type": "string",
                                "description": "Expiry date as dd/mm/yyyy"
                            },
                            "expired": {
                                "type": "boolean",
                                "description": "True once the expiry day has started in UTC, or when the date is invalid"
                            }
                        },
                        "required": ["id", "code", "label", "expiration", "expired"]
                    }
                }
            }
        }))
    }
}

async fn coupons_fragment(State(state): State<SharedState>) -> Response {
    match state.storefront.coupons().await {
        Ok(coupons) => Html(coupon_list(&coupons, OffsetDateTime::now_utc())).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "coupons fragment failed");
            (StatusCode::BAD_GATEWAY, Html(coupons_error(&err.to_string()))).into_response()
        }
    }
}

async fn list_coupons(State(state): State<SharedState>) -> Result<Json<Vec<CouponView>>, AppError> {
    let coupons = state
        .storefront
        .coupons()
        .await
        .map_err(|err| AppError::upstream(&err))?;
    let now = OffsetDateTime::now_utc();
    Ok(Json(coupons.iter().map(|c| CouponView::at(c, now)).collect()))
}

pub fn create_module(state: SharedState) -> Arc<dyn Module> {
    Arc::new(CouponsModule::new(state))
}

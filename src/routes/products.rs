use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{ContactLinkResponse, DetailQuery, ProductCardList, ProductDetailResponse},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
    views::CatalogMode,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
        .route("/{id}/contact", get(contact_link))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Available products", body = ApiResponse<ProductCardList>)
    ),
    tag = "Storefront"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductCardList>>> {
    let view = state.catalog.catalog(CatalogMode::Storefront).await?;
    let meta = Meta::with_total(view.len());
    let data = ProductCardList { items: view.cards() };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("image" = Option<usize>, Query, description = "Carousel position, default 0"),
    ),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductDetailResponse>),
        (status = 404, description = "Product not found or not available"),
    ),
    tag = "Storefront"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> AppResult<Json<ApiResponse<ProductDetailResponse>>> {
    let mut detail = state.catalog.product_detail(&id).await?;
    if let Some(index) = query.image {
        detail.carousel_mut().select(index);
    }
    let data = ProductDetailResponse::new(&detail, &state.contact);
    Ok(Json(ApiResponse::success("Product", data, None)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/contact",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Messaging link for the product", body = ApiResponse<ContactLinkResponse>),
        (status = 404, description = "Product not found or not available"),
    ),
    tag = "Storefront"
)]
pub async fn contact_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ContactLinkResponse>>> {
    let detail = state.catalog.product_detail(&id).await?;
    let data = ContactLinkResponse {
        url: detail.contact_link(&state.contact),
    };
    Ok(Json(ApiResponse::success("Contact link", data, None)))
}

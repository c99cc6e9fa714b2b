use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::{
        images::{ImageUploadForm, ImageUploadResponse},
        products::{DeleteQuery, ProductFormRequest, ProductFormState, ProductList},
    },
    error::{AppError, AppResult},
    form::ProductForm,
    images::{ImageCollection, ImageFile},
    middleware::auth::AdminUser,
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
    views::CatalogMode,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(edit_product).put(update_product).delete(delete_product),
        )
        .route("/images", post(upload_images))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    responses(
        (status = 200, description = "Every product, including unavailable ones", body = ApiResponse<ProductList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_products(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let view = state.catalog.catalog(CatalogMode::Admin).await?;
    let meta = Meta::with_total(view.len());
    let data = ProductList {
        items: view.products().to_vec(),
    };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Editor pre-populated from the product", body = ApiResponse<ProductFormState>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn edit_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ProductFormState>>> {
    let form = state.catalog.edit_form(&id).await?;
    let data = ProductFormState::new(id, &form);
    Ok(Json(ApiResponse::success("Edit product", data, None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = ProductFormRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 422, description = "Missing fields or invalid price"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<ProductFormRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let mut form = ProductForm::create();
    payload.apply_to(&mut form);
    let product = state.catalog.submit(&form).await?;
    tracing::debug!(admin = %admin.subject, product_id = %product.id, "admin created product");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Product created",
            product,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductFormRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Another write to this product is in progress"),
        (status = 422, description = "Missing fields or invalid price"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<ProductFormRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let mut form = state.catalog.edit_form(&id).await?;
    payload.apply_to(&mut form);
    let product = state.catalog.submit(&form).await?;
    tracing::debug!(admin = %admin.subject, product_id = %product.id, "admin updated product");
    Ok(Json(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("confirm" = Option<bool>, Query, description = "Must be true to delete"),
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Deletion not confirmed, or another write is in progress"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let pending = state.catalog.request_delete(&id).await?;
    if !query.confirm {
        pending.cancel();
        return Err(AppError::Conflict("Deletion must be confirmed".into()));
    }
    state.catalog.delete(pending.confirm()).await?;
    tracing::debug!(admin = %admin.subject, product_id = %id, "admin deleted product");

    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/images",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Draft image list with the uploads embedded", body = ApiResponse<ImageUploadResponse>),
        (status = 400, description = "Malformed multipart body"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn upload_images(
    _admin: AdminUser,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<ImageUploadResponse>>> {
    let mut existing = Vec::new();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "existing" => existing.push(field.text().await.map_err(multipart_error)?),
            "files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                files.push(ImageFile {
                    name: file_name,
                    media_type,
                    bytes: bytes.to_vec(),
                });
            }
            other => tracing::debug!(field = %other, "ignoring multipart field"),
        }
    }

    let mut images = ImageCollection::default();
    for reference in &existing {
        images.add_from_url(reference);
    }
    let added = images.add_from_files(files).await;

    let data = ImageUploadResponse {
        images: images.into_images(),
        added,
    };
    Ok(Json(ApiResponse::success("Images", data, None)))
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::BadRequest(err.body_text())
}

use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        images::{ImageUploadForm, ImageUploadResponse},
        products::{
            ContactLinkResponse, ProductCardList, ProductDetailResponse, ProductFormRequest,
            ProductFormState, ProductList,
        },
    },
    models::{NewProduct, Product},
    response::{ApiResponse, Meta},
    routes::{admin, health, products},
    store::StoreKind,
    views::{Carousel, CatalogMode, ProductCard},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::contact_link,
        admin::list_products,
        admin::edit_product,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::upload_images
    ),
    components(
        schemas(
            Product,
            NewProduct,
            ProductCard,
            Carousel,
            CatalogMode,
            StoreKind,
            ProductCardList,
            ProductList,
            ProductDetailResponse,
            ProductFormRequest,
            ProductFormState,
            ContactLinkResponse,
            ImageUploadForm,
            ImageUploadResponse,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductCardList>,
            ApiResponse<ProductList>,
            ApiResponse<ProductDetailResponse>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Storefront", description = "Public catalog endpoints"),
        (name = "Admin", description = "Catalog management endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

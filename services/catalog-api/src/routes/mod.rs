use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health/detailed", get(detailed_health_check))
        .route(
            "/suppliers",
            get(list_suppliers)
                .post(create_supplier_from_registry)
                .put(update_supplier),
        )
        .route("/suppliers/complete", post(create_supplier))
        .route("/suppliers/:id", get(get_supplier).delete(delete_supplier))
        .route("/suppliers/:id/address", put(update_supplier_address))
        .route(
            "/categories",
            get(list_categories).post(create_category).put(update_category),
        )
        .route("/categories/:id", get(get_category).delete(delete_category))
        .route(
            "/products",
            get(list_products).post(create_product).put(update_product),
        )
        .route("/products/:id", get(get_product).delete(delete_product))
}

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use vet_core::health::healthz;
use vet_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    address::{create_address, get_my_address, update_my_address},
    avatar::{delete_my_avatar, get_my_avatar, replace_my_avatar, upsert_avatar},
    catalog_position::{
        create_catalog_position, delete_catalog_position, get_catalog_position,
        list_catalog_positions, update_catalog_position,
    },
    health::readyz,
    profile::{
        create_profile, get_my_profile, get_profile, list_profiles, update_my_profile,
        update_profile,
    },
    role::{create_role, list_roles, update_role},
};
use crate::state::AppState;

/// Headroom over the image limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState, api_prefix: &str) -> Router {
    let avatar_routes = Router::new()
        .route("/avatar", post(upsert_avatar))
        .route(
            "/avatar/me",
            get(get_my_avatar)
                .patch(replace_my_avatar)
                .delete(delete_my_avatar),
        )
        .layer(DefaultBodyLimit::max(
            state.max_image_size.saturating_add(MULTIPART_OVERHEAD),
        ));

    let api = Router::new()
        // Profiles
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/me", get(get_my_profile).patch(update_my_profile))
        .route("/profiles/{id}", get(get_profile).patch(update_profile))
        // Roles
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/{id}", patch(update_role))
        // Address
        .route("/address", post(create_address))
        .route("/address/me", get(get_my_address).patch(update_my_address))
        // Catalog positions
        .route(
            "/catalog-positions",
            get(list_catalog_positions).post(create_catalog_position),
        )
        .route(
            "/catalog-positions/{id}",
            get(get_catalog_position)
                .patch(update_catalog_position)
                .delete(delete_catalog_position),
        )
        // Avatar
        .merge(avatar_routes);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(api_prefix, api)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}

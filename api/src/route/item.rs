use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::item::{delete_item, register_item, show_item, show_item_list, update_item};
use crate::handler::reservation::{check_item_availability, reserve_item};
use crate::handler::review::{post_review, show_item_reviews};

pub fn build_item_routers() -> Router<AppRegistry> {
    let items_routers = Router::new()
        .route("/", post(register_item))
        .route("/", get(show_item_list))
        .route("/:item_id", get(show_item))
        .route("/:item_id", put(update_item))
        .route("/:item_id", delete(delete_item))
        .route("/:item_id/availability", get(check_item_availability))
        .route("/:item_id/reservations", post(reserve_item))
        .route("/:item_id/reviews", get(show_item_reviews))
        .route("/:item_id/reviews", post(post_review));

    Router::new().nest("/items", items_routers)
}

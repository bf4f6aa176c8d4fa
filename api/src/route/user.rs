use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{change_role, show_user_list, update_my_profile};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", get(show_user_list))
        .route("/me", put(update_my_profile))
        .route("/:user_id/role", put(change_role));

    Router::new().nest("/users", users_routers)
}

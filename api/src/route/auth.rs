use axum::{routing::{get, post}, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, logout, register, show_current_user};

pub fn routes() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(show_current_user));

    Router::new().nest("/auth", auth_routers)
}

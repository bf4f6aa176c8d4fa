pub mod auth;
pub mod id;
pub mod item;
pub mod list;
pub mod reservation;
pub mod review;
pub mod role;
pub mod user;

pub mod auth;
pub mod health;
pub mod item;
pub mod reservation;
pub mod review;
pub mod user;
pub mod v1;

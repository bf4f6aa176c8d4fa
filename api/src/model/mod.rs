pub mod auth;
pub mod item;
pub mod reservation;
pub mod review;
pub mod user;

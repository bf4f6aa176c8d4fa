pub mod event;

/// Opaque bearer token handed out at login and stored in the key-value
/// store with a TTL.
pub struct AccessToken(pub String);

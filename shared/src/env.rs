use strum::EnumString;

/// Deployment environment, selected by the ENVIRONMENT variable.
/// Anything other than "production" falls back to Development.
#[derive(Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| default_env.into());
    env.parse().unwrap_or_default()
}

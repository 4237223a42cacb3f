use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application settings from the process environment.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at
/// `path` (or an optional `config.toml`), `APP__SECTION__KEY` variables, and
/// finally the plain `DATABASE_URL` and `PORT` variables.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_from(path, std::env::vars().collect())
}

/// Same as [`load_settings`] but reads variables from `vars` instead of the
/// process environment.
pub fn load_settings_from(
    path: Option<&Path>,
    vars: HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let database_url = vars.get("DATABASE_URL").cloned();
    let port = vars.get("PORT").cloned();

    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.url", "")?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("database.run_migrations", true)?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.into_iter().collect())),
        )
        .set_override_option("database.url", database_url)?
        .set_override_option("server.port", port)?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(
        host = %settings.server.host,
        port = settings.server.port,
        max_connections = settings.database.max_connections,
        "Configuration loaded."
    );

    Ok(settings)
}

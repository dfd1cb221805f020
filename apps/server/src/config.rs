//! Server configuration from environment variables.

/// Runtime configuration.
///
/// - `ALCANCIA_DB_PATH`: SQLite database file (default `alcancia.db`)
/// - `ALCANCIA_LISTEN_ADDR`: listen address (default `0.0.0.0:3000`)
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env if present; real environment variables win.
        let _ = dotenvy::dotenv();

        Self {
            db_path: std::env::var("ALCANCIA_DB_PATH")
                .unwrap_or_else(|_| "alcancia.db".to_string()),
            listen_addr: std::env::var("ALCANCIA_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}

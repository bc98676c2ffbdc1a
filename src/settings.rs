use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server settings: built-in defaults, then an optional `trivia.toml`, then
/// `TRIVIA_*` environment variables (a `.env` file is loaded first).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub address: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env(Environment::with_prefix("TRIVIA"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("address", "0.0.0.0:8080")?
            .add_source(File::with_name("trivia").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("TRIVIA").source(Some(map))
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_env(env(&[])).unwrap();
        assert_eq!(settings.db_path, "trivia.db");
        assert_eq!(settings.address, "0.0.0.0:8080");
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_env(env(&[
            ("TRIVIA_DB_PATH", "/var/lib/trivia/catalog.db"),
            ("TRIVIA_ADDRESS", "127.0.0.1:5000"),
        ]))
        .unwrap();
        assert_eq!(settings.db_path, "/var/lib/trivia/catalog.db");
        assert_eq!(settings.address, "127.0.0.1:5000");
    }
}

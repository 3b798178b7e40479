use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0} environment variable")]
    Missing(&'static str),

    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    pub players_path: PathBuf,
    pub matches_path: PathBuf,
    pub keepalive_addr: SocketAddr,
}

impl BotConfig {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let token = get("TOKEN").ok_or(ConfigError::Missing("TOKEN"))?;
        let prefix = get("BOT_PREFIX").unwrap_or_else(|| "!".to_string());
        let data_dir = PathBuf::from(get("DATA_DIR").unwrap_or_else(|| ".".to_string()));
        let players_path = data_dir.join(get("PLAYERS_FILE").unwrap_or_else(|| "players.json".to_string()));
        let matches_path = data_dir.join(get("MATCHES_FILE").unwrap_or_else(|| "matches.json".to_string()));

        // Hosting platforms hand out the port through PORT.
        let keepalive_raw = match get("KEEPALIVE_ADDR") {
            Some(addr) => addr,
            None => format!("0.0.0.0:{}", get("PORT").unwrap_or_else(|| "8080".to_string())),
        };
        let keepalive_addr: SocketAddr = keepalive_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "KEEPALIVE_ADDR",
            value: keepalive_raw.clone(),
        })?;

        Ok(Self {
            token,
            prefix,
            players_path,
            matches_path,
            keepalive_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("TOKEN", "abc")]).unwrap();
        assert_eq!(cfg.token, "abc");
        assert_eq!(cfg.prefix, "!");
        assert_eq!(cfg.players_path, PathBuf::from(".").join("players.json"));
        assert_eq!(cfg.matches_path, PathBuf::from(".").join("matches.json"));
        assert_eq!(cfg.keepalive_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_missing_token() {
        let err = config(&[("TOKEN", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TOKEN")));
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("TOKEN", "abc"),
            ("BOT_PREFIX", "?"),
            ("DATA_DIR", "/var/lib/grx"),
            ("PLAYERS_FILE", "roster.json"),
            ("PORT", "10000"),
        ])
        .unwrap();
        assert_eq!(cfg.prefix, "?");
        assert_eq!(cfg.players_path, PathBuf::from("/var/lib/grx/roster.json"));
        assert_eq!(cfg.keepalive_addr.port(), 10000);
    }

    #[test]
    fn test_invalid_keepalive_addr() {
        let err = config(&[("TOKEN", "abc"), ("KEEPALIVE_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "KEEPALIVE_ADDR", .. }));
    }
}

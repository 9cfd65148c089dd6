use std::{env, fmt::Debug, str::FromStr};

use crate::store::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub max_id_attempts: usize,
}

impl Config {
    pub fn load() -> Self {
        let server_addr = get_env_or("SERVER_ADDRESS", "0.0.0.0:8080");
        let max_id_attempts = parse_env_or("MAX_ID_ATTEMPTS", DEFAULT_MAX_ATTEMPTS);
        Self {
            server_addr,
            max_id_attempts,
        }
    }
}

fn get_env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| {
        tracing::warn!(
            "{} environment variable not set, using default: {}",
            var,
            default
        );
        default.to_string()
    })
}

fn parse_env_or<T>(var: &str, default: T) -> T
where
    T: FromStr + Debug,
{
    match env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "{} has invalid value {:?}, using default: {:?}",
                var,
                raw,
                default
            );
            default
        }),
        Err(_) => default,
    }
}

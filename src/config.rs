use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdScheme {
    /// Random v4 UUID strings
    Uuid,
    /// Increasing integers starting at 1
    Sequential,
}

/// In-memory user management HTTP service
#[derive(Debug, Parser)]
#[command(name = "user-service", version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "USER_SERVICE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// How identifiers are assigned to new users
    #[arg(long, env = "USER_SERVICE_ID_SCHEME", value_enum, default_value_t = IdScheme::Uuid)]
    pub id_scheme: IdScheme,

    /// Load the five sample users at startup
    #[arg(long, env = "USER_SERVICE_SEED")]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["user-service"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.id_scheme, IdScheme::Uuid);
        assert!(!config.seed);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "user-service",
            "--bind",
            "127.0.0.1:8080",
            "--id-scheme",
            "sequential",
            "--seed",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.id_scheme, IdScheme::Sequential);
        assert!(config.seed);
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        assert!(Config::try_parse_from(["user-service", "--id-scheme", "random"]).is_err());
    }
}

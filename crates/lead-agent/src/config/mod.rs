use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::outreach::{ScoringWeights, SuggestionOptions};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Initial weight snapshot and suggestion defaults for the outreach pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub suggestions: SuggestionOptions,
}

const WEIGHT_VARS: [&str; 6] = [
    "LEAD_WEIGHT_DECISION_MAKER",
    "LEAD_WEIGHT_COMPANY_FIT",
    "LEAD_WEIGHT_GROWTH_POTENTIAL",
    "LEAD_WEIGHT_SKILL_RELEVANCE",
    "LEAD_WEIGHT_LOCATION_RELEVANCE",
    "LEAD_WEIGHT_ENGAGEMENT_POTENTIAL",
];

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            decision_maker: weight_var(WEIGHT_VARS[0], defaults.decision_maker)?,
            company_fit: weight_var(WEIGHT_VARS[1], defaults.company_fit)?,
            growth_potential: weight_var(WEIGHT_VARS[2], defaults.growth_potential)?,
            skill_relevance: weight_var(WEIGHT_VARS[3], defaults.skill_relevance)?,
            location_relevance: weight_var(WEIGHT_VARS[4], defaults.location_relevance)?,
            engagement_potential: weight_var(WEIGHT_VARS[5], defaults.engagement_potential)?,
        };

        let option_defaults = SuggestionOptions::default();
        let min_score = match env::var("SUGGESTION_MIN_SCORE") {
            Ok(raw) => raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidSuggestionLimit {
                    name: "SUGGESTION_MIN_SCORE",
                })?,
            Err(_) => option_defaults.min_score,
        };
        let max_count = match env::var("SUGGESTION_MAX_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidSuggestionLimit {
                    name: "SUGGESTION_MAX_COUNT",
                })?,
            Err(_) => option_defaults.max_count,
        };

        Ok(Self {
            weights,
            suggestions: SuggestionOptions {
                min_score,
                max_count,
            },
        })
    }
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(ConfigError::InvalidWeight { name }),
        },
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { name: &'static str },
    InvalidSuggestionLimit { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { name } => {
                write!(f, "{name} must be a finite, non-negative number")
            }
            ConfigError::InvalidSuggestionLimit { name } => {
                write!(f, "{name} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidWeight { .. }
            | ConfigError::InvalidSuggestionLimit { .. } => None,
        }
    }
}

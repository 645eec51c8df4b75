use std::env;

/// Where documents live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    /// DynamoDB through the default AWS endpoint resolution
    Aws,
    /// DynamoDB at an explicit endpoint, e.g. DynamoDB Local
    Endpoint(String),
}

impl StoreBackend {
    fn parse(url: &str) -> Self {
        match url.trim() {
            "memory" => Self::Memory,
            "" | "aws" => Self::Aws,
            endpoint => Self::Endpoint(endpoint.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub store: StoreBackend,
    pub db_name: String,
    pub cors_origins: Vec<String>,
    pub bind_addr: String,
    pub event_log_table: String,
    pub event_snapshots_table: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_name = lookup("DB_NAME").unwrap_or("hospot".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or("*".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            store: StoreBackend::parse(&lookup("STORE_URL").unwrap_or("aws".to_string())),
            cors_origins,
            bind_addr: lookup("BIND_ADDR").unwrap_or("0.0.0.0:8000".to_string()),
            event_log_table: lookup("DYNAMODB_EVENT_LOG_TABLE")
                .unwrap_or(format!("{db_name}-event-log")),
            event_snapshots_table: lookup("DYNAMODB_EVENT_SNAPSHOTS_TABLE")
                .unwrap_or(format!("{db_name}-event-snapshots")),
            db_name,
        }
    }
}

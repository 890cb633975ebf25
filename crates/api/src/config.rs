/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development; `DATABASE_URL` is read separately in `main` and has no
/// default on purpose.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// External adapter endpoints and their shared outbound timeout.
    pub adapters: AdapterConfig,
}

/// Endpoints of the external collaborators.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Base URL of the geocoding search service.
    pub geocoder_url: String,
    /// Inference endpoint of the bin-detection model.
    pub bin_detector_url: String,
    /// Inference endpoint of the waste-classification model.
    pub classifier_url: String,
    /// Timeout applied to every outbound adapter call, in seconds.
    pub http_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                  |
    /// |------------------------|------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                |
    /// | `PORT`                 | `3000`                                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                     |
    /// | `GEOCODER_URL`         | `https://nominatim.openstreetmap.org`    |
    /// | `BIN_DETECTOR_URL`     | `http://localhost:9001/detect`           |
    /// | `CLASSIFIER_URL`       | `http://localhost:9002/classify`         |
    /// | `ADAPTER_TIMEOUT_SECS` | `10`                                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let adapters = AdapterConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            adapters,
        }
    }
}

impl AdapterConfig {
    /// Load adapter endpoints from environment variables with defaults.
    pub fn from_env() -> Self {
        let geocoder_url = std::env::var("GEOCODER_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".into());

        let bin_detector_url = std::env::var("BIN_DETECTOR_URL")
            .unwrap_or_else(|_| "http://localhost:9001/detect".into());

        let classifier_url = std::env::var("CLASSIFIER_URL")
            .unwrap_or_else(|_| "http://localhost:9002/classify".into());

        let http_timeout_secs: u64 = std::env::var("ADAPTER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("ADAPTER_TIMEOUT_SECS must be a valid u64");

        Self {
            geocoder_url,
            bin_detector_url,
            classifier_url,
            http_timeout_secs,
        }
    }
}

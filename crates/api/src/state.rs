use std::sync::Arc;

use ecosort_geocode::Geocoder;
use ecosort_vision::{BinDetector, WasteClassifier};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is an `Arc` internally and everything else
/// is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecosort_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Location string -> coordinates adapter.
    pub geocoder: Arc<Geocoder>,
    /// Front-view photo -> bin count adapter.
    pub bin_detector: Arc<BinDetector>,
    /// Top-view photo -> waste labels adapter.
    pub classifier: Arc<WasteClassifier>,
}

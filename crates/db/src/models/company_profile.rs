//! Company profile model for the `company_profile` table.

use ecosort_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `company_profile` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CompanyProfile {
    pub user_id: DbId,
    pub company_name: String,
    pub location: Option<String>,
    #[serde(skip_serializing)]
    pub coordinates: Option<String>,
    pub contact_number: Option<String>,
    pub profile_image: Option<String>,
    pub building_image: Option<String>,
    pub visit: i32,
    pub price: Option<f64>,
}

/// DTO for the company profile upsert endpoint.
#[derive(Debug, Deserialize)]
pub struct UpsertCompanyProfile {
    pub user_id: DbId,
    pub company_name: String,
    pub location: Option<String>,
    pub contact_number: Option<String>,
    pub profile_image: Option<String>,
    pub building_image: Option<String>,
    pub price: Option<f64>,
}

/// Projection for the public company lookup (name + map position).
#[derive(Debug, Clone, FromRow)]
pub struct CompanyLocation {
    pub company_name: String,
    pub coordinates: Option<String>,
}

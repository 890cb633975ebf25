//! Repository for the `company_profile` table.

use ecosort_core::types::DbId;
use sqlx::PgPool;

use crate::models::company_profile::{CompanyLocation, CompanyProfile, UpsertCompanyProfile};

/// Column list for company_profile queries.
const COLUMNS: &str = "user_id, company_name, location, coordinates, contact_number, \
    profile_image, building_image, visit, price";

/// Provides upsert and read operations for company profiles.
pub struct CompanyProfileRepo;

impl CompanyProfileRepo {
    /// Insert or update a company profile keyed by account id.
    ///
    /// The visit counter initializes to zero and is advanced only by the
    /// schedule-accept transaction.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertCompanyProfile,
        coordinates: Option<&str>,
    ) -> Result<CompanyProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_profile
                (user_id, company_name, location, coordinates, contact_number,
                 profile_image, building_image, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (user_id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                location = EXCLUDED.location,
                coordinates = EXCLUDED.coordinates,
                contact_number = EXCLUDED.contact_number,
                profile_image = EXCLUDED.profile_image,
                building_image = EXCLUDED.building_image,
                price = EXCLUDED.price
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(input.user_id)
            .bind(&input.company_name)
            .bind(&input.location)
            .bind(coordinates)
            .bind(&input.contact_number)
            .bind(&input.profile_image)
            .bind(&input.building_image)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a company profile by account id.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<CompanyProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_profile WHERE user_id = $1");
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Public lookup: company name and stored coordinates.
    pub async fn find_location(pool: &PgPool, user_id: DbId) -> Result<Option<CompanyLocation>, sqlx::Error> {
        sqlx::query_as::<_, CompanyLocation>(
            "SELECT company_name, coordinates FROM company_profile WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

//! Repository for the `user_profile` table.

use ecosort_core::types::DbId;
use sqlx::PgPool;

use crate::models::person_profile::{
    LeaderboardEntry, PersonProfile, ProfileLocation, UpsertPersonProfile,
};

/// Column list for user_profile queries.
const COLUMNS: &str = "user_id, name, bio, location, age, profile_image, coordinates, \
    level, points, visit, streaks, waste_weight";

/// Provides upsert and read operations for person profiles.
pub struct PersonProfileRepo;

impl PersonProfileRepo {
    /// Insert or update a profile keyed by account id, returning the row.
    ///
    /// Gameplay counters are set to zero on first insert only; the update
    /// arm touches none of them, so repeated upserts never reset progress.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertPersonProfile,
        coordinates: Option<&str>,
    ) -> Result<PersonProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profile
                (user_id, name, bio, location, age, profile_image, coordinates)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                bio = EXCLUDED.bio,
                location = EXCLUDED.location,
                age = EXCLUDED.age,
                profile_image = EXCLUDED.profile_image,
                coordinates = EXCLUDED.coordinates
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonProfile>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.location)
            .bind(input.age)
            .bind(&input.profile_image)
            .bind(coordinates)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by account id.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<PersonProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profile WHERE user_id = $1");
        sqlx::query_as::<_, PersonProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List every profile with a stored coordinate pair, for the map view.
    pub async fn list_locations(pool: &PgPool) -> Result<Vec<ProfileLocation>, sqlx::Error> {
        sqlx::query_as::<_, ProfileLocation>(
            "SELECT user_id, name, bio, coordinates FROM user_profile
             WHERE coordinates IS NOT NULL
             ORDER BY user_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Top profiles by points, descending. Tie order is left to the
    /// database.
    pub async fn top_by_points(pool: &PgPool, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT user_id, name, points, profile_image FROM user_profile
             ORDER BY points DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    ecosort_db::health_check(&pool).await.unwrap();

    // Verify every table exists and is queryable.
    let tables = [
        "users",
        "user_profile",
        "company_profile",
        "quiz_scores",
        "waste_images",
        "scheduling",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The email uniqueness constraint carries the `uq_` prefix the central
/// error classifier keys on.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_unique_constraint_name(pool: PgPool) {
    sqlx::query("INSERT INTO users (email, password_hash, role) VALUES ('a@b.c', 'x', 'user')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO users (email, password_hash, role) VALUES ('a@b.c', 'y', 'user')")
        .execute(&pool)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

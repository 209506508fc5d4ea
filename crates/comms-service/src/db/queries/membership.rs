//! Organization membership queries.
//!
//! The `organization_members` table is externally owned; this service only
//! reads from it.

use crate::db::DbPool;
use crate::error::AppResult;

/// Look up the organization a user belongs to.
///
/// Reads at most one membership row. A user with no recorded membership
/// yields `None` rather than an error; when multiple rows exist the store's
/// row order decides which one is returned.
pub async fn organization_for_user(pool: &DbPool, user_id: &str) -> AppResult<Option<String>> {
    let organization_id = sqlx::query_scalar::<_, String>(
        r#"
        SELECT organization_id
        FROM organization_members
        WHERE user_id = $1
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(organization_id)
}

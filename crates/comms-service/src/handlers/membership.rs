//! Organization membership handlers.

use axum::{extract::State, Extension, Json};

use crate::auth::UserContext;
use crate::db::models::OrganizationMembershipResponse;
use crate::error::AppResult;
use crate::services::MembershipService;

/// Get the calling user's organization.
///
/// `GET /api/organization`
///
/// The user identity comes from the authentication middleware; the lookup
/// is a single read against the membership table.
///
/// # Response
///
/// ```json
/// {
///   "user_id": "u1",
///   "organization_id": "org_a"
/// }
/// ```
///
/// `organization_id` is `null` when the user has no recorded membership;
/// this is still a `200 OK`, not an error.
pub async fn get_organization(
    State(service): State<MembershipService>,
    Extension(user): Extension<UserContext>,
) -> AppResult<Json<OrganizationMembershipResponse>> {
    let organization_id = service.organization_for_user(&user.user_id).await?;

    Ok(Json(OrganizationMembershipResponse {
        user_id: user.user_id,
        organization_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MembershipStore;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedStore(Option<String>);

    #[async_trait]
    impl MembershipStore for FixedStore {
        async fn organization_for_user(&self, _user_id: &str) -> AppResult<Option<String>> {
            Ok(self.0.clone())
        }
    }

    fn user(user_id: &str) -> UserContext {
        UserContext {
            user_id: user_id.to_string(),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_member_gets_organization() {
        let service = MembershipService::with_store(Arc::new(FixedStore(Some("org_a".into()))));

        let Json(response) = get_organization(State(service), Extension(user("u1")))
            .await
            .unwrap();

        assert_eq!(response.user_id, "u1");
        assert_eq!(response.organization_id.as_deref(), Some("org_a"));
    }

    #[tokio::test]
    async fn test_non_member_gets_null_organization() {
        let service = MembershipService::with_store(Arc::new(FixedStore(None)));

        let Json(response) = get_organization(State(service), Extension(user("u2")))
            .await
            .unwrap();

        assert_eq!(response.user_id, "u2");
        assert_eq!(response.organization_id, None);
    }
}

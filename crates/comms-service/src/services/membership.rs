//! Organization membership service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::db::queries::membership as queries;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};

/// Read-only store of organization memberships.
///
/// The store is an explicitly injected handle so tests can substitute an
/// in-memory implementation for the PostgreSQL-backed one.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Return the organization the user belongs to, or `None` when the user
    /// has no recorded membership.
    async fn organization_for_user(&self, user_id: &str) -> AppResult<Option<String>>;
}

/// PostgreSQL-backed membership store.
#[derive(Clone)]
pub struct PgMembershipStore {
    pool: DbPool,
}

impl PgMembershipStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipStore for PgMembershipStore {
    async fn organization_for_user(&self, user_id: &str) -> AppResult<Option<String>> {
        queries::organization_for_user(&self.pool, user_id).await
    }
}

/// Service for organization membership lookups.
#[derive(Clone)]
pub struct MembershipService {
    store: Arc<dyn MembershipStore>,
}

impl MembershipService {
    /// Create a membership service backed by PostgreSQL.
    pub fn new(pool: DbPool) -> Self {
        Self {
            store: Arc::new(PgMembershipStore::new(pool)),
        }
    }

    /// Create a membership service over an arbitrary store.
    pub fn with_store(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    /// Resolve the organization a user belongs to.
    ///
    /// Absence of a membership is not an error: a user with no recorded
    /// membership yields `Ok(None)`. The lookup is a single stateless,
    /// idempotent read.
    pub async fn organization_for_user(&self, user_id: &str) -> AppResult<Option<String>> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation(
                "user id must not be empty".to_string(),
            ));
        }

        self.store.organization_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory membership store. A user may carry several rows; like the
    /// backing table, lookups return the first one in store order.
    struct InMemoryMembershipStore {
        memberships: HashMap<String, Vec<String>>,
    }

    impl InMemoryMembershipStore {
        fn new(rows: &[(&str, &str)]) -> Self {
            let mut memberships: HashMap<String, Vec<String>> = HashMap::new();
            for (user_id, organization_id) in rows {
                memberships
                    .entry(user_id.to_string())
                    .or_default()
                    .push(organization_id.to_string());
            }
            Self { memberships }
        }
    }

    #[async_trait]
    impl MembershipStore for InMemoryMembershipStore {
        async fn organization_for_user(&self, user_id: &str) -> AppResult<Option<String>> {
            Ok(self
                .memberships
                .get(user_id)
                .and_then(|orgs| orgs.first().cloned()))
        }
    }

    fn service_with_rows(rows: &[(&str, &str)]) -> MembershipService {
        MembershipService::with_store(Arc::new(InMemoryMembershipStore::new(rows)))
    }

    #[tokio::test]
    async fn test_single_membership_returns_organization() {
        let service = service_with_rows(&[("u1", "org_a")]);

        let result = service.organization_for_user("u1").await.unwrap();
        assert_eq!(result, Some("org_a".to_string()));
    }

    #[tokio::test]
    async fn test_no_membership_returns_none() {
        let service = service_with_rows(&[("u1", "org_a")]);

        let result = service.organization_for_user("u2").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_multiple_memberships_return_exactly_one() {
        let service = service_with_rows(&[("u1", "org_a"), ("u1", "org_b")]);

        let result = service.organization_for_user("u1").await.unwrap();
        let organization_id = result.expect("membership set is non-empty");
        assert!(["org_a", "org_b"].contains(&organization_id.as_str()));
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_idempotent() {
        let service = service_with_rows(&[("u1", "org_a")]);

        let first = service.organization_for_user("u1").await.unwrap();
        let second = service.organization_for_user("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_user_id_is_rejected() {
        let service = service_with_rows(&[]);

        let err = service.organization_for_user("  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

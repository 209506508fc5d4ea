//! Organization membership model.

use serde::{Deserialize, Serialize};

/// Response for an organization membership lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMembershipResponse {
    /// User identifier the lookup was performed for
    pub user_id: String,

    /// Organization the user belongs to, `null` when the user has no
    /// recorded membership
    pub organization_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_membership_serializes_as_null() {
        let response = OrganizationMembershipResponse {
            user_id: "u2".to_string(),
            organization_id: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["user_id"], "u2");
        assert!(value["organization_id"].is_null());
    }

    #[test]
    fn test_present_membership_serializes_id() {
        let response = OrganizationMembershipResponse {
            user_id: "u1".to_string(),
            organization_id: Some("org_a".to_string()),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["organization_id"], "org_a");
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity extracted from a validated access token.
///
/// `sub` is the owning user id for every record in the system; the service
/// trusts it as-is and performs no further identity checks.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

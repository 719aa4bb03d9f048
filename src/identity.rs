//! System identity used for audit attribution.
//!
//! Every variable map handed to the Workflow Engine and every outbound
//! administrative command carries the identity of the actor on whose behalf
//! the core acted. Event-driven flows run as the platform system user.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Fixed id of the platform system user
pub const SYSTEM_USER_ID: Uuid = uuid!("9f1c7e4a-0d2b-4c8e-b5a3-7e6f5d4c3b2a");

/// Display name of the platform system user
pub const SYSTEM_USER_NAME: &str = "Case Progression System";

/// The identity attached to derived variables and outbound commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemIdentity {
    pub user_id: Uuid,
    pub user_name: String,
}

impl SystemIdentity {
    pub fn new(user_id: Uuid, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }

    /// The platform system user, used for all event-driven processing
    pub fn system() -> Self {
        Self {
            user_id: SYSTEM_USER_ID,
            user_name: SYSTEM_USER_NAME.to_string(),
        }
    }
}

impl Default for SystemIdentity {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_identity_is_stable() {
        let a = SystemIdentity::system();
        let b = SystemIdentity::default();
        assert_eq!(a, b);
        assert_eq!(a.user_name, "Case Progression System");
    }
}

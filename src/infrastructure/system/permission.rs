//! Permission adapter for hosts without a runtime notification permission

use async_trait::async_trait;

use crate::application::ports::PermissionGate;

/// Desktop sessions do not gate notifications behind a runtime grant
#[derive(Debug, Default, Clone, Copy)]
pub struct GrantedPermission;

#[async_trait]
impl PermissionGate for GrantedPermission {
    fn is_permission_denied(&self) -> bool {
        false
    }

    async fn request_permission(&self) -> bool {
        true
    }
}

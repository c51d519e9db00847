//! Notification permission port interface

use async_trait::async_trait;

/// Port for the runtime permission to post notifications.
///
/// Results are informational: posting proceeds either way and the host
/// drops notifications it is not permitted to show.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Whether posting notifications is currently denied
    fn is_permission_denied(&self) -> bool;

    /// Ask the user for permission.
    ///
    /// # Returns
    /// Whether the permission was granted
    async fn request_permission(&self) -> bool;
}

/// Blanket implementation for boxed permission gates
#[async_trait]
impl PermissionGate for Box<dyn PermissionGate> {
    fn is_permission_denied(&self) -> bool {
        self.as_ref().is_permission_denied()
    }

    async fn request_permission(&self) -> bool {
        self.as_ref().request_permission().await
    }
}

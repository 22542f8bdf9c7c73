//! Vortex SDK integration glue.
//!
//! The SDK's client and route controller are external; this module
//! supplies the only two things they need from the host application:
//! "who is making this request" and "is this operation authorized".
//! Both hooks are modeled as a trait so the demo wiring can be swapped
//! for a real policy without touching the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use session_auth::InMemoryUserStore;
use session_auth::SessionService;
use session_auth::Sha256Hasher;
use session_auth::User;

/// Route patterns the SDK mounts on the host router; surfaced by the
/// health check.
pub const VORTEX_ROUTES: &[&str] = &[
    "/api/vortex/jwt",
    "/api/vortex/invitations",
    "/api/vortex/invitations/:id",
    "/api/vortex/invitations/accept",
    "/api/vortex/invitations/by-group/:type/:id",
    "/api/vortex/invitations/:id/reinvite",
];

/// User identity in the SDK's simplified format (preferred).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VortexUser {
    pub id: String,
    pub email: String,
    pub auto_join_admin: bool,
}

impl From<&User> for VortexUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            auto_join_admin: user.auto_join_admin,
        }
    }
}

/// User identity in the SDK's legacy format (deprecated but still
/// supported): explicit identifiers plus role and group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyVortexUser {
    pub id: String,
    pub identifiers: Vec<InvitationTarget>,
    pub groups: Vec<InvitationGroup>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationTarget {
    #[serde(rename = "type")]
    pub target_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub name: String,
}

impl From<&User> for LegacyVortexUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            identifiers: vec![InvitationTarget {
                target_type: "email".to_string(),
                value: user.email.clone(),
            }],
            groups: user
                .groups
                .iter()
                .flatten()
                .map(|g| InvitationGroup {
                    id: g.id.clone(),
                    group_type: g.group_type.clone(),
                    name: g.name.clone(),
                })
                .collect(),
            role: user.role.clone(),
        }
    }
}

/// The two callbacks the SDK consumes from the host.
#[async_trait]
pub trait VortexHooks: Send + Sync + 'static {
    /// Resolve the caller from the request's `Cookie` header.
    ///
    /// `None` means unauthenticated; the SDK treats it as such.
    async fn authenticate_user(&self, cookie_header: Option<&str>) -> Option<VortexUser>;

    /// Decide whether the (possibly absent) user may perform the
    /// operation.
    fn authorize_operation(&self, operation: &str, user: Option<&VortexUser>) -> bool;
}

/// Demo wiring of the hooks over the session service.
pub struct DemoVortexHooks {
    auth_service: Arc<SessionService<InMemoryUserStore, Sha256Hasher>>,
}

impl DemoVortexHooks {
    pub fn new(auth_service: Arc<SessionService<InMemoryUserStore, Sha256Hasher>>) -> Self {
        Self { auth_service }
    }
}

#[async_trait]
impl VortexHooks for DemoVortexHooks {
    async fn authenticate_user(&self, cookie_header: Option<&str>) -> Option<VortexUser> {
        match self.auth_service.current_user(cookie_header).await {
            Ok(user) => user.as_ref().map(VortexUser::from),
            Err(e) => {
                // A store fault is not "unauthenticated"; the hook
                // contract only lets us return absence, so log loudly
                tracing::error!("User resolution failed in vortex hook: {}", e);
                None
            }
        }
    }

    fn authorize_operation(&self, _operation: &str, user: Option<&VortexUser>) -> bool {
        // Demo placeholder policy: every authenticated user may perform
        // every operation. Replace with real access control.
        user.is_some()
    }
}

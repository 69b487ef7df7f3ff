use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::models::Role;

/// Who is making the request. Provider and booking routes serve anonymous
/// callers; the seam exists so a real token validator can slot in without
/// touching handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum CallerIdentity {
    Anonymous,
    Authenticated { email: String, role: Role },
}

impl std::fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallerIdentity::Anonymous => write!(f, "anonymous"),
            CallerIdentity::Authenticated { email, .. } => write!(f, "{email}"),
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn identify(&self, headers: &HeaderMap) -> CallerIdentity;
}

/// The shipped implementation: every caller is anonymous.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn identify(&self, _headers: &HeaderMap) -> CallerIdentity {
        CallerIdentity::Anonymous
    }
}

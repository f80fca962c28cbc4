//! Request context extraction from the `Authorization: Bearer` header

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use catalog_core::{RequestContext, TenantRole};
use catalog_security::{Claims, JwtService};
use catalog_shared::utils::parse_uuid;

use crate::error::ApiError;

/// Identity of the caller, verified from an access token.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl<S> FromRequestParts<S> for Caller
where
    JwtService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        let jwt = JwtService::from_ref(state);
        let claims = jwt
            .validate_access_token(token)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        context_from_claims(&claims).map(Caller)
    }
}

fn context_from_claims(claims: &Claims) -> Result<RequestContext, ApiError> {
    let user_id = parse_uuid(&claims.sub)
        .ok_or_else(|| ApiError::Unauthorized("invalid subject claim".to_string()))?;
    let tenant_id = parse_uuid(&claims.tenant_id)
        .ok_or_else(|| ApiError::Unauthorized("invalid tenant claim".to_string()))?;
    let role = TenantRole::from_str(&claims.role)
        .ok_or_else(|| ApiError::Unauthorized(format!("unknown role: {}", claims.role)))?;

    Ok(RequestContext::new(tenant_id, user_id, role))
}

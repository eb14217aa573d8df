use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::DynJwtService,
    config::TokenClaims,
    errors::{ErrorResponse, HttpError},
    model::UserRole,
};

/// Accepts the access token from either the `token` cookie or a Bearer
/// header and stashes the verified claims in the request extensions.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail(
                    "You are not logged in, please provide token",
                )),
            ));
        }
    };

    let claims: TokenClaims = match jwt.verify_token(&token, "access") {
        Ok(claims) => claims,
        Err(_) => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail("Invalid token")),
            ));
        }
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

pub fn ensure_vendor(claims: &TokenClaims) -> Result<(), HttpError> {
    match claims.role {
        UserRole::Vendor | UserRole::Admin => Ok(()),
        _ => Err(HttpError::Forbidden(
            "Vendor privileges required".to_string(),
        )),
    }
}

pub fn ensure_admin(claims: &TokenClaims) -> Result<(), HttpError> {
    match claims.role {
        UserRole::Admin => Ok(()),
        _ => Err(HttpError::Forbidden("Admin privileges required".to_string())),
    }
}

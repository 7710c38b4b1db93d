//! Bearer token middleware
//!
//! Validates `Authorization: Bearer <token>` on protected scopes and stores the
//! caller as an [`AuthenticatedUser`] in the request extensions.

use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::security::JwtService;
use crate::utils::errors::YogaStudioError;

/// Caller identity taken from a validated token
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
}

/// Middleware factory rejecting requests without a valid bearer token
#[derive(Clone)]
pub struct JwtAuth {
    jwt: JwtService,
}

impl JwtAuth {
    pub fn new(jwt: JwtService) -> Self {
        Self { jwt }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthService {
            service: Rc::new(service),
            jwt: self.jwt.clone(),
        }))
    }
}

pub struct JwtAuthService<S> {
    service: Rc<S>,
    jwt: JwtService,
}

impl<S> JwtAuthService<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<AuthenticatedUser, YogaStudioError> {
        let header = req
            .headers()
            .get("Authorization")
            .ok_or_else(|| YogaStudioError::Authentication("Missing Authorization header".to_string()))?
            .to_str()
            .map_err(|_| YogaStudioError::Authentication("Invalid Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| YogaStudioError::Authentication("Expected a Bearer token".to_string()))?;

        let claims = self.jwt.validate(token.trim())?;
        Ok(AuthenticatedUser {
            id: claims.uid,
            email: claims.sub,
        })
    }
}

impl<S, B> Service<ServiceRequest> for JwtAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Header borrows must end before extensions_mut()
        let outcome = self.authenticate(&req);
        let service = self.service.clone();

        Box::pin(async move {
            match outcome {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    debug!(path = %req.path(), "Rejected unauthenticated request: {}", e);
                    let response = e.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().cloned() {
            Some(user) => ready(Ok(user)),
            None => ready(Err(YogaStudioError::Authentication(
                "Authentication required".to_string(),
            )
            .into())),
        }
    }
}

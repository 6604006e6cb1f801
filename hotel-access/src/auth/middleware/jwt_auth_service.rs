use super::JwtAuthFuture;
use crate::auth::dto::{JwtClaims, User};
use anyhow::anyhow;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue},
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, validation: Arc<Validation>, key: Arc<DecodingKey>) -> Self {
        Self {
            inner,
            validation,
            key,
        }
    }

    fn parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<User> {
        let authorization_header =
            authorization_header.ok_or_else(|| anyhow!("missing Authorization header"))?;
        let authorization_value = authorization_header
            .to_str()
            .map_err(|_| anyhow!("illegal character in Authorization header"))?;
        let token = authorization_value
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| anyhow!("unsupported authorization type"))?;

        let token_data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|err| anyhow!("invalid jwt: {err}"))?;

        Ok(User::new(token_data.claims.sub))
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let authorization_header = req.headers().get(AUTHORIZATION);

        match self.parse_authorization_header(authorization_header) {
            Ok(user) => {
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                JwtAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "auth error");
                JwtAuthFuture::Unauthorized
            }
        }
    }
}

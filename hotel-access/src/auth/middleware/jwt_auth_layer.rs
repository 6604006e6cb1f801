use super::JwtAuthService;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Layer that validates JWT in Authorization header.
///
/// When token is valid [crate::auth::User] is added to request extensions,
/// otherwise request is rejected with 401.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(inner, self.validation.clone(), self.key.clone())
    }
}

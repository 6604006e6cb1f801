use super::ApplicationEnv;
use crate::auth::JwtAuthLayer;
use jsonwebtoken::{Algorithm, DecodingKey};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

impl ApplicationMiddleware {
    pub fn new(jwt_key: DecodingKey, jwt_algorithms: Vec<Algorithm>) -> Self {
        let auth = JwtAuthLayer::new(jwt_key, jwt_algorithms);
        let trace = TraceLayer::new_for_http();

        Self { auth, trace }
    }
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    ApplicationMiddleware::new(env.jwt_key.clone(), env.jwt_algorithms.clone())
}

use super::ApplicationEnv;
use jwt_auth::JwtAuthLayer;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub timeout: TimeoutLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let auth = JwtAuthLayer::new(
        env.jwt_decoding_key.clone(),
        env.jwt_algorithms.clone(),
        &env.jwt_issuer,
    );

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    // Dropping the handler future drops its transaction which rolls it back
    let timeout = TimeoutLayer::new(env.request_timeout);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        auth,
        body_limit,
        timeout,
        trace,
    }
}

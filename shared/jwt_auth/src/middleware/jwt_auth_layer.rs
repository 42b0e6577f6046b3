use super::jwt_auth_service::JwtAuthService;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Layer that validates JWT in Authorization header.
/// If token is correct [crate::User] is added to request extensions,
/// otherwise 401 is returned and inner service is not called.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl JwtAuthLayer {
    ///
    /// Algorithms must belong to the same family
    ///
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>, issuer: &str) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

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

#[cfg(test)]
mod test {
    use super::*;
    use crate::User;
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{AUTHORIZATION, CONTENT_TYPE},
            HeaderValue, Method, Request, StatusCode,
        },
        routing::get,
        Extension, Router,
    };
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;
    use serde_json::Value;
    use tower::ServiceExt;

    const SECRET: &[u8] = b"some secret";
    const ISSUER: &str = "event-booking";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        iss: &'a str,
        iat: u64,
        exp: u64,
    }

    fn encode(claims: &TestClaims, key: &[u8]) -> String {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(key),
        )
        .unwrap();

        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn missing_authorization_header() {
        let message = test_invalid_authorization_header(None).await;

        assert_eq!(message, "missing Authorization header");
    }

    #[tokio::test]
    async fn invalid_authorization_header() {
        test_invalid_authorization_header("invalid characters ąćś").await;
    }

    #[tokio::test]
    async fn authorization_type_not_bearer() {
        test_invalid_authorization_header("NotBearer").await;
    }

    #[tokio::test]
    async fn invalid_token() {
        test_invalid_authorization_header("Bearer that's not correct JWT").await;
    }

    #[tokio::test]
    async fn expired_token() {
        let authorization = encode(
            &TestClaims {
                sub: "admin",
                iss: ISSUER,
                iat: 0,
                exp: 12312,
            },
            SECRET,
        );
        let message = test_invalid_authorization_header(authorization.as_str()).await;

        assert!(message.starts_with("invalid jwt"));
    }

    #[tokio::test]
    async fn invalid_signature() {
        let authorization = encode(
            &TestClaims {
                sub: "admin",
                iss: ISSUER,
                iat: 0,
                exp: 253402210800,
            },
            b"Wrong key",
        );
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn invalid_issuer() {
        let authorization = encode(
            &TestClaims {
                sub: "admin",
                iss: "somebody else",
                iat: 0,
                exp: 253402210800,
            },
            SECRET,
        );
        test_invalid_authorization_header(authorization.as_str()).await;
    }

    #[tokio::test]
    async fn correct_request_extension() {
        let authorization = encode(
            &TestClaims {
                sub: "admin",
                iss: ISSUER,
                iat: 0,
                exp: 253402210800,
            },
            SECRET,
        );

        let router = Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move {
                    match user.subject == "admin" {
                        true => StatusCode::OK,
                        false => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                }),
            )
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
                ISSUER,
            ));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK)
    }

    ///
    /// Returns message of the JSON error body
    ///
    async fn test_invalid_authorization_header(authorization: impl Into<Option<&str>>) -> String {
        let router = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .route_layer(JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET),
                vec![Algorithm::HS256],
                ISSUER,
            ));

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        if let Some(authorization) = authorization.into() {
            request
                .headers_mut()
                .insert(AUTHORIZATION, HeaderValue::try_from(authorization).unwrap());
        }

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice::<Value>(&bytes).unwrap();

        body["message"].as_str().unwrap().to_string()
    }
}

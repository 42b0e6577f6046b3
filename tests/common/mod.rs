#![allow(dead_code)]

use jwt_auth::test::{create_expired_jwt, create_jwt};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};
use std::{fmt::Display, sync::Once};

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("EVENT_BOOKING_BIND_ADDRESS").unwrap()
}

pub fn create_user_jwt() -> String {
    encode_jwt(false)
}

pub fn create_expired_user_jwt() -> String {
    encode_jwt(true)
}

fn encode_jwt(expired: bool) -> String {
    let jwt_algorithms = std::env::var("EVENT_BOOKING_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("EVENT_BOOKING_JWT_ENCODING_KEY").unwrap();
    let issuer = std::env::var("EVENT_BOOKING_JWT_ISSUER").unwrap();

    match expired {
        true => create_expired_jwt("test-user", &issuer, jwt_algorithms, jwt_key),
        false => create_jwt("test-user", &issuer, jwt_algorithms, jwt_key),
    }
}

///
/// Creates event through HTTP API and returns response body
///
pub async fn create_event(client: &Client, number_of_tickets: i32) -> Value {
    let response = client
        .post(format!("http://{}/events", address()))
        .bearer_auth(create_user_jwt())
        .header(CONTENT_TYPE, "application/json")
        .body(
            json!({
                "name": "Rust meetup",
                "description": "Talks about ownership",
                "number_of_tickets": number_of_tickets,
                "start_date_time": "2030-05-01T18:00:00+02:00",
                "duration": 120
            })
            .to_string(),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response_body = response.bytes().await.unwrap();
    serde_json::from_slice::<Value>(&response_body).unwrap()
}

pub async fn book_tickets(
    client: &Client,
    event_id: impl Display,
    customer_name: &str,
    quantity: i32,
) -> reqwest::Response {
    client
        .post(format!("http://{}/events/{}/tickets", address(), event_id))
        .bearer_auth(create_user_jwt())
        .header(CONTENT_TYPE, "application/json")
        .body(
            json!({
                "customer_name": customer_name,
                "quantity": quantity
            })
            .to_string(),
        )
        .send()
        .await
        .unwrap()
}

pub async fn find_event(client: &Client, event_id: impl Display) -> Value {
    let response = client
        .get(format!("http://{}/events/{}", address(), event_id))
        .bearer_auth(create_user_jwt())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response_body = response.bytes().await.unwrap();
    serde_json::from_slice::<Value>(&response_body).unwrap()
}

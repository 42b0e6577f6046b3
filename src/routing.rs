use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::{
        auth_service::AuthService, events_service::EventsService,
        tickets_service::TicketsService,
    },
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", get(get_event))
        .route("/events/:id/tickets", post(book_tickets))
        .route_layer(application_middleware.auth.clone())
        .route("/auth/login", post(login))
}

async fn login(
    State(service): State<Arc<dyn AuthService>>,
    credentials: Result<Json<input::Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<output::AccessToken>), Error> {
    let Json(credentials) = credentials?;
    let access_token = service.login(credentials).await?;

    Ok((StatusCode::OK, Json(access_token)))
}

async fn create_event(
    State(service): State<Arc<dyn EventsService>>,
    event: Result<Json<input::Event>, JsonRejection>,
) -> Result<(StatusCode, Json<output::Event>), Error> {
    let Json(event) = event?;
    let event = service.create_event(event).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

async fn get_event(
    State(service): State<Arc<dyn EventsService>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<output::Event>), Error> {
    let Path(id) = id?;
    let event = service.find_event(id).await?;

    Ok((StatusCode::OK, Json(event)))
}

async fn book_tickets(
    State(service): State<Arc<dyn TicketsService>>,
    event_id: Result<Path<i64>, PathRejection>,
    booking: Result<Json<input::Booking>, JsonRejection>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let Path(event_id) = event_id?;
    let Json(booking) = booking?;
    let ticket = service.book_tickets(event_id, booking).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

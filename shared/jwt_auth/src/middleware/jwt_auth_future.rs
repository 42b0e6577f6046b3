use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pin_project::pin_project;
use serde::Serialize;
use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
};
use tracing::Span;

/// Same shape as error bodies of the services
#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

#[pin_project(project = JwtAuthFutureProj)]
pub enum JwtAuthFuture<F> {
    Authorized {
        #[pin]
        inner: F,

        /// span that should be used to add
        /// user context to request processing
        span: Span,
    },
    Unauthorized {
        message: String,
    },
}

impl<F, E> Future for JwtAuthFuture<F>
where
    F: Future<Output = Result<Response, E>>,
{
    type Output = Result<Response, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = match self.project() {
            JwtAuthFutureProj::Authorized { inner, span } => {
                let _entered = span.enter();
                ready!(inner.poll(cx))
            }
            JwtAuthFutureProj::Unauthorized { message } => {
                let message = std::mem::take(message);
                Ok((StatusCode::UNAUTHORIZED, Json(ErrorMessage { message })).into_response())
            }
        };

        Poll::Ready(result)
    }
}

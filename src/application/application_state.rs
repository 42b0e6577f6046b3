use super::ApplicationEnv;
use crate::{
    repository::{
        EventsRepository, EventsRepositoryImpl, PgTransaction, PgTransactionManager,
        TicketsRepository, TicketsRepositoryImpl,
    },
    service::{
        auth_service::{AuthService, AuthServiceConfig, AuthServiceImpl},
        events_service::{EventsService, EventsServiceImpl},
        tickets_service::{TicketsService, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use jwt_auth::JwtIssuer;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub auth_service: Arc<dyn AuthService>,
    pub events_service: Arc<dyn EventsService>,
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new()
        .max_connections(env.db_max_connections)
        .connect(&env.db_connection_string)
        .await?;

    tracing::info!("creating repositories");
    let transaction_manager = Arc::new(PgTransactionManager::new(db_pool.clone()));
    let events_repository: Arc<dyn EventsRepository<PgTransaction>> =
        Arc::new(EventsRepositoryImpl::new(&db_pool).await?);
    let tickets_repository: Arc<dyn TicketsRepository<PgTransaction>> =
        Arc::new(TicketsRepositoryImpl::new(&db_pool).await?);

    tracing::info!("creating services");
    let config = AuthServiceConfig {
        username: env.login_username.clone(),
        password: env.login_password.clone(),
    };
    let jwt_algorithm = *env
        .jwt_algorithms
        .first()
        .ok_or(anyhow::anyhow!("missing jwt algorithm"))?;
    let issuer = JwtIssuer::new(
        jwt_algorithm,
        env.jwt_encoding_key.clone(),
        env.jwt_issuer.clone(),
        env.jwt_lifespan,
    );
    let auth_service = AuthServiceImpl::new(config, issuer);
    let auth_service = Arc::new(auth_service);

    let events_service =
        EventsServiceImpl::new(transaction_manager.clone(), events_repository.clone());
    let events_service = Arc::new(events_service);

    let tickets_service =
        TicketsServiceImpl::new(transaction_manager, events_repository, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState {
            auth_service,
            events_service,
            tickets_service,
        },
        ApplicationStateToClose { db_pool },
    ))
}

//! HTTP API — application state and router assembly.
//!
//! `POST /login` is the only public route; everything else sits behind
//! the bearer-token middleware.

pub mod auth;
mod error;
mod handlers;
pub mod types;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use helpdesk_core::storage::Storage;
use helpdesk_service::Helpdesk;

use crate::config::ServerConfig;

pub use error::ApiError;

pub struct AppState<S: Storage> {
    pub desk: Arc<Helpdesk<S>>,
    pub config: Arc<ServerConfig>,
}

impl<S: Storage> AppState<S> {
    pub fn new(desk: Helpdesk<S>, config: ServerConfig) -> Self {
        Self {
            desk: Arc::new(desk),
            config: Arc::new(config),
        }
    }
}

impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            desk: Arc::clone(&self.desk),
            config: Arc::clone(&self.config),
        }
    }
}

pub fn router<S: Storage + 'static>(state: AppState<S>) -> Router {
    let protected = Router::new()
        .route(
            "/tickets",
            get(handlers::list_tickets::<S>).post(handlers::create_ticket::<S>),
        )
        .route("/tickets/{id}", put(handlers::update_ticket::<S>))
        .route(
            "/tickets/{id}/activities",
            get(handlers::list_activities::<S>),
        )
        .route("/tickets/{id}/comments", post(handlers::add_comment::<S>))
        .route("/assets", get(handlers::list_assets::<S>))
        .route("/clients", get(handlers::list_clients::<S>))
        .route("/users", get(handlers::list_users::<S>))
        .route("/users/{id}", put(handlers::update_user::<S>))
        .route("/dashboard", get(handlers::dashboard::<S>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer::<S>,
        ));

    Router::new()
        .route("/login", post(handlers::login::<S>))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

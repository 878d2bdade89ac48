//! Route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use helpdesk_core::error::HelpdeskError;
use helpdesk_core::inventory::AssetFilter;
use helpdesk_core::models::activity::{ActivityKind, NewActivity};
use helpdesk_core::storage::Storage;
use helpdesk_core::triage::{self, TicketBucket};

use crate::api::auth::AuthUser;
use crate::api::error::ApiError;
use crate::api::types::{
    ActivityDto, AssetDto, ClientDto, CommentRequest, CreateTicketRequest, DashboardDto,
    LoginRequest, LoginResponse, TicketDto, UpdateTicketRequest, UpdateUserRequest, UserDto,
};
use crate::api::AppState;
use crate::token;

// -----------------------------------------------------------------------
// Auth
// -----------------------------------------------------------------------

pub async fn login<S: Storage>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state.desk.login(&body.email).await?;
    let token = token::issue(&user, &state.config)?;
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

// -----------------------------------------------------------------------
// Tickets
// -----------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct TicketListQuery {
    pub bucket: Option<TicketBucket>,
}

pub async fn list_tickets<S: Storage>(
    State(state): State<AppState<S>>,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<Vec<TicketDto>>, ApiError> {
    let tickets = state.desk.list_tickets().await?;
    let bucket = query.bucket.unwrap_or(TicketBucket::All);
    let selected: Vec<TicketDto> = triage::filter(&tickets, bucket)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    Ok(Json(selected))
}

pub async fn create_ticket<S: Storage>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(acting)): Extension<AuthUser>,
    Json(body): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketDto>), ApiError> {
    let data = body.into_new_ticket()?;
    let ticket = state.desk.create_ticket(data, &acting).await?;
    Ok((StatusCode::CREATED, Json(ticket.into())))
}

pub async fn update_ticket<S: Storage>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(acting)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTicketRequest>,
) -> Result<Json<TicketDto>, ApiError> {
    let patch = body.into_patch()?;
    let ticket = state.desk.update_ticket(id, patch, &acting).await?;
    Ok(Json(ticket.into()))
}

// -----------------------------------------------------------------------
// Activities
// -----------------------------------------------------------------------

pub async fn list_activities<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ActivityDto>>, ApiError> {
    let activities = state.desk.activities_for(id).await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

pub async fn add_comment<S: Storage>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(acting)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ActivityDto>), ApiError> {
    if body.conteudo.trim().is_empty() {
        return Err(HelpdeskError::Validation {
            message: "conteudo must not be empty".into(),
        }
        .into());
    }
    let activity = state
        .desk
        .add_activity(NewActivity {
            ticket_id: id,
            author: acting.user_ref(),
            content: body.conteudo,
            kind: ActivityKind::Comment,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

// -----------------------------------------------------------------------
// Reference data & dashboard
// -----------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AssetListQuery {
    pub cliente_id: Option<Uuid>,
    pub q: Option<String>,
}

pub async fn list_assets<S: Storage>(
    State(state): State<AppState<S>>,
    Query(query): Query<AssetListQuery>,
) -> Result<Json<Vec<AssetDto>>, ApiError> {
    let assets = state.desk.list_assets().await?;
    let filter = AssetFilter {
        client_id: query.cliente_id,
        query: query.q.unwrap_or_default(),
        include_serial: true,
    };
    let selected: Vec<AssetDto> = filter
        .apply(&assets)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    Ok(Json(selected))
}

pub async fn list_clients<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ClientDto>>, ApiError> {
    let clients = state.desk.list_clients().await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

pub async fn list_users<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.desk.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn update_user<S: Storage>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.desk.update_user(id, body.into()).await?;
    Ok(Json(user.into()))
}

pub async fn dashboard<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<DashboardDto>, ApiError> {
    let tickets = state.desk.list_tickets().await?;
    Ok(Json(triage::counts(&tickets).into()))
}

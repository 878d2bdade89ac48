//! Wire types for the HTTP API.
//!
//! Bodies use the relational schema's snake_case column names
//! (`titulo`, `cliente_id`, `solicitante_id`, ...); topic and demand
//! enums travel as their numeric column codes (`topico_id`,
//! `tipo_id`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use helpdesk_core::error::{HelpdeskError, HelpdeskResult};
use helpdesk_core::models::activity::{Activity, ActivityKind};
use helpdesk_core::models::asset::Asset;
use helpdesk_core::models::client::{Client, Requester};
use helpdesk_core::models::ticket::{
    Attachment, DemandType, NewTicket, Ticket, TicketLabel, TicketPatch, TicketStatus,
};
use helpdesk_core::models::user::{Permissions, UpdateUser, User, UserRole};
use helpdesk_core::triage::BucketCounts;

// -----------------------------------------------------------------------
// Auth
// -----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

// -----------------------------------------------------------------------
// Users
// -----------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub perfil: UserRole,
    pub permissoes: Permissions,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
            perfil: user.role,
            permissoes: user.permissions,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub perfil: Option<UserRole>,
    pub permissoes: Option<Permissions>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            name: body.nome,
            email: body.email,
            role: body.perfil,
            permissions: body.permissoes,
        }
    }
}

// -----------------------------------------------------------------------
// Tickets
// -----------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AttachmentDto {
    pub id: Uuid,
    pub nome_arquivo: String,
    pub tamanho: u64,
    pub mime: String,
    pub dados: String,
}

impl From<Attachment> for AttachmentDto {
    fn from(a: Attachment) -> Self {
        Self {
            id: a.id,
            nome_arquivo: a.file_name,
            tamanho: a.file_size,
            mime: a.mime_type,
            dados: a.data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketDto {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub cliente_id: Uuid,
    pub solicitante_id: Uuid,
    pub ativo_ids: Vec<String>,
    pub topico_id: u8,
    pub tipo_id: u8,
    pub status: TicketStatus,
    pub responsavel_id: Option<Uuid>,
    pub usuario_alteracao_id: Uuid,
    pub usuario_alteracao_nome: String,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub anexos: Vec<AttachmentDto>,
}

impl From<Ticket> for TicketDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            titulo: t.title,
            descricao: t.description,
            cliente_id: t.client_id,
            solicitante_id: t.requester_id,
            ativo_ids: t.asset_ids,
            topico_id: t.label.code(),
            tipo_id: t.demand.code(),
            status: t.status,
            responsavel_id: t.assignee_id,
            usuario_alteracao_id: t.last_updated_by.id,
            usuario_alteracao_nome: t.last_updated_by.name,
            criado_em: t.created_at,
            atualizado_em: t.updated_at,
            anexos: t.attachments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub titulo: String,
    pub descricao: String,
    pub cliente_id: Uuid,
    pub solicitante_id: Uuid,
    #[serde(default)]
    pub ativo_ids: Vec<String>,
    pub topico_id: u8,
    pub tipo_id: u8,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub responsavel_id: Option<Uuid>,
}

impl CreateTicketRequest {
    /// Boundary validation: required text fields must be non-blank and
    /// the enum codes must exist.
    pub fn into_new_ticket(self) -> HelpdeskResult<NewTicket> {
        if self.titulo.trim().is_empty() {
            return Err(validation("titulo must not be empty"));
        }
        if self.descricao.trim().is_empty() {
            return Err(validation("descricao must not be empty"));
        }
        Ok(NewTicket {
            title: self.titulo,
            description: self.descricao,
            client_id: self.cliente_id,
            requester_id: self.solicitante_id,
            asset_ids: self.ativo_ids,
            label: label_from_code(self.topico_id)?,
            demand: demand_from_code(self.tipo_id)?,
            status: self.status.unwrap_or(TicketStatus::AwaitingService),
            assignee_id: self.responsavel_id,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTicketRequest {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub cliente_id: Option<Uuid>,
    pub solicitante_id: Option<Uuid>,
    pub ativo_ids: Option<Vec<String>>,
    pub topico_id: Option<u8>,
    pub tipo_id: Option<u8>,
    pub status: Option<TicketStatus>,
    /// Absent = no change, `null` = unassign, value = assign.
    #[serde(default, deserialize_with = "double_option")]
    pub responsavel_id: Option<Option<Uuid>>,
}

impl UpdateTicketRequest {
    pub fn into_patch(self) -> HelpdeskResult<TicketPatch> {
        Ok(TicketPatch {
            title: self.titulo,
            description: self.descricao,
            client_id: self.cliente_id,
            requester_id: self.solicitante_id,
            asset_ids: self.ativo_ids,
            label: self.topico_id.map(label_from_code).transpose()?,
            demand: self.tipo_id.map(demand_from_code).transpose()?,
            status: self.status,
            assignee_id: self.responsavel_id,
            attachments: None,
        })
    }
}

// -----------------------------------------------------------------------
// Activities
// -----------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ActivityDto {
    pub id: Uuid,
    pub chamado_id: Uuid,
    pub autor_id: Uuid,
    pub autor_nome: String,
    pub conteudo: String,
    pub tipo: ActivityKind,
    pub criado_em: DateTime<Utc>,
}

impl From<Activity> for ActivityDto {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            chamado_id: a.ticket_id,
            autor_id: a.author.id,
            autor_nome: a.author.name,
            conteudo: a.content,
            tipo: a.kind,
            criado_em: a.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub conteudo: String,
}

// -----------------------------------------------------------------------
// Reference data & dashboard
// -----------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RequesterDto {
    pub id: Uuid,
    pub nome: String,
}

impl From<Requester> for RequesterDto {
    fn from(r: Requester) -> Self {
        Self {
            id: r.id,
            nome: r.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClientDto {
    pub id: Uuid,
    pub nome: String,
    pub contato: String,
    pub solicitantes: Vec<RequesterDto>,
}

impl From<Client> for ClientDto {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            nome: c.name,
            contato: c.contact_person,
            solicitantes: c.requesters.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssetDto {
    pub id: String,
    pub cliente_id: Uuid,
    pub tipo: String,
    pub marca: String,
    pub modelo: String,
    pub numero_serie: String,
    pub ultima_manutencao: Option<DateTime<Utc>>,
}

impl From<Asset> for AssetDto {
    fn from(a: Asset) -> Self {
        Self {
            id: a.id,
            cliente_id: a.client_id,
            tipo: a.kind,
            marca: a.brand,
            modelo: a.model,
            numero_serie: a.serial_number,
            ultima_manutencao: a.last_maintenance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardDto {
    pub abertos: usize,
    pub em_atendimento: usize,
    pub aguardando: usize,
    pub encerrados: usize,
    pub total: usize,
}

impl From<BucketCounts> for DashboardDto {
    fn from(c: BucketCounts) -> Self {
        Self {
            abertos: c.open,
            em_atendimento: c.in_progress,
            aguardando: c.waiting,
            encerrados: c.closed,
            total: c.all,
        }
    }
}

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn validation(message: &str) -> HelpdeskError {
    HelpdeskError::Validation {
        message: message.into(),
    }
}

fn label_from_code(code: u8) -> HelpdeskResult<TicketLabel> {
    TicketLabel::from_code(code).ok_or_else(|| validation("unknown topico_id"))
}

fn demand_from_code(code: u8) -> HelpdeskResult<DemandType> {
    DemandType::from_code(code).ok_or_else(|| validation("unknown tipo_id"))
}

/// Distinguish an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

// src/models/note.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "note_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,

    #[schema(example = "Pedir mais estoque")]
    pub title: String,

    pub content: String,

    pub priority: NotePriority,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, message = "O título é obrigatório"))]
    pub title: String,

    #[validate(length(min = 1, message = "O conteúdo é obrigatório"))]
    pub content: String,

    pub priority: NotePriority,
}

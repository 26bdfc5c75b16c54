// src/services/note_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::NoteRepository,
    models::note::{CreateNoteRequest, Note},
};

#[derive(Clone)]
pub struct NoteService {
    note_repo: NoteRepository,
}

impl NoteService {
    pub fn new(note_repo: NoteRepository) -> Self {
        Self { note_repo }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, AppError> {
        self.note_repo.find_all().await
    }

    pub async fn create_note(&self, payload: CreateNoteRequest) -> Result<Note, AppError> {
        self.note_repo
            .create(&payload.title, &payload.content, payload.priority)
            .await
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.note_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NoteNotFound);
        }
        Ok(())
    }
}

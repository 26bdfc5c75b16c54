// src/db/note_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::note::{Note, NotePriority},
};

#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        priority: NotePriority,
    ) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, priority)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

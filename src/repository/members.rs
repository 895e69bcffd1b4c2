//! Members repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members in id order
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM member ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM member WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Insert a member; the join date is set by the database
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        let mut tx = self.pool.begin().await?;

        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO member (name, email) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(member)
    }

    /// Overwrite the supplied fields, keeping the others
    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        let mut tx = self.pool.begin().await?;

        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE member
            SET name = COALESCE($1, name),
                email = COALESCE($2, email)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref())
        .bind(data.email.as_deref())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

        tx.commit().await?;
        Ok(member)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM member WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}

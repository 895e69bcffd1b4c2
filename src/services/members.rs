//! Member management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    repository::LibraryStore,
};

#[derive(Clone)]
pub struct MembersService {
    store: Arc<dyn LibraryStore>,
}

impl MembersService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        self.store.list_members().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.store.get_member(id).await
    }

    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        let member = self.store.create_member(data).await?;
        tracing::info!(member_id = member.id, "member created");
        Ok(member)
    }

    /// Apply a partial update. An empty payload returns the stored member untouched.
    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        if data.is_empty() {
            return self.store.get_member(id).await;
        }
        let member = self.store.update_member(id, data).await?;
        tracing::info!(member_id = id, "member updated");
        Ok(member)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete_member(id).await?;
        tracing::info!(member_id = id, "member deleted");
        Ok(())
    }
}

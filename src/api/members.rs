//! Member management endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, MemberShort, UpdateMember},
    AppState,
};

use super::{DeletedResponse, RecordId, ValidatedJson};

/// Body returned after creating or updating a member
#[derive(Debug, Serialize, ToSchema)]
pub struct MemberResponse {
    pub success: bool,
    pub member: MemberShort,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            success: true,
            member: member.into(),
        }
    }
}

/// Create a new member
#[utoipa::path(
    post,
    path = "/library/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = MemberResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 500, description = "Store error, e.g. duplicate email", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateMember>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    let member = state.services.members.create(&data).await?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// List all members
#[utoipa::path(
    get,
    path = "/library/members",
    tag = "members",
    responses(
        (status = 200, description = "List of members", body = Vec<Member>)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.list().await?;
    Ok(Json(members))
}

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/library/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_by_id(id).await?;
    Ok(Json(member))
}

/// Update name and/or email of a member
#[utoipa::path(
    put,
    path = "/library/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store error, e.g. duplicate email", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(data): ValidatedJson<UpdateMember>,
) -> AppResult<Json<MemberResponse>> {
    let member = state.services.members.update(id, &data).await?;
    Ok(Json(member.into()))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/library/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = DeletedResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<DeletedResponse>> {
    state.services.members.delete(id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        message: "Member deleted".to_string(),
    }))
}

// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::{UpdateAvatarCommand, UpdateIntroduceCommand, UpdateMottoCommand},
    dto::{FileResponseDto, UserResponseDto, UserSearchDto},
    ports::image_store::ImageUpload,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMottoRequest {
    pub motto: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateIntroduceRequest {
    pub introduce: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile of the authenticated user.", body = UserResponseDto),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user_id): Authenticated,
) -> HttpResult<Json<UserResponseDto>> {
    state
        .services
        .user_queries
        .get_profile(user_id.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Exact username.")),
    responses(
        (status = 200, description = "Profile with like info relative to the viewer.", body = UserResponseDto),
        (status = 404, description = "No such user.")
    ),
    tag = "Users"
)]
pub async fn by_username(
    Extension(state): Extension<HttpState>,
    Authenticated(viewer): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<UserResponseDto>> {
    state
        .services
        .user_queries
        .get_profile_by_username(username, viewer)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(SearchParams),
    responses(
        (status = 200, description = "Users whose name contains the query, empty for a blank query.", body = [UserSearchDto])
    ),
    tag = "Users"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<UserSearchDto>>> {
    state
        .services
        .user_queries
        .search_users(params.q.as_deref().unwrap_or(""))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me/motto",
    request_body = UpdateMottoRequest,
    responses(
        (status = 200, description = "Updated profile.", body = UserResponseDto),
        (status = 400, description = "Motto too long.")
    ),
    tag = "Users"
)]
pub async fn update_motto(
    Extension(state): Extension<HttpState>,
    Authenticated(user_id): Authenticated,
    Json(payload): Json<UpdateMottoRequest>,
) -> HttpResult<Json<UserResponseDto>> {
    let command = UpdateMottoCommand {
        user_id: user_id.into(),
        motto: payload.motto,
    };

    state
        .services
        .user_commands
        .update_motto(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me/introduce",
    request_body = UpdateIntroduceRequest,
    responses(
        (status = 200, description = "Updated profile.", body = UserResponseDto),
        (status = 400, description = "Introduction too long.")
    ),
    tag = "Users"
)]
pub async fn update_introduce(
    Extension(state): Extension<HttpState>,
    Authenticated(user_id): Authenticated,
    Json(payload): Json<UpdateIntroduceRequest>,
) -> HttpResult<Json<UserResponseDto>> {
    let command = UpdateIntroduceCommand {
        user_id: user_id.into(),
        introduce: payload.introduce,
    };

    state
        .services
        .user_commands
        .update_introduce(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users/me/image",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Form with a single 'image' file field."),
    responses(
        (status = 200, description = "Metadata of the stored avatar.", body = FileResponseDto),
        (status = 400, description = "Missing or non-image upload.")
    ),
    tag = "Users"
)]
pub async fn update_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user_id): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<Json<FileResponseDto>> {
    let upload = read_image_field(&mut multipart).await?;
    let command = UpdateAvatarCommand {
        user_id: user_id.into(),
        upload,
    };

    state
        .services
        .user_commands
        .update_avatar(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/likes",
    responses(
        (status = 200, description = "Users the viewer has liked, most recent first.", body = [UserResponseDto])
    ),
    tag = "Users"
)]
pub async fn liked_users(
    Extension(state): Extension<HttpState>,
    Authenticated(viewer): Authenticated,
) -> HttpResult<Json<Vec<UserResponseDto>>> {
    state
        .services
        .user_queries
        .liked_users(viewer)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/recommendations",
    responses(
        (status = 200, description = "Up to three random users to discover.", body = [UserSearchDto])
    ),
    tag = "Users"
)]
pub async fn recommendations(
    Extension(state): Extension<HttpState>,
    Authenticated(viewer): Authenticated,
) -> HttpResult<Json<Vec<UserSearchDto>>> {
    state
        .services
        .user_queries
        .recommend_users(viewer)
        .await
        .into_http()
        .map(Json)
}

async fn read_image_field(multipart: &mut Multipart) -> Result<ImageUpload, HttpError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(format!("malformed multipart body: {err}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(format!("failed to read upload: {err}")))?;

        return Ok(ImageUpload {
            original_name,
            content_type,
            data,
        });
    }

    Err(HttpError::bad_request("missing multipart field 'image'"))
}

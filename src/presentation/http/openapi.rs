// src/presentation/http/openapi.rs
use crate::application::dto::{FileResponseDto, UserResponseDto, UserSearchDto};
use crate::presentation::http::controllers::users;
use crate::presentation::http::routes;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "rigshare API",
        description = "User profiles, likes, and recommendations."
    ),
    paths(
        routes::health,
        users::me,
        users::by_username,
        users::search,
        users::update_motto,
        users::update_introduce,
        users::update_image,
        users::liked_users,
        users::recommendations,
    ),
    components(schemas(
        StatusResponse,
        UserResponseDto,
        UserSearchDto,
        FileResponseDto,
        users::UpdateMottoRequest,
        users::UpdateIntroduceRequest,
    )),
    tags(
        (name = "System", description = "Operational endpoints."),
        (name = "Users", description = "Profile lookups and mutations.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new().merge(swagger)
}

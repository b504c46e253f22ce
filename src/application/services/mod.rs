// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{ClockPort, ImageStorePort, RandomSourcePort},
        queries::users::UserQueryService,
    },
    domain::{image::UserImageRepository, like::LikeRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        image_repo: Arc<dyn UserImageRepository>,
        like_repo: Arc<dyn LikeRepository>,
        image_store: Arc<ImageStorePort>,
        random: Arc<RandomSourcePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&image_repo),
            Arc::clone(&image_store),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&like_repo),
            Arc::clone(&random),
        ));

        Self {
            user_commands,
            user_queries,
        }
    }
}

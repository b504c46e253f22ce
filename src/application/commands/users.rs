// src/application/commands/users.rs
use crate::{
    application::{
        dto::{FileResponseDto, UserResponseDto},
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, ImageStorePort, image_store::ImageUpload},
    },
    domain::{
        image::{FileFeature, NewUserImage, UserImage, UserImageRepository},
        user::{Motto, User, UserId, UserRepository, UserUpdate},
    },
};
use std::sync::Arc;

const MAX_INTRODUCE_LENGTH: usize = 500;

pub struct UpdateMottoCommand {
    pub user_id: i64,
    pub motto: String,
}

pub struct UpdateIntroduceCommand {
    pub user_id: i64,
    pub introduce: String,
}

pub struct UpdateAvatarCommand {
    pub user_id: i64,
    pub upload: ImageUpload,
}

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
    image_repo: Arc<dyn UserImageRepository>,
    image_store: Arc<ImageStorePort>,
    clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        image_repo: Arc<dyn UserImageRepository>,
        image_store: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            user_repo,
            image_repo,
            image_store,
            clock,
        }
    }

    pub async fn update_motto(
        &self,
        command: UpdateMottoCommand,
    ) -> ApplicationResult<UserResponseDto> {
        let user_id = UserId::new(command.user_id)?;
        let motto = Motto::new(command.motto)?;

        let update = UserUpdate::new(user_id).with_motto(motto);
        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }

    pub async fn update_introduce(
        &self,
        command: UpdateIntroduceCommand,
    ) -> ApplicationResult<UserResponseDto> {
        let user_id = UserId::new(command.user_id)?;

        if command.introduce.chars().count() > MAX_INTRODUCE_LENGTH {
            return Err(ApplicationError::validation(format!(
                "introduce must be at most {MAX_INTRODUCE_LENGTH} characters"
            )));
        }

        let update = UserUpdate::new(user_id).with_introduce(command.introduce);
        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }

    /// Swap the user's avatar: store the new binary, record its metadata,
    /// point the profile at it, then drop the previous image (metadata row
    /// and binary). The new image is fully in place before the old one is
    /// touched, so a failed removal never leaves the profile without an
    /// avatar.
    pub async fn update_avatar(
        &self,
        command: UpdateAvatarCommand,
    ) -> ApplicationResult<FileResponseDto> {
        let user_id = UserId::new(command.user_id)?;
        validate_upload(&command.upload)?;

        let user = self.require_user(user_id).await?;
        let old_image = self.image_repo.find_by_user(user.id).await?;

        let saved = self.store_new_avatar(&user, &command.upload).await?;

        let update = UserUpdate::new(user.id).with_image_url(saved.file.url.clone());
        self.user_repo.update(update).await?;

        if let Some(old) = old_image {
            self.remove_old_avatar(old).await;
        }

        Ok(saved.into())
    }

    async fn store_new_avatar(
        &self,
        user: &User,
        upload: &ImageUpload,
    ) -> ApplicationResult<UserImage> {
        let stored = self.image_store.store(upload).await?;

        let file = FileFeature {
            original_name: upload.original_name.clone(),
            content_type: upload.content_type.clone(),
            size: stored.size,
            url: stored.url,
            storage_key: stored.key,
        };

        let saved = self
            .image_repo
            .insert(NewUserImage {
                user_id: user.id,
                file,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(saved)
    }

    /// Removal of the superseded avatar is best-effort: the new image is
    /// already live, and an orphaned binary is preferable to failing the
    /// whole request.
    async fn remove_old_avatar(&self, old: UserImage) {
        if let Err(err) = self.image_repo.delete(old.id).await {
            tracing::warn!(image_id = old.id, error = %err, "failed to delete old avatar metadata");
            return;
        }

        if let Err(err) = self.image_store.remove(&old.file.storage_key).await {
            tracing::warn!(key = %old.file.storage_key, error = %err, "failed to remove old avatar binary");
        }
    }

    async fn require_user(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}

fn validate_upload(upload: &ImageUpload) -> ApplicationResult<()> {
    if upload.data.is_empty() {
        return Err(ApplicationError::validation("uploaded file is empty"));
    }

    if !upload.content_type.starts_with("image/") {
        return Err(ApplicationError::validation(format!(
            "unsupported content type '{}'",
            upload.content_type
        )));
    }

    Ok(())
}

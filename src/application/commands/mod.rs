pub mod users;

pub use users::{
    UpdateAvatarCommand, UpdateIntroduceCommand, UpdateMottoCommand, UserCommandService,
};

// src/domain/image/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{FileFeature, NewUserImage, UserImage};
pub use repository::UserImageRepository;

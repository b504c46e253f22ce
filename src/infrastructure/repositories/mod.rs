// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_like;
mod postgres_user;
mod postgres_user_image;

pub(crate) use error::map_sqlx;
pub use postgres_like::PostgresLikeRepository;
pub use postgres_user::PostgresUserRepository;
pub use postgres_user_image::PostgresUserImageRepository;

// src/domain/like/mod.rs
pub mod repository;

pub use repository::LikeRepository;

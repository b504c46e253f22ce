// src/domain/mod.rs
pub mod errors;
pub mod image;
pub mod like;
pub mod user;

// src/application/ports/mod.rs
pub mod image_store;
pub mod random;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ImageStorePort = dyn image_store::ImageStore;
pub type RandomSourcePort = dyn random::RandomSource;
pub type ClockPort = dyn time::Clock;

//! 사용자 도메인 모델

pub mod user_creation;

pub use user_creation::{TechEntry, UserCreationRequest};

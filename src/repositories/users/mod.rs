//! 계정 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB `users` 컬렉션을 관리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(&database);
//! user_repo.create_indexes().await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;

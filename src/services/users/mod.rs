//! User registry service module
//!
//! This module contains the user registry implementation split into logical components:
//! - `types`: Data structures and type definitions
//! - `store`: Concurrency-safe in-memory user storage
//! - `service`: Core service logic and methods
//! - `grpc_impl`: gRPC trait implementation

pub mod error;
pub mod grpc_impl;
pub mod service;
pub mod store;
pub mod types;

// Re-export public types for easier access
pub use error::UserServiceError;
pub use service::MyUserService;
pub use store::UserStore;
pub use types::UserRecord;

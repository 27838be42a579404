pub mod users;

pub use users::{MyUserService, UserRecord, UserServiceError, UserStore};

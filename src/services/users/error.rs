use tonic::Status;

/// 用户服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("User not found: {0}")]
    NotFound(String),
}

impl From<UserServiceError> for Status {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::NotFound(_) => Status::not_found(err.to_string()),
        }
    }
}

use tonic::{Request, Response, Status};

use super::service::MyUserService;
use crate::registry::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse, GetUserRequest,
    GetUserResponse, ListUsersRequest, ListUsersResponse, user_service_server::UserService,
};

// 为结构体实现 gRPC 服务 trait
#[tonic::async_trait]
impl UserService for MyUserService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();

        let record = self.register_user(req.name, req.email);

        Ok(Response::new(CreateUserResponse {
            user: Some(record.into()),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();

        let record = self.find_user(&req.id)?;

        Ok(Response::new(GetUserResponse {
            user: Some(record.into()),
        }))
    }

    async fn list_users(
        &self,
        _request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let users = self.all_users().into_iter().map(Into::into).collect();

        Ok(Response::new(ListUsersResponse { users }))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();

        // 不存在的 ID 返回 NOT_FOUND，与 GetUser 保持一致
        self.remove_user(&req.id)?;

        Ok(Response::new(DeleteUserResponse { success: true }))
    }
}

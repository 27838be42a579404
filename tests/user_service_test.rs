use std::collections::HashSet;
use std::sync::Arc;

use tonic::{Code, Request};

use user_registry::registry::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, ListUsersRequest,
    user_service_server::UserService,
};
use user_registry::services::users::MyUserService;

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = MyUserService::new();

    // 创建用户
    let created = service
        .create_user(Request::new(CreateUserRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }))
        .await
        .expect("create should succeed")
        .into_inner()
        .user
        .expect("response should contain the created user");

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Ada");
    assert_eq!(created.email, "ada@example.com");

    // 按返回的 ID 查询
    let fetched = service
        .get_user(Request::new(GetUserRequest {
            id: created.id.clone(),
        }))
        .await
        .expect("get should succeed")
        .into_inner()
        .user
        .expect("response should contain the user");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let service = MyUserService::new();

    let status = service
        .get_user(Request::new(GetUserRequest {
            id: "nonexistent-id".to_string(),
        }))
        .await
        .expect_err("lookup of an unknown id should fail");

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("User not found"));
}

#[tokio::test]
async fn test_list_users_tracks_creates_and_deletes() {
    let service = MyUserService::new();

    // 空存储返回空列表
    let users = service
        .list_users(Request::new(ListUsersRequest {}))
        .await
        .expect("list should succeed")
        .into_inner()
        .users;
    assert!(users.is_empty());

    let mut expected = HashSet::new();
    for i in 0..3 {
        let user = service
            .create_user(Request::new(CreateUserRequest {
                name: format!("User {i}"),
                email: format!("user{i}@example.com"),
            }))
            .await
            .expect("create should succeed")
            .into_inner()
            .user
            .expect("response should contain the created user");
        expected.insert(user.id);
    }

    // 删除其中一个
    let removed = expected.iter().next().cloned().expect("set is non-empty");
    expected.remove(&removed);
    service
        .delete_user(Request::new(DeleteUserRequest { id: removed }))
        .await
        .expect("delete should succeed");

    let listed: HashSet<String> = service
        .list_users(Request::new(ListUsersRequest {}))
        .await
        .expect("list should succeed")
        .into_inner()
        .users
        .into_iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let service = MyUserService::new();

    let created = service
        .create_user(Request::new(CreateUserRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        }))
        .await
        .expect("create should succeed")
        .into_inner()
        .user
        .expect("response should contain the created user");

    let response = service
        .delete_user(Request::new(DeleteUserRequest {
            id: created.id.clone(),
        }))
        .await
        .expect("first delete should succeed")
        .into_inner();
    assert!(response.success);

    // 第二次删除同一 ID
    let status = service
        .delete_user(Request::new(DeleteUserRequest {
            id: created.id.clone(),
        }))
        .await
        .expect_err("second delete of the same id should fail");
    assert_eq!(status.code(), Code::NotFound);

    // 删除后 ID 不再可查
    let status = service
        .get_user(Request::new(GetUserRequest { id: created.id }))
        .await
        .expect_err("deleted id should no longer resolve");
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_concurrent_creates_assign_unique_ids() {
    let service = Arc::new(MyUserService::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_user(Request::new(CreateUserRequest {
                    name: format!("User {i}"),
                    email: format!("user{i}@example.com"),
                }))
                .await
                .expect("create should succeed")
                .into_inner()
                .user
                .expect("response should contain the created user")
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.expect("create task panicked"));
    }

    // 所有 ID 互不相同
    assert_eq!(ids.len(), 32);

    let users = service
        .list_users(Request::new(ListUsersRequest {}))
        .await
        .expect("list should succeed")
        .into_inner()
        .users;
    assert_eq!(users.len(), 32);
}

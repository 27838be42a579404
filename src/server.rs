use tonic::transport::Server;

use crate::config::Config;
use crate::registry::user_service_server::UserServiceServer;
use crate::services::users::MyUserService;

pub async fn start(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.server.listen_addr().parse()?;

    // 创建服务实例
    let user_service = MyUserService::new();

    tracing::info!(address = %addr, "User registry server listening");

    Server::builder()
        .concurrency_limit_per_connection(config.server.max_concurrent_requests)
        .add_service(UserServiceServer::new(user_service))
        .serve(addr)
        .await?;

    Ok(())
}

use super::{
    cors_config, remote_api_config::RemoteApiConfig, server_config::ServerConfig,
    session_config::SessionConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub session: SessionConfig,
    pub remote_api: RemoteApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            session: SessionConfig::from_env(),
            remote_api: RemoteApiConfig::from_env(),
        }
    }
}

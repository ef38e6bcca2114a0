use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::User;

/// Remote user API. Failures are surfaced, never replaced by local data.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, GatewayError>;
    async fn get_by_id(&self, id: &str) -> Result<User, GatewayError>;
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, GatewayError>;
    /// Creates the user and returns it as stored remotely.
    async fn register(&self, user: &User) -> Result<User, GatewayError>;
}

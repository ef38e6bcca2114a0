use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::user::gateway::UserGateway;
use business::domain::user::model::User;

use crate::client::RemoteApiClient;
use crate::dto::{NewUserDto, UserDto};

pub struct UserGatewayHttp {
    client: RemoteApiClient,
}

impl UserGatewayHttp {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }

    async fn fetch_users(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<User>, GatewayError> {
        let users: Vec<UserDto> = self.client.fetch(request).await?;
        Ok(users.into_iter().map(UserDto::into_domain).collect())
    }
}

#[async_trait]
impl UserGateway for UserGatewayHttp {
    async fn get_all(&self) -> Result<Vec<User>, GatewayError> {
        self.fetch_users(self.client.client.get(self.client.users_url()))
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<User, GatewayError> {
        let request = self.client.client.get(self.client.user_url(id));
        let user: UserDto = self.client.fetch(request).await?;

        Ok(user.into_domain())
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, GatewayError> {
        let request = self
            .client
            .client
            .get(self.client.users_url())
            .query(&[("email", email)]);
        let users = self.fetch_users(request).await?;

        // The demo API may ignore the filter; only exact matches count.
        Ok(users
            .into_iter()
            .filter(|u| u.email.eq_ignore_ascii_case(email))
            .collect())
    }

    async fn register(&self, user: &User) -> Result<User, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.users_url())
            .json(&NewUserDto::from_domain(user));
        let created: UserDto = self.client.fetch(request).await?;

        Ok(created.into_domain())
    }
}

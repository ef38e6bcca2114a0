use async_trait::async_trait;

use business::domain::country::directory::CountryDirectory;
use business::domain::country::model::Country;
use business::domain::errors::GatewayError;

use crate::client::RemoteApiClient;
use crate::dto::CountryDto;

pub struct CountryDirectoryHttp {
    client: RemoteApiClient,
}

impl CountryDirectoryHttp {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CountryDirectory for CountryDirectoryHttp {
    async fn fetch_all(&self) -> Result<Vec<Country>, GatewayError> {
        let request = self.client.client.get(self.client.countries_url());
        let countries: Vec<CountryDto> = self.client.fetch(request).await?;

        Ok(countries.into_iter().map(CountryDto::into_domain).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Country, GatewayError> {
        let request = self.client.client.get(self.client.country_url(id));
        let country: CountryDto = self.client.fetch(request).await?;

        Ok(country.into_domain())
    }
}

use poem_openapi::Object;

use business::domain::country::model::Country;

#[derive(Debug, Clone, Object)]
pub struct CountryResponse {
    pub id: String,
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub code: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
            code: country.code,
        }
    }
}

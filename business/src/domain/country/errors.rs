#[derive(Debug, thiserror::Error)]
pub enum CountryError {
    #[error("country.not_found")]
    NotFound,
}

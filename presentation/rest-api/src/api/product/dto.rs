use poem_openapi::{Enum, Object};
use rust_decimal::Decimal;

use business::domain::product::model::Product;
use business::domain::product::query::{ProductsResponse, SortBy, SortOrder};

#[derive(Debug, Clone, Copy, Enum)]
#[oai(rename_all = "lowercase")]
pub enum SortByDto {
    Name,
    Price,
}

impl From<SortByDto> for SortBy {
    fn from(dto: SortByDto) -> Self {
        match dto {
            SortByDto::Name => SortBy::Name,
            SortByDto::Price => SortBy::Price,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
#[oai(rename_all = "lowercase")]
pub enum SortOrderDto {
    Asc,
    Desc,
}

impl From<SortOrderDto> for SortOrder {
    fn from(dto: SortOrderDto) -> Self {
        match dto {
            SortOrderDto::Asc => SortOrder::Asc,
            SortOrderDto::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    /// Price with two decimals
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
}

/// JSON clients read prices as numbers. A price that has no `f64` form is
/// reported as zero and logged.
fn price_to_number(price: Decimal) -> f64 {
    f64::try_from(price).unwrap_or_else(|err| {
        tracing::warn!("Price {} has no numeric form, sending 0: {}", price, err);
        0.0
    })
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: price_to_number(product.price),
            description: product.description,
            category: product.category,
            image: product.image,
        }
    }
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductsPageResponse {
    pub products: Vec<ProductResponse>,
    /// Matches before pagination
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    /// Zero when nothing matches
    pub total_pages: u64,
}

impl From<ProductsResponse> for ProductsPageResponse {
    fn from(response: ProductsResponse) -> Self {
        Self {
            products: response.products.into_iter().map(Into::into).collect(),
            total: response.total as u64,
            page: response.page,
            page_size: response.page_size,
            total_pages: response.total_pages as u64,
        }
    }
}

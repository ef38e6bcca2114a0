use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::query::ProductFilters;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::product::use_cases::search::SearchProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductResponse, ProductsPageResponse, SortByDto, SortOrderDto};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
            get_categories_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only access to the fixed demo catalog.
#[OpenApi]
impl ProductApi {
    /// Search the catalog
    ///
    /// Filters by name or category, sorts, then returns one page.
    /// Page and page size of zero fall back to 1 and 6.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        search: Query<Option<String>>,
        #[oai(name = "sortBy")] sort_by: Query<Option<SortByDto>>,
        #[oai(name = "sortOrder")] sort_order: Query<Option<SortOrderDto>>,
        page: Query<Option<u32>>,
        #[oai(name = "pageSize")] page_size: Query<Option<u32>>,
    ) -> SearchProductsResponse {
        let filters = ProductFilters {
            search_term: search.0,
            sort_by: sort_by.0.map(Into::into),
            sort_order: sort_order.0.map(Into::into),
            page: page.0,
            page_size: page_size.0,
        };

        match self.search_use_case.execute(filters).await {
            Ok(response) => SearchProductsResponse::Ok(Json(response.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<u32>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List categories
    ///
    /// Distinct categories in catalog order.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(categories)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductsPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

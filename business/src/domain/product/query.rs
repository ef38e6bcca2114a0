use std::cmp::Ordering;

use super::model::Product;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Price,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Name => write!(f, "name"),
            SortBy::Price => write!(f, "price"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Search, sort and pagination request for the catalog.
///
/// A missing or zero `page`/`page_size` falls back to the defaults
/// (page 1, six products per page).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub search_term: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductFilters {
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    /// Matches after filtering, before pagination.
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: usize,
}

fn compare(a: &Product, b: &Product, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Price => a.price.cmp(&b.price),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

/// Applies search, then sort, then pagination over `catalog`.
///
/// The sort is stable: products with equal keys keep their catalog order
/// in both directions.
pub fn query(catalog: &[Product], filters: &ProductFilters) -> ProductsResponse {
    let needle = filters
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<&Product> = match needle.as_deref() {
        Some(needle) => catalog.iter().filter(|p| p.matches(needle)).collect(),
        None => catalog.iter().collect(),
    };

    if let Some(sort_by) = filters.sort_by {
        let order = filters.sort_order();
        filtered.sort_by(|a, b| {
            let ordering = compare(a, b, sort_by);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let page = filters.page();
    let page_size = filters.page_size();
    let total = filtered.len();
    let start = (page as usize - 1).saturating_mul(page_size as usize);

    let products = filtered
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    ProductsResponse {
        products,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size as usize),
    }
}

/// Distinct categories in order of first appearance.
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in catalog {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

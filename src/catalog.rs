use std::num::NonZeroU32;

use tracing::{debug, instrument};

use crate::db::repository::ProductStore;
use crate::errors::Result;
use crate::models::{CatalogPage, Product};

pub const PAGE_SIZE: i64 = 24;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(PageNumber)
    }

    /// Default-on-parse-error: anything that is not a positive integer,
    /// including a missing parameter, becomes the first page.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse::<u32>().ok())
            .and_then(PageNumber::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn offset(self) -> i64 {
        (i64::from(self.get()) - 1) * PAGE_SIZE
    }
}

/// Derives the pagination links for a slice that was fetched for `page`.
///
/// A full slice is taken to mean more rows may follow, so a table whose size
/// is an exact multiple of `PAGE_SIZE` links to one empty trailing page.
pub fn paginate(page: PageNumber, items: Vec<Product>) -> CatalogPage {
    let current = u64::from(page.get());
    let next_page = (items.len() as i64 == PAGE_SIZE).then(|| (current + 1).to_string());
    let prev_page = (current > 1).then(|| (current - 1).to_string());

    CatalogPage {
        page: page.get(),
        items,
        next_page,
        prev_page,
    }
}

/// Fetches one page of the catalog. A failed query or an unreadable row fails
/// the whole page.
#[instrument(name = "catalog::get_page", skip(store))]
pub fn get_page<S>(store: &S, page_param: Option<&str>) -> Result<CatalogPage>
where
    S: ProductStore + ?Sized,
{
    let page = PageNumber::parse_or_default(page_param);
    let rows = store.product_window(PAGE_SIZE, page.offset())?;
    let items = rows
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>>>()?;

    debug!(page = page.get(), count = items.len(), "Fetched catalog page");
    Ok(paginate(page, items))
}

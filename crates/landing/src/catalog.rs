//! Catalog source and the caller-side page cursor.
//!
//! The landing page ships with a fixed catalog; `fetch_page` simulates a
//! network fetch by sleeping for the configured latency before resolving a
//! deterministic batch. There is no end-of-data signal from the source: the
//! "2 pages max" behavior of the page belongs to [`CatalogPager`], the
//! caller-side cursor, and the cursor only advances once a fetch has actually
//! succeeded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;

use driftline_core::{CurrencyCode, Price, ProductId};

use crate::models::Product;

/// Errors from the (simulated) catalog fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The simulated network call was rejected.
    #[error("catalog is unreachable")]
    Unreachable,
}

/// Fixture rows: name, description, price in cents, badge, category.
const FIXTURE_ROWS: &[(&str, &str, i64, Option<&str>, &str)] = &[
    (
        "Tidewater Mug",
        "Stoneware mug glazed in sea-glass green.",
        2400,
        Some("Bestseller"),
        "Kitchen",
    ),
    (
        "Driftwood Serving Board",
        "Hand-finished acacia board with a rope hanger.",
        4800,
        None,
        "Kitchen",
    ),
    (
        "Harbor Throw Blanket",
        "Brushed cotton throw in a fog-grey stripe.",
        6900,
        Some("New"),
        "Living",
    ),
    (
        "Saltair Candle",
        "Sea salt and cedar, 40-hour burn.",
        2200,
        None,
        "Living",
    ),
    (
        "Cove Ceramic Planter",
        "Matte white planter with a drainage tray.",
        3400,
        None,
        "Living",
    ),
    (
        "Lighthouse Print",
        "Giclee print of the Point Arena light, 12x18.",
        2800,
        Some("Limited"),
        "Art",
    ),
    (
        "Ebb Tide Tumbler Set",
        "Four recycled-glass tumblers in ocean hues.",
        3900,
        None,
        "Kitchen",
    ),
    (
        "Moorings Linen Apron",
        "Stonewashed linen with brass hardware.",
        4500,
        None,
        "Kitchen",
    ),
    (
        "Gullwing Wall Hook",
        "Cast-iron hook, powder-coated in navy.",
        1600,
        None,
        "Living",
    ),
    (
        "Spindrift Soap Trio",
        "Cold-process bars: kelp, citrus, lavender.",
        1900,
        Some("New"),
        "Bath",
    ),
    (
        "Quarterdeck Tray",
        "Lacquered bamboo catch-all tray.",
        2600,
        None,
        "Living",
    ),
    (
        "Foghorn Doormat",
        "Coir doormat, 'welcome aboard' in block type.",
        3100,
        None,
        "Living",
    ),
];

/// Fixed, deterministic product source with simulated fetch latency.
///
/// Product identifiers are generated once at construction, so repeated
/// fetches of the same page within a session return identical records.
#[derive(Debug)]
pub struct FixtureCatalog {
    products: Vec<Product>,
    page_size: usize,
    delay: Duration,
    fail_next: AtomicBool,
}

impl FixtureCatalog {
    /// Build the fixture catalog.
    #[must_use]
    pub fn new(page_size: usize, delay: Duration) -> Self {
        let products = FIXTURE_ROWS
            .iter()
            .map(|&(name, description, cents, badge, category)| Product {
                id: ProductId::generate(),
                name: name.to_owned(),
                description: description.to_owned(),
                price: Price::from_cents(cents, CurrencyCode::USD),
                image_url: format!("/images/{}.webp", slugify(name)),
                badge: badge.map(str::to_owned),
                category: category.to_owned(),
            })
            .collect();

        Self {
            products,
            page_size,
            delay,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next `fetch_page` call fail, once.
    ///
    /// Models the transient network rejection the real page can hit.
    pub fn fail_next_fetch(&self) {
        self.fail_next.store(true, Ordering::Relaxed);
    }

    /// Fetch one page of products (1-based page numbers).
    ///
    /// Resolves after the configured artificial delay. Pages past the fixture
    /// data resolve to an empty batch; there is no has-more signal here.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unreachable`] when a failure has been injected
    /// via [`Self::fail_next_fetch`].
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, FetchError> {
        tokio::time::sleep(self.delay).await;

        if self.fail_next.swap(false, Ordering::Relaxed) {
            return Err(FetchError::Unreachable);
        }

        let start = usize::try_from(page.saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(self.page_size);
        let batch = self
            .products
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        Ok(batch)
    }
}

/// Caller-side pagination cursor with a fixed cutoff.
///
/// The cursor advances only on confirmed fetch success; a failed fetch leaves
/// it where it was so repeating the user action retries the same page.
#[derive(Debug, Clone)]
pub struct CatalogPager {
    next_page: u32,
    cutoff: u32,
}

impl CatalogPager {
    /// Create a cursor that stops requesting after `cutoff` pages.
    #[must_use]
    pub const fn new(cutoff: u32) -> Self {
        Self {
            next_page: 1,
            cutoff,
        }
    }

    /// Whether another page may still be requested.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next_page <= self.cutoff
    }

    /// The page the next successful `load_more` will fetch.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Fetch the next page, advancing the cursor only on success.
    ///
    /// Returns `Ok(None)` once the cutoff is reached.
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the catalog; the cursor is untouched in
    /// that case.
    pub async fn load_more(
        &mut self,
        catalog: &FixtureCatalog,
    ) -> Result<Option<Vec<Product>>, FetchError> {
        if !self.has_more() {
            return Ok(None);
        }

        let batch = catalog.fetch_page(self.next_page).await?;
        self.next_page += 1;
        Ok(Some(batch))
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn catalog() -> FixtureCatalog {
        FixtureCatalog::new(6, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_pages_are_distinct_and_non_overlapping() {
        let catalog = catalog();
        let page1 = catalog.fetch_page(1).await.unwrap();
        let page2 = catalog.fetch_page(2).await.unwrap();

        assert_eq!(page1.len(), 6);
        assert_eq!(page2.len(), 6);

        let ids: HashSet<_> = page1.iter().chain(&page2).map(|p| p.id).collect();
        assert_eq!(ids.len(), 12);
    }

    #[tokio::test]
    async fn test_same_page_is_stable_within_a_session() {
        let catalog = catalog();
        let first = catalog.fetch_page(1).await.unwrap();
        let again = catalog.fetch_page(1).await.unwrap();
        assert_eq!(first, again);
    }

    #[tokio::test]
    async fn test_page_past_fixture_is_empty() {
        let catalog = catalog();
        assert!(catalog.fetch_page(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure_clears_after_one_fetch() {
        let catalog = catalog();
        catalog.fail_next_fetch();
        assert_eq!(
            catalog.fetch_page(1).await.unwrap_err(),
            FetchError::Unreachable
        );
        assert!(catalog.fetch_page(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_pager_stops_at_cutoff() {
        let catalog = catalog();
        let mut pager = CatalogPager::new(2);

        assert!(pager.load_more(&catalog).await.unwrap().is_some());
        assert!(pager.load_more(&catalog).await.unwrap().is_some());
        assert!(!pager.has_more());
        assert!(pager.load_more(&catalog).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pager_does_not_advance_on_failure() {
        let catalog = catalog();
        let mut pager = CatalogPager::new(2);

        catalog.fail_next_fetch();
        assert!(pager.load_more(&catalog).await.is_err());
        assert_eq!(pager.next_page(), 1);

        // Retrying the user action fetches the page that failed.
        let batch = pager.load_more(&catalog).await.unwrap().unwrap();
        assert_eq!(batch, catalog.fetch_page(1).await.unwrap());
        assert_eq!(pager.next_page(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_out_the_artificial_delay() {
        let catalog = FixtureCatalog::new(6, Duration::from_millis(600));
        let started = tokio::time::Instant::now();
        catalog.fetch_page(1).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(600));
    }
}

//! Domain models for the landing page.

use serde::{Deserialize, Serialize};

use driftline_core::{Price, ProductId};

/// A catalog product.
///
/// Immutable once fetched; the catalog is append-only across paginated
/// fetches within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque generated identifier; deduplication key for cart lines.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (URI).
    pub image_url: String,
    /// Optional short badge label (e.g. "New", "Bestseller").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Category label.
    pub category: String,
}

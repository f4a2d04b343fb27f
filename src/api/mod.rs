pub mod client;
pub mod models;

pub use client::PlentyClient;

use async_trait::async_trait;
use models::{AttributeEntry, AttributeValueName, MarketSku, VariationResponse};

/// Remote operations consumed by the export pipeline.
///
/// Implemented by [`PlentyClient`]; tests substitute a scripted mock. Every
/// method performs exactly one request attempt and collapses transport or
/// decode failures into "no data". Callers treat absence of data as a
/// valid, non-fatal outcome.
#[async_trait]
pub trait PlentyApi {
    /// Attribute definitions available in the backend.
    async fn attributes(&self) -> Option<Vec<AttributeEntry>>;

    /// One page of variations for an already-built route.
    async fn variation_page(&self, route: &str) -> Option<VariationResponse>;

    /// Owning item id for a single variation id.
    async fn item_id_for_variation(&self, variation: u64) -> Option<u64>;

    /// Child variation ids of an item, main variation excluded.
    async fn child_variations(&self, item: u64) -> Vec<u64>;

    /// All market SKUs registered for one variation.
    async fn market_skus(&self, item: u64, variation: u64) -> Option<Vec<MarketSku>>;

    /// Localized name of an attribute value.
    async fn attribute_value_name(&self, value_id: u64, lang: &str) -> Option<AttributeValueName>;
}

//! The paginated aggregation and enrichment pipeline:
//! attribute catalog → variation pages → parent SKUs → translations.

pub mod dataset;
pub mod fetch;
pub mod parent_sku;
pub mod pipeline;
pub mod scope;
pub mod translation;

pub use dataset::{AttributeDefinition, Dataset, NOT_FOUND};
pub use pipeline::{ExportParams, ExportPipeline};
pub use scope::Scope;

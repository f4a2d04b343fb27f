use super::dataset::{AttributeDefinition, Dataset};
use super::scope::Scope;
use super::{fetch, parent_sku, translation};
use crate::api::PlentyApi;
use crate::display::progress::{DEFAULT_BAR_WIDTH, ProgressBar};
use crate::error::ExportError;
use crate::utils::logging::log_warning;

/// Resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub scope: Scope,
    pub lang: String,
    pub selected_attribute_ids: Vec<u32>,
    pub primary_market_id: u64,
    pub alternative_market_id: u64,
}

/// Orchestrates the dependent lookups in order: variation pages, parent
/// SKUs, translations. Owns the dataset until it is handed to the output
/// sink; every phase gets its own progress bar.
pub struct ExportPipeline<'a> {
    api: &'a dyn PlentyApi,
}

impl<'a> ExportPipeline<'a> {
    pub fn new(api: &'a dyn PlentyApi) -> Self {
        Self { api }
    }

    /// The attribute catalog, fetched once per run. An unreachable catalog
    /// is fatal; an empty one degrades the export to the base columns.
    pub async fn attribute_catalog(&self) -> Result<Vec<AttributeDefinition>, ExportError> {
        let entries = self
            .api
            .attributes()
            .await
            .ok_or(ExportError::AttributeCatalogUnavailable)?;

        if entries.is_empty() {
            log_warning("no attributes found in the backend, exporting base columns only");
        }

        Ok(entries.iter().map(AttributeDefinition::from).collect())
    }

    /// Build the full dataset for the given scope: rows from all variation
    /// pages, then one parent SKU per item, then one translation per
    /// attribute value.
    pub async fn run(
        &self,
        catalog: &[AttributeDefinition],
        params: &ExportParams,
    ) -> Result<Dataset, ExportError> {
        let mut dataset = Dataset::new(catalog, &params.selected_attribute_ids);

        let mut progress = ProgressBar::stderr(DEFAULT_BAR_WIDTH, "Get data..");
        fetch::collect_variations(self.api, &params.scope, &mut dataset, &mut progress).await?;

        let mut progress = ProgressBar::stderr(DEFAULT_BAR_WIDTH, "Get parent SKUs..");
        parent_sku::resolve_parent_skus(
            self.api,
            &mut dataset,
            params.primary_market_id,
            params.alternative_market_id,
            &mut progress,
        )
        .await;

        let mut progress = ProgressBar::stderr(DEFAULT_BAR_WIDTH, "Get translations..");
        translation::resolve_translations(self.api, &mut dataset, &params.lang, &mut progress)
            .await;

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::testutil::{MockApi, attribute_entry, entry, page, sku};

    const ALL_ROUTE: &str = "/rest/items/variations?with=variationAttributeValues";

    fn params(selected: Vec<u32>) -> ExportParams {
        ExportParams {
            scope: Scope::All,
            lang: "en".to_string(),
            selected_attribute_ids: selected,
            primary_market_id: 104,
            alternative_market_id: 4,
        }
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_fatal() {
        let api = MockApi::new();
        let pipeline = ExportPipeline::new(&api);
        let result = pipeline.attribute_catalog().await;
        assert!(matches!(
            result,
            Err(ExportError::AttributeCatalogUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_empty_catalog_degrades_to_base_columns() {
        let mut api = MockApi::new();
        api.attributes = Some(vec![]);
        api.pages.insert(
            ALL_ROUTE.to_string(),
            page(1, 1, 1, vec![entry(51, "a", false, 5, &[])]),
        );

        let pipeline = ExportPipeline::new(&api);
        let catalog = pipeline.attribute_catalog().await.unwrap();
        assert!(catalog.is_empty());

        let dataset = pipeline.run(&catalog, &params(vec![])).await.unwrap();
        assert_eq!(dataset.columns().len(), 4);
        assert_eq!(dataset.len(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_two_of_three_attributes() {
        let mut api = MockApi::new();
        api.attributes = Some(vec![
            attribute_entry(1, "color"),
            attribute_entry(2, "size_name"),
            attribute_entry(3, "material"),
        ]);
        api.pages.insert(
            ALL_ROUTE.to_string(),
            page(
                1,
                3,
                1,
                vec![
                    entry(50, "P-1", true, 5, &[]),
                    entry(51, "S-1", false, 5, &[(1, "red", 100), (2, "40", 200)]),
                    entry(52, "S-2", false, 5, &[(1, "blue", 101)]),
                ],
            ),
        );
        api.children.insert(5, vec![51, 52]);
        api.market_skus
            .insert((5, 51), vec![sku(4, Some("ALT-5")), sku(104, Some("PRIME-5"))]);
        api.translations
            .insert((100, "en".to_string()), Some("red".to_string()));
        api.translations
            .insert((101, "en".to_string()), Some("blue".to_string()));
        api.translations
            .insert((200, "en".to_string()), Some("40".to_string()));

        let pipeline = ExportPipeline::new(&api);
        let catalog = pipeline.attribute_catalog().await.unwrap();
        assert_eq!(catalog.len(), 3);

        let dataset = pipeline.run(&catalog, &params(vec![1, 2])).await.unwrap();

        // Two child rows, the main variation is not exported.
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.columns(),
            vec![
                "variation-id",
                "variation-number",
                "parent-variation",
                "color_name",
                "color_id",
                "color_lang",
                "size_name_name",
                "size_name_id",
                "size_name_lang",
                "item-id",
            ]
        );

        let rows = dataset.to_rows();
        assert_eq!(
            rows[0],
            vec!["51", "S-1", "PRIME-5", "red", "100", "red", "40", "200", "40", "5"]
        );
        // Missing size on the second variation stays an empty triple; the
        // shared item carries the identical parent SKU.
        assert_eq!(
            rows[1],
            vec!["52", "S-2", "PRIME-5", "blue", "101", "blue", "", "", "", "5"]
        );
    }
}

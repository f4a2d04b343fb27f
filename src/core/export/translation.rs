use super::dataset::{Dataset, NOT_FOUND};
use crate::api::PlentyApi;
use crate::display::progress::ProgressBar;
use crate::utils::logging::log_error;
use std::io::Write;

/// Fill the `<attribute>_lang` cells of the dataset for one language.
///
/// Only rows carrying a value id consume a request and a progress slot;
/// cells without a value id stay empty. The bar is relabeled and re-totaled
/// per attribute and advances once per attempted lookup.
pub async fn resolve_translations<W: Write + Send>(
    api: &dyn PlentyApi,
    dataset: &mut Dataset,
    lang: &str,
    progress: &mut ProgressBar<W>,
) {
    for attr_index in 0..dataset.selected().len() {
        let name = dataset.selected()[attr_index].name.clone();
        progress.set_label(format!("Get {} translation", name));

        let pending = dataset
            .rows
            .iter()
            .filter(|row| row.attributes[attr_index].value_id.is_some())
            .count();
        progress.set_total(pending);

        for row in &mut dataset.rows {
            let cell = &mut row.attributes[attr_index];
            let Some(value_id) = cell.value_id else {
                continue;
            };

            progress.advance();
            cell.localized_name = match api.attribute_value_name(value_id, lang).await {
                Some(named) => named.name.unwrap_or_else(|| NOT_FOUND.to_string()),
                None => {
                    log_error(&format!(
                        "no value name for attributeValue {} in language {}",
                        value_id, lang
                    ));
                    NOT_FOUND.to_string()
                }
            };
        }
    }
}

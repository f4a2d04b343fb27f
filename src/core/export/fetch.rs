use super::dataset::Dataset;
use super::scope::Scope;
use crate::api::PlentyApi;
use crate::api::models::VariationEntry;
use crate::display::progress::ProgressBar;
use crate::error::ExportError;
use std::io::Write;

/// Fetch every page for the scope and append the rows in arrival order.
///
/// The first page decides the progress total. Later pages that yield no
/// data are skipped and pagination continues; only a missing first page is
/// an error.
pub async fn collect_variations<W: Write + Send>(
    api: &dyn PlentyApi,
    scope: &Scope,
    dataset: &mut Dataset,
    progress: &mut ProgressBar<W>,
) -> Result<(), ExportError> {
    let route = scope.route();
    let first = api
        .variation_page(&route)
        .await
        .ok_or_else(|| ExportError::NoVariationData {
            route: route.clone(),
        })?
        .into_page();

    progress.set_total(first.totals_count as usize);
    let mut offset = append_page(dataset, &first.entries, 0, progress);

    if first.last_page_number != first.page {
        // TODO: confirm whether lastPageNumber itself must be fetched too;
        // this loop stops one page short of it.
        for page_num in 2..first.last_page_number {
            let paged_route = format!("{}&page={}", route, page_num);
            let Some(response) = api.variation_page(&paged_route).await else {
                continue;
            };
            offset = append_page(dataset, &response.into_page().entries, offset, progress);
        }
    }

    Ok(())
}

/// Report one progress step per entry, main variations included, so the bar
/// tracks the advertised totals count.
fn append_page<W: Write + Send>(
    dataset: &mut Dataset,
    entries: &[VariationEntry],
    offset: usize,
    progress: &mut ProgressBar<W>,
) -> usize {
    let mut position = offset;
    for entry in entries {
        progress.report(position);
        position += 1;
        dataset.push_entry(entry);
    }
    position
}

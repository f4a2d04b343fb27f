use super::dataset::{Dataset, NOT_FOUND};
use crate::api::PlentyApi;
use crate::api::models::MarketSku;
use crate::display::progress::ProgressBar;
use std::collections::HashMap;
use std::io::Write;

/// Resolve the market parent SKU once per distinct item and apply it to
/// every row of that item, reducing N row-level lookups to one per item.
pub async fn resolve_parent_skus<W: Write + Send>(
    api: &dyn PlentyApi,
    dataset: &mut Dataset,
    primary_market: u64,
    alternative_market: u64,
    progress: &mut ProgressBar<W>,
) {
    let items = dataset.item_ids();
    progress.set_total(items.len());

    let mut resolved: HashMap<u64, String> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        progress.report(index);
        let sku = parent_sku_for_item(api, *item, primary_market, alternative_market).await;
        resolved.insert(*item, sku);
    }

    for row in &mut dataset.rows {
        if let Some(sku) = resolved.get(&row.item_id) {
            row.parent_sku = sku.clone();
        }
    }
}

/// Any one child variation carries the SKUs of the whole item; the first
/// returned child is taken as representative.
async fn parent_sku_for_item(
    api: &dyn PlentyApi,
    item: u64,
    primary_market: u64,
    alternative_market: u64,
) -> String {
    let children = api.child_variations(item).await;
    let Some(&representative) = children.first() else {
        return NOT_FOUND.to_string();
    };

    let Some(skus) = api.market_skus(item, representative).await else {
        return NOT_FOUND.to_string();
    };

    select_market_sku(&skus, primary_market, alternative_market)
}

/// Primary market first, alternative market second, sentinel last. Empty
/// SKU strings count as absent.
pub fn select_market_sku(skus: &[MarketSku], primary_market: u64, alternative_market: u64) -> String {
    for market in [primary_market, alternative_market] {
        for sku in skus {
            if sku.market_id != market {
                continue;
            }
            if let Some(parent) = &sku.parent_sku {
                if !parent.is_empty() {
                    return parent.clone();
                }
            }
        }
    }
    NOT_FOUND.to_string()
}

use crate::api::models::{AttributeEntry, VariationEntry};

/// Placeholder for a resolved-but-absent value, distinct from an empty cell.
pub const NOT_FOUND: &str = "Not found";

/// One attribute definition from the backend catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub id: u32,
    pub name: String,
}

impl From<&AttributeEntry> for AttributeDefinition {
    fn from(entry: &AttributeEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.backend_name.clone(),
        }
    }
}

/// Cell triple of one selected attribute on one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeCell {
    pub value_name: String,
    pub value_id: Option<u64>,
    pub localized_name: String,
}

#[derive(Debug, Clone)]
pub struct VariationRow {
    pub variation_id: u64,
    pub variation_number: String,
    pub parent_sku: String,
    pub attributes: Vec<AttributeCell>,
    pub item_id: u64,
}

/// The growing export table. Rows are append-only and keep arrival order;
/// the attribute columns follow the catalog order of the selection.
#[derive(Debug)]
pub struct Dataset {
    selected: Vec<AttributeDefinition>,
    pub rows: Vec<VariationRow>,
}

impl Dataset {
    pub fn new(catalog: &[AttributeDefinition], selected_ids: &[u32]) -> Self {
        let selected = catalog
            .iter()
            .filter(|def| selected_ids.contains(&def.id))
            .cloned()
            .collect();
        Self {
            selected,
            rows: Vec::new(),
        }
    }

    pub fn selected(&self) -> &[AttributeDefinition] {
        &self.selected
    }

    /// Column headers: three fixed leading columns, a name/id/lang triple
    /// per selected attribute, and the item id last.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![
            "variation-id".to_string(),
            "variation-number".to_string(),
            "parent-variation".to_string(),
        ];
        for def in &self.selected {
            columns.push(format!("{}_name", def.name));
            columns.push(format!("{}_id", def.name));
            columns.push(format!("{}_lang", def.name));
        }
        columns.push("item-id".to_string());
        columns
    }

    /// Append one remote entry. The main variation is never exported.
    pub fn push_entry(&mut self, entry: &VariationEntry) {
        if entry.is_main {
            return;
        }

        let attributes = self
            .selected
            .iter()
            .map(|def| cell_for(entry, def.id))
            .collect();

        self.rows.push(VariationRow {
            variation_id: entry.id,
            variation_number: entry.number.clone().unwrap_or_default(),
            parent_sku: String::new(),
            attributes,
            item_id: entry.item_id,
        });
    }

    /// Distinct item ids in first-seen order.
    pub fn item_ids(&self) -> Vec<u64> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.item_id) {
                seen.push(row.item_id);
            }
        }
        seen
    }

    /// String cells for the table and CSV renditions.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    row.variation_id.to_string(),
                    row.variation_number.clone(),
                    row.parent_sku.clone(),
                ];
                for cell in &row.attributes {
                    cells.push(cell.value_name.clone());
                    cells.push(cell.value_id.map(|id| id.to_string()).unwrap_or_default());
                    cells.push(cell.localized_name.clone());
                }
                cells.push(row.item_id.to_string());
                cells
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Matching value triple for one attribute id, empty when the entry has no
/// attribute values at all or none for this id.
fn cell_for(entry: &VariationEntry, attribute_id: u32) -> AttributeCell {
    let Some(values) = &entry.variation_attribute_values else {
        return AttributeCell::default();
    };

    for value in values {
        if value.attribute_id == attribute_id {
            return AttributeCell {
                value_name: value.attribute_value.backend_name.clone(),
                value_id: Some(value.attribute_value.id),
                localized_name: String::new(),
            };
        }
    }

    AttributeCell::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::testutil::{attribute_def, entry};

    fn catalog() -> Vec<AttributeDefinition> {
        vec![
            attribute_def(1, "color"),
            attribute_def(2, "size_name"),
            attribute_def(3, "material"),
            attribute_def(4, "pattern"),
        ]
    }

    #[test]
    fn test_column_count_follows_selection() {
        // 4 fixed columns plus three per selected attribute
        let dataset = Dataset::new(&catalog(), &[1, 3]);
        assert_eq!(dataset.columns().len(), 4 + 3 * 2);
        assert_eq!(
            dataset.columns(),
            vec![
                "variation-id",
                "variation-number",
                "parent-variation",
                "color_name",
                "color_id",
                "color_lang",
                "material_name",
                "material_id",
                "material_lang",
                "item-id",
            ]
        );

        let dataset = Dataset::new(&catalog(), &[]);
        assert_eq!(dataset.columns().len(), 4);
    }

    #[test]
    fn test_selection_keeps_catalog_order() {
        let dataset = Dataset::new(&catalog(), &[3, 1]);
        let names: Vec<&str> = dataset.selected().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["color", "material"]);
    }

    #[test]
    fn test_main_variation_is_skipped() {
        let mut dataset = Dataset::new(&catalog(), &[1]);
        dataset.push_entry(&entry(50, "P-1", true, 5, &[]));
        dataset.push_entry(&entry(51, "S-1", false, 5, &[]));
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows[0].variation_id, 51);
    }

    #[test]
    fn test_missing_attribute_yields_empty_triple() {
        let mut dataset = Dataset::new(&catalog(), &[1, 2]);
        // color present, size absent
        dataset.push_entry(&entry(51, "S-1", false, 5, &[(1, "red", 100)]));
        let row = &dataset.rows[0];
        assert_eq!(row.attributes[0].value_name, "red");
        assert_eq!(row.attributes[0].value_id, Some(100));
        assert_eq!(row.attributes[1], AttributeCell::default());

        // entry without any attribute-values section
        dataset.push_entry(&VariationEntry {
            id: 52,
            number: Some("S-2".to_string()),
            is_main: false,
            item_id: 5,
            variation_attribute_values: None,
        });
        let row = &dataset.rows[1];
        assert_eq!(row.attributes[0], AttributeCell::default());
        assert_eq!(row.attributes[1], AttributeCell::default());
    }

    #[test]
    fn test_item_ids_distinct_first_seen_order() {
        let mut dataset = Dataset::new(&catalog(), &[]);
        dataset.push_entry(&entry(51, "a", false, 7, &[]));
        dataset.push_entry(&entry(52, "b", false, 5, &[]));
        dataset.push_entry(&entry(53, "c", false, 7, &[]));
        assert_eq!(dataset.item_ids(), vec![7, 5]);
    }

    #[test]
    fn test_to_rows_shapes_cells() {
        let mut dataset = Dataset::new(&catalog(), &[1]);
        dataset.push_entry(&entry(51, "S-1", false, 5, &[(1, "red", 100)]));
        let rows = dataset.to_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["51", "S-1", "", "red", "100", "", "5"]);
    }
}

use crate::core::export::dataset::Dataset;
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use crossterm::terminal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 100;

/// Formatter for the console rendition of an export dataset
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Set minimum and maximum width for improved stability
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80), // Default width
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render the dataset as a bordered console table.
    pub fn render_dataset(&self, dataset: &Dataset) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let headers: Vec<Cell> = dataset
            .columns()
            .iter()
            .map(|column| {
                if self.use_colors {
                    Cell::new(column)
                        .add_attribute(Attribute::Bold)
                        .fg(comfy_table::Color::Green)
                } else {
                    Cell::new(column).add_attribute(Attribute::Bold)
                }
            })
            .collect();
        table.set_header(headers);

        for row in dataset.to_rows() {
            let cells: Vec<Cell> = row
                .iter()
                .map(|value| Cell::new(self.truncate_text(value, MAX_CELL_WIDTH)))
                .collect();
            table.add_row(cells);
        }

        table.to_string()
    }

    /// Set table width to match the terminal size
    fn configure_table_width(&self, table: &mut Table) {
        if let Some(terminal_width) = self.max_width {
            // Adjust considering borders and padding from terminal width
            let available_width = if terminal_width > 20 {
                terminal_width - 6
            } else {
                terminal_width.max(40)
            };

            table.set_width(available_width as u16);
        } else {
            table.set_width(80);
        }
    }

    /// Truncate text to specified width and add ellipsis
    fn truncate_text(&self, text: &str, max_width: usize) -> String {
        if text.width() <= max_width {
            return text.to_string();
        }

        let ellipsis = "...";
        let ellipsis_width = ellipsis.width();

        if max_width <= ellipsis_width {
            return ellipsis[..max_width].to_string();
        }

        let target_width = max_width - ellipsis_width;
        let mut result = String::new();
        let mut current_width = 0;

        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > target_width {
                break;
            }
            result.push(ch);
            current_width += ch_width;
        }

        result.push_str(ellipsis);
        result
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{AttributeValue, VariationAttributeValue, VariationEntry};
    use crate::core::export::dataset::AttributeDefinition;

    fn sample_dataset() -> Dataset {
        let catalog = vec![AttributeDefinition {
            id: 1,
            name: "color".to_string(),
        }];
        let mut dataset = Dataset::new(&catalog, &[1]);
        dataset.push_entry(&VariationEntry {
            id: 10,
            number: Some("S-10".to_string()),
            is_main: false,
            item_id: 5,
            variation_attribute_values: Some(vec![VariationAttributeValue {
                attribute_id: 1,
                attribute_value: AttributeValue {
                    backend_name: "red".to_string(),
                    id: 100,
                },
            }]),
        });
        dataset
    }

    #[test]
    fn test_render_dataset_contains_headers_and_values() {
        let display = TableDisplay::new().with_max_width(160).with_colors(false);
        let rendered = display.render_dataset(&sample_dataset());
        assert!(rendered.contains("variation-id"));
        assert!(rendered.contains("color_name"));
        assert!(rendered.contains("item-id"));
        assert!(rendered.contains("red"));
        assert!(rendered.contains("S-10"));
    }

    #[test]
    fn test_truncate_text() {
        let display = TableDisplay::new();
        assert_eq!(display.truncate_text("Hello", 10), "Hello");
        assert_eq!(display.truncate_text("Hello World", 8), "Hello...");
    }
}

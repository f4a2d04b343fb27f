//! Semicolon-separated CSV rendition of an export dataset

use crate::core::export::dataset::Dataset;
use chrono::Local;
use std::io::{self, Write};

const SEPARATOR: char = ';';

/// Write the dataset, headers first, as semicolon-separated rows.
pub fn write_csv(dataset: &Dataset, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{}", join_row(&dataset.columns()))?;
    for row in dataset.to_rows() {
        writeln!(output, "{}", join_row(&row))?;
    }
    Ok(())
}

/// Default export file name, e.g. `2020-07-30_14-21_Attribute_all.csv`.
pub fn timestamped_filename(scope_label: &str) -> String {
    format!(
        "{}_Attribute_{}.csv",
        Local::now().format("%Y-%m-%d_%H-%M"),
        scope_label
    )
}

fn join_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Quote a field when it contains the separator, quotes or line breaks.
fn escape_field(field: &str) -> String {
    if field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

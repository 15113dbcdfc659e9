use crate::api::models::Record;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use serde_json::Value;

/// Formatter for list output
pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            use_colors: std::env::var("NO_COLOR").is_err(),
        }
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn header_cell(&self, title: &str) -> Cell {
        if self.use_colors {
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green)
        } else {
            Cell::new(title).add_attribute(Attribute::Bold)
        }
    }

    /// Single-column table of names (databases, tables)
    pub fn render_names(&self, title: &str, names: &[String]) -> String {
        if names.is_empty() {
            return format!("No {} found.", title.to_lowercase());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_header(vec![self.header_cell(title)]);
        for name in names {
            table.add_row(vec![Cell::new(name)]);
        }
        table.to_string()
    }

    /// Records as rows; columns are the union of keys in first-seen order
    pub fn render_records(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return "No records found.".to_string();
        }

        let mut columns: Vec<&str> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(columns.iter().map(|c| self.header_cell(c)).collect::<Vec<_>>());

        for record in records {
            let cells: Vec<Cell> = columns
                .iter()
                .map(|column| match record.get(*column) {
                    None | Some(Value::Null) if self.use_colors => Cell::new("NULL")
                        .fg(Color::DarkGrey)
                        .add_attribute(Attribute::Italic),
                    None | Some(Value::Null) => Cell::new("NULL"),
                    Some(value) => Cell::new(format_cell_value(value)),
                })
                .collect();
            table.add_row(cells);
        }

        let mut output = table.to_string();
        output.push_str(&format!("\n{} record(s)", records.len()));
        output
    }
}

fn format_cell_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Setting")]
    pub setting: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            setting: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

/// Render adapter settings as a two-column table
pub fn settings_table(settings: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in settings {
        builder.add_row(label, value);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert!(TableBuilder::new().build().is_empty());
    }

    #[test]
    fn test_settings_table_contains_rows() {
        let table = settings_table(&[("Language", "en"), ("Runtime", "java -jar")]);
        assert!(table.contains("Setting"));
        assert!(table.contains("Language"));
        assert!(table.contains("java -jar"));
    }
}

use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
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
            metric: label.to_string(),
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

/// Render thesaurus statistics, per-label relation counts indented
pub fn stats_table(stats: &crate::storage::DbStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Sinsets", &stats.sinsets.to_string());
    builder.add_row("Words", &stats.words.to_string());
    builder.add_row("Relations", &stats.relations.to_string());
    for (label, count) in &stats.by_label {
        builder.add_row(&format!("  {}", label), &count.to_string());
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbStats;

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert!(TableBuilder::new().build().is_empty());
    }

    #[test]
    fn test_stats_table_lists_labels() {
        let stats = DbStats {
            sinsets: 2,
            words: 3,
            relations: 1,
            by_label: vec![("ВЫШЕ".to_string(), 1)],
        };
        let table = stats_table(&stats);
        assert!(table.contains("Sinsets"));
        assert!(table.contains("ВЫШЕ"));
    }
}

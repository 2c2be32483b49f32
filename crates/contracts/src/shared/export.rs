//! CSV/JSON export builders.
//!
//! Pure string building; the frontend wraps these in a Blob download or the
//! desktop host's save dialog. Rows are exported in the order given, which
//! is the current filtered/sorted view.

use serde::Serialize;

/// Types exportable as a flat table.
pub trait TableExport {
    /// Column headers, in the exact field order of the rows.
    fn headers() -> Vec<&'static str>;

    /// One row of cell values, matching `headers()` order.
    fn row(&self) -> Vec<String>;
}

/// Build a CSV document: header row, then one comma-joined row per record.
/// Cells containing the separator, quotes, or newlines are quoted with
/// doubled inner quotes.
pub fn to_csv<T: TableExport>(rows: &[T]) -> String {
    let mut csv = String::new();
    csv.push_str(&join_row(
        &T::headers().iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    csv.push('\n');
    for item in rows {
        csv.push_str(&join_row(&item.row()));
        csv.push('\n');
    }
    csv
}

/// Serialize rows exactly as held in memory.
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(rows)
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Pair {
        id: String,
        name: String,
    }

    impl Pair {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl TableExport for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["id", "name"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.id.clone(), self.name.clone()]
        }
    }

    #[test]
    fn csv_has_header_then_one_line_per_record() {
        let rows = vec![Pair::new("m1", "TechStore Italia"), Pair::new("m2", "Fashion Boutique")];
        let csv = to_csv(&rows);
        assert_eq!(csv, "id,name\nm1,TechStore Italia\nm2,Fashion Boutique\n");
    }

    #[test]
    fn csv_of_empty_collection_is_header_only() {
        let csv = to_csv::<Pair>(&[]);
        assert_eq!(csv, "id,name\n");
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        let rows = vec![Pair::new("m1", "Rossi, Bianchi & Co")];
        let csv = to_csv(&rows);
        assert_eq!(csv, "id,name\nm1,\"Rossi, Bianchi & Co\"\n");
    }

    #[test]
    fn quotes_are_doubled() {
        let rows = vec![Pair::new("m1", "Bar \"Centrale\"")];
        let csv = to_csv(&rows);
        assert_eq!(csv, "id,name\nm1,\"Bar \"\"Centrale\"\"\"\n");
    }

    #[test]
    fn json_is_the_in_memory_graph() {
        let rows = vec![Pair::new("m1", "TechStore Italia")];
        let json = to_json(&rows).unwrap();
        assert_eq!(json, r#"[{"id":"m1","name":"TechStore Italia"}]"#);
    }
}

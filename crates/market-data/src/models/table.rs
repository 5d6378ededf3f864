use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Raw tabular payload as ISS returns it: a column-name list plus rows of
/// scalar/null values aligned with that list.
///
/// Both fields default to empty, so a response that omits the table
/// entirely deserializes into an empty table rather than failing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IssTable {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

impl IssTable {
    /// Index of a named column, or `None` if the payload lacks it.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Read a cell as text. Absent columns, short rows, nulls and non-string
/// values all read as `None`.
pub fn cell_text(row: &[Value], col: Option<usize>) -> Option<String> {
    let value = row.get(col?)?;
    value.as_str().map(|s| s.to_string())
}

/// Read a cell as a decimal. Absent columns, short rows, nulls and
/// non-numeric values all read as `None`.
pub fn cell_decimal(row: &[Value], col: Option<usize>) -> Option<Decimal> {
    let value = row.get(col?)?;
    Decimal::from_f64_retain(value.as_f64()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample() -> IssTable {
        serde_json::from_value(json!({
            "columns": ["SECID", "LAST", "VALTODAY"],
            "data": [
                ["SBER", 285.5, 1000000],
                ["GAZP", null, null]
            ]
        }))
        .unwrap()
    }

    #[test]
    fn column_lookup_finds_present_columns() {
        let table = sample();
        assert_eq!(table.column("SECID"), Some(0));
        assert_eq!(table.column("VALTODAY"), Some(2));
        assert_eq!(table.column("PREVPRICE"), None);
    }

    #[test]
    fn cells_read_text_and_decimals() {
        let table = sample();
        let row = &table.data[0];
        assert_eq!(cell_text(row, table.column("SECID")), Some("SBER".into()));
        assert_eq!(cell_decimal(row, table.column("LAST")), Some(dec!(285.5)));
        assert_eq!(cell_decimal(row, table.column("VALTODAY")), Some(dec!(1000000)));
    }

    #[test]
    fn null_and_absent_cells_read_as_none() {
        let table = sample();
        let row = &table.data[1];
        assert_eq!(cell_decimal(row, table.column("LAST")), None);
        // absent column
        assert_eq!(cell_decimal(row, None), None);
        // text cell is not a number
        assert_eq!(cell_decimal(row, table.column("SECID")), None);
    }

    #[test]
    fn missing_table_deserializes_empty() {
        let table: IssTable = serde_json::from_value(json!({})).unwrap();
        assert!(table.columns.is_empty());
        assert!(table.data.is_empty());
    }
}

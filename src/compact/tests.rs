//! Tests for the COMPACT format module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Delimiter Resolver Tests
// ============================================================================

#[test_case("09", b'\t'; "two digit tab")]
#[test_case("9", b'\t'; "single digit pads to tab")]
#[test_case("7C", b'|'; "pipe upper")]
#[test_case("7c", b'|'; "pipe lower")]
#[test_case("2C", b','; "comma")]
#[test_case("0", 0x00; "single zero")]
#[test_case("ff", 0xFF; "max byte")]
#[test_case("A", b'\n'; "single hex letter")]
fn test_resolve_delimiter(value: &str, expected: u8) {
    assert_eq!(resolve_delimiter(value).unwrap(), expected);
}

#[test]
fn test_resolve_delimiter_long_value_uses_first_two_digits() {
    // pad-then-decode only ever looks at the first two characters
    assert_eq!(resolve_delimiter("0900").unwrap(), b'\t');
}

#[test_case(""; "empty")]
#[test_case("g"; "non hex single")]
#[test_case("zz"; "non hex pair")]
#[test_case("x9"; "non hex first")]
fn test_resolve_delimiter_invalid(value: &str) {
    assert!(matches!(
        resolve_delimiter(value),
        Err(Error::DelimiterFormat { .. })
    ));
}

#[test]
fn test_delimiter_from_start() {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_reader(&br#"<DELIMITER value="09"/>"#[..]);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).unwrap() {
            Event::Empty(e) => {
                assert_eq!(delimiter_from_start(&e).unwrap(), b'\t');
                break;
            }
            Event::Eof => panic!("no DELIMITER element"),
            _ => {}
        }
    }
}

#[test]
fn test_default_delimiter_is_tab() {
    assert_eq!(DEFAULT_DELIMITER, b'\t');
}

// ============================================================================
// Row Splitter Tests
// ============================================================================

#[test]
fn test_split_row_basic() {
    assert_eq!(split_compact_row("|a|b|c|", '|'), vec!["a", "b", "c"]);
}

#[test]
fn test_split_row_tab_delimiter() {
    assert_eq!(
        split_compact_row("\tProperty\tRES\tResidential\t", '\t'),
        vec!["Property", "RES", "Residential"]
    );
}

#[test]
fn test_split_row_empty_row() {
    assert_eq!(split_compact_row("||", '|'), Vec::<String>::new());
}

#[test]
fn test_split_row_empty_string() {
    assert_eq!(split_compact_row("", '|'), Vec::<String>::new());
}

#[test]
fn test_split_row_preserves_interior_empty_fields() {
    assert_eq!(split_compact_row("|a||c|", '|'), vec!["a", "", "c"]);
}

#[test]
fn test_split_row_missing_bounds_drops_fields() {
    // documented hazard: the bounding segments are dropped unconditionally,
    // so an unbounded row loses its outer fields
    assert_eq!(split_compact_row("a|b|c", '|'), vec!["b"]);
}

// ============================================================================
// CompactTable Tests
// ============================================================================

fn sample_table() -> CompactTable {
    CompactTable::new(
        vec!["ResourceID".to_string(), "StandardName".to_string()],
        vec![
            vec!["PropertyA".to_string(), "RESI".to_string()],
            vec!["PropertyB".to_string(), "COMM".to_string()],
        ],
    )
    .unwrap()
}

#[test]
fn test_table_lookup() {
    let table = sample_table();
    assert_eq!(table.lookup("StandardName", 0).unwrap(), "RESI");
    assert_eq!(table.lookup("ResourceID", 1).unwrap(), "PropertyB");
}

#[test]
fn test_table_lookup_unknown_column() {
    let table = sample_table();
    assert!(matches!(
        table.lookup("Missing", 0),
        Err(Error::UnknownColumn { .. })
    ));
}

#[test]
fn test_table_lookup_row_out_of_range() {
    let table = sample_table();
    assert!(matches!(
        table.lookup("ResourceID", 2),
        Err(Error::RowIndexOutOfRange { row: 2, rows: 2 })
    ));
}

#[test]
fn test_table_row_shape_mismatch() {
    let result = CompactTable::new(
        vec!["A".to_string(), "B".to_string()],
        vec![vec!["1".to_string()]],
    );
    assert!(matches!(
        result,
        Err(Error::RowShapeMismatch {
            row: 0,
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn test_table_from_compact() {
    let rows = vec!["\t1\tAlice\t".to_string(), "\t2\tBob\t".to_string()];
    let table = CompactTable::from_compact("\tid\tname\t", &rows, '\t').unwrap();
    assert_eq!(table.columns(), ["id", "name"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("name", 1).unwrap(), "Bob");
}

#[test]
fn test_table_empty() {
    let table = CompactTable::new(vec!["A".to_string()], vec![]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_column_index_first_occurrence_wins() {
    let index = ColumnIndex::new(&[
        "Name".to_string(),
        "Value".to_string(),
        "Name".to_string(),
    ]);
    assert_eq!(index.position("Name"), Some(0));
    assert_eq!(index.position("Value"), Some(1));
    assert_eq!(index.position("Other"), None);
}

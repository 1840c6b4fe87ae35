// tests/table_rules.rs
//
// Whole-pipeline checks: CSV text in, table view out.
use aptable::config::options::RenderOptions;
use aptable::csv::{Delim, parse_sheet};
use aptable::render::{self, Body, RowView, TableView};

fn view_with(text: &str, opts: &RenderOptions) -> TableView {
    render::build_table(&parse_sheet(text, Delim::Csv).unwrap(), opts)
}

fn view(text: &str) -> TableView {
    view_with(text, &RenderOptions::default())
}

fn rows(v: &TableView) -> &[RowView] {
    match &v.body {
        Body::Rows(r) => r,
        Body::Placeholder { .. } => panic!("expected rows"),
    }
}

#[test]
fn header_order_matches_sheet_minus_availability() {
    let v = view("Elérhető,Lakás,Emelet,Terasz m2\nigen,A1,1,12\n");
    assert_eq!(v.header_texts(), vec!["Lakás", "Emelet", "Terasz m2"]);
    assert_eq!(rows(&v)[0].cells, vec!["A1", "I.", "12,00"]);
}

#[test]
fn floors_sort_numerically_not_textually() {
    let v = view("Lakás,Emelet\nX,10\nY,2\nZ,FSZ\n");
    let floors: Vec<&str> = rows(&v).iter().map(|r| r.cells[1].as_str()).collect();
    // "FSZ" has no digits: floor 0
    assert_eq!(floors, vec!["FSZ", "II.", "10"]);
}

#[test]
fn equal_keys_keep_sheet_order() {
    let v = view("Lakás,Emelet,Megjegyzés\nA1,1,első\nA1,1,második\n");
    let notes: Vec<&str> = rows(&v).iter().map(|r| r.cells[2].as_str()).collect();
    assert_eq!(notes, vec!["első", "második"]);
}

#[test]
fn million_positions_are_configurable() {
    let opts = RenderOptions { million_columns: vec![2], ..RenderOptions::default() };
    let v = view_with("Lakás,Emelet,Ár\nA1,0,32500000\n", &opts);
    assert_eq!(rows(&v)[0].cells[2], "32.50");

    let v = view("Lakás,Emelet,Ár\nA1,0,32500000\n");
    assert_eq!(rows(&v)[0].cells[2], "32500000");
}

#[test]
fn short_rows_render_dashes() {
    let v = view("Lakás,Emelet,Szobák,m2\nA1\n");
    assert_eq!(rows(&v)[0].cells, vec!["A1", "FSZ", "-", "-"]);
}

#[test]
fn unpriced_flat_shows_zero_millions() {
    let v = view(
        "Lakás,Emelet,Szobák,m2,Szerk.kész ár,Kulcsrakész ár\n\
         A1,0,2,,45500000,Érdeklődjön\n",
    );
    assert_eq!(rows(&v)[0].cells, vec!["A1", "FSZ", "2", "-", "45.50", "0.00"]);
}

#[test]
fn area_and_availability_prefix_headers() {
    let v = view("Lakás,Emelet,Négyzetméter,Elér.\nA1,1,\"48,5\",N\n");
    assert_eq!(v.header_texts(), vec!["Lakás", "Emelet", "Négyzetméter"]);
    assert_eq!(rows(&v)[0].cells, vec!["A1", "I.", "48,50"]);
    assert_eq!(rows(&v)[0].state, Some(aptable::render::RowState::Unavailable));
}

#[test]
fn repeated_header_reads_last_column() {
    let v = view("Lakás,Emelet,Kert m2,Kert m2\nA1,0,10,20\n");
    assert_eq!(rows(&v)[0].cells, vec!["A1", "FSZ", "20,00", "20,00"]);
}

#[test]
fn missing_header_is_an_error() {
    assert!(parse_sheet("", Delim::Csv).is_err());
    assert!(parse_sheet("\n\r\n", Delim::Csv).is_err());
}

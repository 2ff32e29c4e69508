use super::*;
use serde_json::json;

fn load_item_records() -> Vec<Record> {
    let json_str = include_str!("../../xivapi/tests/fixtures/search_item.json");
    let resp: Value = serde_json::from_str(json_str).unwrap();
    serde_json::from_value(resp["results"].clone()).unwrap()
}

// -- Row builder tests --

#[test]
fn test_build_record_rows_mapping() {
    let records = load_item_records();
    let rows = build_record_rows(&records, true);
    assert_eq!(rows.len(), 2);

    let row = &rows[0];
    assert_eq!(row.sheet, "Item");
    assert_eq!(row.row, "44100");
    assert_eq!(row.score, "1.00");
    assert_eq!(row.name, "Clarent");
    assert_eq!(row.fields, "ClassJobCategory=PLD, LevelItem=730");

    assert_eq!(rows[1].name, "Clarent Replica");
    assert_eq!(rows[1].fields, "LevelItem=1");
}

#[test]
fn test_build_record_rows_subrow_and_missing_keys() {
    let records = vec![
        json!({ "sheet": "Quest", "row_id": 65536, "subrow_id": 2, "fields": {} }),
        json!({ "unexpected": true }),
    ];
    let rows = build_record_rows(&records, true);
    assert_eq!(rows[0].row, "65536.2");
    assert_eq!(rows[0].name, "-");
    assert_eq!(rows[0].fields, "");
    assert_eq!(rows[1].sheet, "-");
    assert_eq!(rows[1].row, "-");
    assert_eq!(rows[1].score, "");
}

#[test]
fn test_long_field_summary_truncated_only_for_tables() {
    let description = "x".repeat(200);
    let records = vec![json!({
        "sheet": "Item",
        "row_id": 1,
        "fields": { "Description": description }
    })];

    let table_rows = build_record_rows(&records, true);
    assert_eq!(table_rows[0].fields.chars().count(), MAX_SUMMARY);
    assert!(table_rows[0].fields.ends_with("..."));

    let csv_rows = build_record_rows(&records, false);
    assert_eq!(csv_rows[0].fields.len(), "Description=".len() + 200);
}

#[test]
fn test_summarize_value_variants() {
    assert_eq!(summarize_value(&json!("Bard")), "Bard");
    assert_eq!(summarize_value(&json!(92)), "92");
    assert_eq!(summarize_value(&json!(true)), "true");
    assert_eq!(summarize_value(&json!(null)), "null");
    assert_eq!(summarize_value(&json!([1, 2, 3])), "[3]");
    assert_eq!(summarize_value(&json!({ "value": 5, "sheet": "ItemUICategory" })), "5");
    assert_eq!(summarize_value(&json!({ "other": 1 })), "{..}");
}

#[test]
fn test_truncate_text_counts_chars() {
    assert_eq!(truncate_text("クラレント", 10), "クラレント");
    assert_eq!(truncate_text("abcdefghij", 8), "abcde...");
}

#[test]
fn test_build_sheet_rows() {
    let sheets = vec!["Item".to_string(), "Mount".to_string()];
    let rows = build_sheet_rows(&sheets);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "Mount");
}

#[test]
fn test_build_tool_rows_lists_required_arguments() {
    let def = ToolDefinition::new("item_query", "Search items").with_parameters(json!({
        "type": "object",
        "properties": { "query": { "type": "string" } },
        "required": ["query"]
    }));
    let rows = build_tool_rows(&[&def]);
    assert_eq!(rows[0].name, "item_query");
    assert_eq!(rows[0].arguments, "query");
    assert_eq!(rows[0].description, "Search items");
}

#[test]
fn test_output_format_parse() {
    assert!(matches!(OutputFormat::parse("json"), OutputFormat::Json));
    assert!(matches!(OutputFormat::parse("csv"), OutputFormat::Csv));
    assert!(matches!(OutputFormat::parse("markdown"), OutputFormat::Markdown));
    assert!(matches!(OutputFormat::parse("anything"), OutputFormat::Table));
}

// -- Serialization tests --

#[test]
fn test_record_row_serializes_with_column_names() {
    let rows = build_record_rows(&load_item_records(), false);
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["Sheet"], "Item");
    assert_eq!(json["Row"], "44100");
    assert_eq!(json["Name"], "Clarent");
}

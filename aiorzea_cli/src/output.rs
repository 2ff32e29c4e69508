use aiorzea_lib::types::Record;
use aiorzea_lib::ToolDefinition;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Longest field summary shown in a table cell.
const MAX_SUMMARY: usize = 80;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "md" | "markdown" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "Sheet")]
    #[serde(rename = "Sheet")]
    sheet: String,
    #[tabled(rename = "Row")]
    #[serde(rename = "Row")]
    row: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Fields")]
    #[serde(rename = "Fields")]
    fields: String,
}

#[derive(Tabled, Serialize)]
struct SheetRow {
    #[tabled(rename = "Sheet")]
    #[serde(rename = "Sheet")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct ToolRow {
    #[tabled(rename = "Tool")]
    #[serde(rename = "Tool")]
    name: String,
    #[tabled(rename = "Arguments")]
    #[serde(rename = "Arguments")]
    arguments: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

// -- Row builders --

fn build_record_rows(records: &[Record], truncate: bool) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| {
            let row = match (r["row_id"].as_u64(), r["subrow_id"].as_u64()) {
                (Some(row), Some(sub)) => format!("{}.{}", row, sub),
                (Some(row), None) => row.to_string(),
                _ => "-".to_string(),
            };
            let mut fields = summarize_fields(&r["fields"]);
            if truncate {
                fields = truncate_text(&fields, MAX_SUMMARY);
            }
            RecordRow {
                sheet: r["sheet"].as_str().unwrap_or("-").to_string(),
                row,
                score: r["score"]
                    .as_f64()
                    .map(|s| format!("{:.2}", s))
                    .unwrap_or_default(),
                name: r["fields"]["Name"].as_str().unwrap_or("-").to_string(),
                fields,
            }
        })
        .collect()
}

fn build_sheet_rows(sheets: &[String]) -> Vec<SheetRow> {
    sheets
        .iter()
        .map(|name| SheetRow { name: name.clone() })
        .collect()
}

fn build_tool_rows(definitions: &[&ToolDefinition]) -> Vec<ToolRow> {
    definitions
        .iter()
        .map(|d| ToolRow {
            name: d.name.clone(),
            arguments: d.parameters["required"]
                .as_array()
                .map(|req| {
                    req.iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
            description: truncate_text(&d.description, MAX_SUMMARY),
        })
        .collect()
}

/// `Key=value` pairs for every field except `Name`, which has its own column.
///
/// Linked rows show their name when the link was expanded, otherwise their
/// raw value.
fn summarize_fields(fields: &Value) -> String {
    let Some(map) = fields.as_object() else {
        return String::new();
    };
    map.iter()
        .filter(|(key, _)| key.as_str() != "Name")
        .map(|(key, value)| format!("{}={}", key, summarize_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Array(items) => format!("[{}]", items.len()),
        Value::Object(obj) => {
            if let Some(name) = obj
                .get("fields")
                .and_then(|f| f.get("Name"))
                .and_then(Value::as_str)
            {
                name.to_string()
            } else if let Some(inner) = obj.get("value") {
                summarize_value(inner)
            } else {
                "{..}".to_string()
            }
        }
        other => other.to_string(),
    }
}

fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

// -- Table output --

pub fn print_records_table(records: &[Record]) {
    println!("{}", Table::new(build_record_rows(records, true)));
}

pub fn print_sheets_table(sheets: &[String]) {
    println!("{}", Table::new(build_sheet_rows(sheets)));
}

pub fn print_tools_table(definitions: &[&ToolDefinition]) {
    println!("{}", Table::new(build_tool_rows(definitions)));
}

// -- Markdown output --

pub fn print_records_markdown(records: &[Record]) {
    let mut table = Table::new(build_record_rows(records, true));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_sheets_markdown(sheets: &[String]) {
    let mut table = Table::new(build_sheet_rows(sheets));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_tools_markdown(definitions: &[&ToolDefinition]) {
    let mut table = Table::new(build_tool_rows(definitions));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_records_csv(records: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_record_rows(records, false) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_sheets_csv(sheets: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_sheet_rows(sheets) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_tools_csv(definitions: &[&ToolDefinition]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_tool_rows(definitions) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

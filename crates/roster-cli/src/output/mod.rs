use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::context::AppContext;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    options: TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(to_table(serde_json::to_value(value)?).render(options)),
    }
}

/// Print a serializable response using the context's format.
pub fn output<T: Serialize>(value: &T, ctx: &AppContext) -> anyhow::Result<()> {
    let rendered = render(value, ctx.format, ctx.table)?;
    println!("{rendered}");
    Ok(())
}

fn to_table(value: Value) -> Table {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            object_rows(&items)
        }
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in &items {
                table.push_row(vec![cell(item)]);
            }
            table
        }
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in &map {
                table.push_row(vec![key.clone(), cell(value)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![cell(&scalar)]);
            table
        }
    }
}

/// One row per object; columns in first-seen key order.
fn object_rows(items: &[Value]) -> Table {
    let mut columns: Vec<&str> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }

    let mut table = Table::new(columns.iter().copied());
    for map in items.iter().filter_map(Value::as_object) {
        table.push_row(
            columns
                .iter()
                .map(|column| map.get(*column).map_or_else(|| "-".to_string(), cell))
                .collect(),
        );
    }
    table
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Object(map) => map
            .get("status")
            .or_else(|| map.get("id"))
            .map_or_else(|| value.to_string(), cell),
        Value::Array(_) => value.to_string(),
    }
}

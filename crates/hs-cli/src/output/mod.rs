use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Page views nest deeply, so objects are flattened to dotted paths
/// (`view.draft.errors.github`) and shown as a two-column field table.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let options = table_options();

    if let Value::Array(items) = &value {
        if let Some(rendered) = render_rows(items, options) {
            return Ok(rendered);
        }
    }

    let mut entries = Vec::new();
    flatten("", &value, &mut entries);
    if entries.is_empty() {
        return Ok(String::from("(empty)"));
    }
    let rows = entries
        .into_iter()
        .map(|(path, cell)| vec![path, cell])
        .collect::<Vec<_>>();
    Ok(table::render(&["field", "value"], &rows, options))
}

/// An array of flat objects becomes one row per object.
fn render_rows(items: &[Value], options: table::TableOptions) -> Option<String> {
    let objects = items.iter().map(Value::as_object).collect::<Option<Vec<_>>>()?;
    if objects.is_empty() {
        return Some(String::from("(no rows)"));
    }

    let mut headers = Vec::<&str>::new();
    for object in &objects {
        for (key, value) in *object {
            if value.is_object() {
                return None;
            }
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = objects
        .iter()
        .map(|object| {
            headers
                .iter()
                .map(|header| object.get(*header).map_or_else(|| String::from("-"), scalar_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Some(table::render(&headers, &rows, options))
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(&join_path(prefix, key), nested, out);
            }
        }
        Value::Array(items) if items.iter().all(|item| !item.is_object() && !item.is_array()) => {
            let joined = items.iter().map(scalar_cell).collect::<Vec<_>>().join(", ");
            out.push((prefix.to_string(), joined));
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{index}]"), item, out);
            }
        }
        scalar => {
            let path = if prefix.is_empty() { "value" } else { prefix };
            out.push((path.to_string(), scalar_cell(scalar)));
        }
    }
}

fn scalar_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

//! JSON rendering of a parsed program.
//!
//! Nodes serialize with flattened `start`/`end` offsets. The optional
//! `range` and `loc` decorations are added afterwards by walking the JSON
//! value, so the AST types stay free of rendering options.

use serde_json::{json, Map, Value};
use sol_ir::ast::Program;
use sol_ir::LineOffsetTable;

use crate::ParseOptions;

/// Render `program` as JSON, decorated according to `options`.
pub fn to_json(
    program: &Program,
    source: &str,
    options: &ParseOptions,
) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(program)?;
    if options.range || options.loc {
        let table = options.loc.then(|| LineOffsetTable::build(source));
        decorate(&mut value, options.range, table.as_ref());
    }
    Ok(value)
}

fn decorate(value: &mut Value, range: bool, table: Option<&LineOffsetTable<'_>>) {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                decorate(child, range, table);
            }
            if let Some((start, end)) = node_span(map) {
                if range {
                    map.insert("range".to_string(), json!([start, end]));
                }
                if let Some(table) = table {
                    let start = table.locate(start);
                    let end = table.locate(end);
                    map.insert(
                        "loc".to_string(),
                        json!({
                            "start": { "line": start.line, "column": start.column },
                            "end": { "line": end.line, "column": end.column },
                        }),
                    );
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                decorate(item, range, table);
            }
        }
        _ => {}
    }
}

/// `start`/`end` of an object tagged with a node `type`.
fn node_span(map: &Map<String, Value>) -> Option<(u32, u32)> {
    if !map.get("type").is_some_and(Value::is_string) {
        return None;
    }
    let offset = |key: &str| {
        map.get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };
    Some((offset("start")?, offset("end")?))
}

#[cfg(test)]
mod tests;

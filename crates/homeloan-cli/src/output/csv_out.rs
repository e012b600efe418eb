use serde_json::Value;
use std::io;

use super::{flatten, scalar_text};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(results)) = map.get("results") {
                write_array_csv(&mut wtr, results);
            } else {
                let body = match map.get("result") {
                    Some(Value::Object(result)) => result,
                    _ => map,
                };
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in flatten(body) {
                    let _ = wtr.write_record([key.as_str(), &scalar_text(&val)]);
                }
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&scalar_text(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&scalar_text(item)]);
        }
        return;
    };

    let headers: Vec<String> = flatten(first).into_iter().map(|(k, _)| k).collect();
    let _ = wtr.write_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let flat = flatten(map);
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    flat.iter()
                        .find(|(k, _)| k == h)
                        .map(|(_, v)| scalar_text(v))
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

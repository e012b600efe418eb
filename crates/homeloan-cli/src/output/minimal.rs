use serde_json::Value;

use super::{flatten, scalar_text};

/// Headline figure per command, most specific first.
const PRIORITY_KEYS: [&str; 6] = [
    "display.monthly_payment",
    "amortization.monthly_payment",
    "principal_share",
    "acknowledgement",
    "outcome",
    "total_interest",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result_obj {
        Value::Object(map) => {
            let flat = flatten(map);
            for key in PRIORITY_KEYS {
                if let Some((_, val)) = flat.iter().find(|(k, v)| k == key && !v.is_null()) {
                    println!("{}", scalar_text(val));
                    return;
                }
            }
            if let Some(Value::Array(results)) = map.get("results") {
                println!("{}", results.len());
            } else if let Some((key, val)) = flat.first() {
                println!("{}: {}", key, scalar_text(val));
            }
        }
        other => println!("{}", scalar_text(other)),
    }
}

use serde_json::Value;

/// Pretty-printed JSON on stdout, the default format.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to render JSON output: {e}"),
    }
}

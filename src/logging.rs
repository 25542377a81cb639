use serde_json::Value;
use std::fs::OpenOptions;
use std::io::{IsTerminal, Write};

const DEFAULT_LOG_PATH: &str = "/tmp/nestcalc-debug.log";
const DEBUG_LOG_ENV: &str = "NESTCALC_DEBUG_LOG";
const LOG_PATH_ENV: &str = "NESTCALC_LOG_PATH";

pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_LOG_ENV)
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Records a structured debug event when `NESTCALC_DEBUG_LOG` is set.
pub fn emit_event(event: &str, fields: Value) {
    if !debug_enabled() {
        return;
    }
    emit_log_message(&format_event(event, &fields));
}

fn format_event(event: &str, fields: &Value) -> String {
    let formatted_fields = serde_json::to_string_pretty(fields)
        .unwrap_or_else(|_| "<fields serialization error>".to_string());
    format!("NESTCALC DEBUG {event}\n{formatted_fields}\n")
}

fn emit_log_message(message: &str) {
    if let Some(path) = resolve_log_path() {
        if append_log_file(&path, message).is_ok() {
            return;
        }
    }

    eprintln!("{message}");
}

fn resolve_log_path() -> Option<String> {
    std::env::var(LOG_PATH_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            if std::io::stderr().is_terminal() {
                Some(DEFAULT_LOG_PATH.to_string())
            } else {
                None
            }
        })
}

fn append_log_file(path: &str, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(message.as_bytes())
}

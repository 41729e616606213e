//! Offline inspection copies of raw API responses.
//! Compiled only when the `debug-dumps` feature is enabled.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::trace::{debug, warn};

pub(crate) fn dump_dir() -> PathBuf {
    env::var("DORFYN_DUMP_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("dorfyn-dumps"))
}

fn pretty(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| body.to_string())
}

fn write_dump(key: &str, body: &str) -> Result<PathBuf, std::io::Error> {
    let dir = dump_dir();
    fs::create_dir_all(&dir)?;
    let safe: String = key
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    let path = dir.join(format!("{safe}.json"));
    fs::write(&path, pretty(body))?;
    Ok(path)
}

/// Best effort: a failed write is logged and otherwise ignored.
pub(crate) fn dump_body(key: &str, body: &str) {
    match write_dump(key, body) {
        Ok(_path) => debug!(path = %_path.display(), "wrote response dump"),
        Err(_e) => warn!("failed to write response dump for {key}: {_e}"),
    }
}

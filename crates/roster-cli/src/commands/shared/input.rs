use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read and deserialize a JSON document from `path`, or stdin when `path` is `-`.
pub fn read_json<T>(path: &Path, what: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| format!("failed to read {what} from stdin"))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {what} file {}", path.display()))?
    };

    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {what} JSON from {}", path.display()))
}

//! Diagnostics-only registry exports.
//!
//! This module owns the data structures used to dump the source registry for
//! consumption by external tooling. Keeping the implementation here keeps
//! the core registry surface small.

use super::{CONSUMED_SOURCES, SourceKey, all_sources};
use serde::Serialize;

#[derive(Serialize)]
struct DumpedSource {
    test_path: &'static str,
    attachment: &'static str,
    parameter: Option<&'static str>,
    values: Vec<&'static str>,
    file: &'static str,
    line: u32,
    consumed: bool,
}

#[derive(Serialize)]
struct RegistryDump {
    sources: Vec<DumpedSource>,
}

pub(super) fn dump_registry() -> serde_json::Result<String> {
    let consumed = CONSUMED_SOURCES
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let mut entries = all_sources();
    entries.sort_by_key(|source| (source.file, source.line, source.order));
    let sources = entries
        .into_iter()
        .map(|source| DumpedSource {
            test_path: source.test_path,
            attachment: source.attachment.kind(),
            parameter: source.attachment.parameter(),
            values: source.values.to_vec(),
            file: source.file,
            line: source.line,
            consumed: consumed.contains(&SourceKey::of(source)),
        })
        .collect();

    serde_json::to_string(&RegistryDump { sources })
}

//! JSON source registration and lookup.
//!
//! This module defines the `JsonSource` record, the `json_source!` macro for
//! registration, and the global registry a test harness inspects when
//! collecting arguments for a parametrized test.

use crate::types::{AttachmentPoint, JsonText, TestPath};
use hashbrown::{Equivalent, HashMap, HashSet};
use inventory::iter;
use std::sync::{LazyLock, Mutex};

#[cfg(feature = "diagnostics")]
pub(crate) mod diagnostics;

/// A single inline JSON source registered with the framework.
#[derive(Debug)]
pub struct JsonSource {
    /// Fully-qualified path of the test function the source belongs to.
    pub test_path: &'static str,
    /// Whether the source is attached to the function or to one parameter.
    pub attachment: AttachmentPoint,
    /// JSON literals in declaration order. Each element is expected to hold
    /// a single value or an array of values; the text is not validated here.
    pub values: &'static [&'static str],
    /// Source file where the attachment is declared.
    pub file: &'static str,
    /// Line number within the source file.
    pub line: u32,
    /// Position of the attachment within its declaration site. Registrations
    /// emitted by one attribute expansion share a source location; this
    /// field keeps them in declaration order.
    pub order: u32,
}

impl JsonSource {
    /// Iterate the declared values as [`JsonText`] wrappers, in declaration
    /// order.
    pub fn json_values(&self) -> impl Iterator<Item = JsonText<'static>> {
        self.values.iter().copied().map(JsonText::new)
    }
}

/// Register a JSON source with the global registry.
///
/// This macro hides the underlying `inventory` call and captures the source
/// location automatically. The attribute macro in `json-source-macros`
/// expands to an equivalent registration; this form exists for harnesses and
/// tests that register sources explicitly.
///
/// # Examples
///
/// ```
/// use json_source::{AttachmentPoint, json_source};
///
/// json_source!(
///     "suite::orders",
///     AttachmentPoint::Method,
///     &["{\"total\": 10}"],
/// );
/// ```
#[macro_export]
macro_rules! json_source {
    ($test_path:expr, $attachment:expr, $values:expr $(,)?) => {
        const _: () = {
            $crate::submit! {
                $crate::JsonSource {
                    test_path: $test_path,
                    attachment: $attachment,
                    values: $values,
                    file: file!(),
                    line: line!(),
                    order: 0,
                }
            }
        };
    };
}

inventory::collect!(JsonSource);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SourceKey {
    pub(crate) test_path: &'static str,
    pub(crate) attachment: AttachmentPoint,
}

impl SourceKey {
    fn of(source: &JsonSource) -> Self {
        Self {
            test_path: source.test_path,
            attachment: source.attachment,
        }
    }
}

// Lookup key over a borrowed path. Hashes field-for-field like `SourceKey`
// so hashed lookups agree with stored keys.
#[derive(Hash)]
struct SourceKeyRef<'a> {
    test_path: &'a str,
    attachment: AttachmentPoint,
}

impl Equivalent<SourceKey> for SourceKeyRef<'_> {
    fn equivalent(&self, key: &SourceKey) -> bool {
        self.test_path == key.test_path && self.attachment == key.attachment
    }
}

static SOURCE_MAP: LazyLock<HashMap<SourceKey, &'static JsonSource>> = LazyLock::new(|| {
    let sources: Vec<_> = iter::<JsonSource>.into_iter().collect();
    let mut map = HashMap::with_capacity(sources.len());
    for source in sources {
        if source.values.is_empty() {
            // Empty value lists are a provider-time error, not a registry
            // error; surface them early for diagnosis.
            log::warn!(
                "JSON source for `{}` ({}) at {}:{} declares no values; the arguments provider will reject it",
                source.test_path,
                source.attachment,
                source.file,
                source.line
            );
        }
        let key = SourceKey::of(source);
        assert!(
            !map.contains_key(&key),
            "duplicate JSON source for `{}` ({}) defined at {}:{}",
            source.test_path,
            source.attachment,
            source.file,
            source.line
        );
        map.insert(key, source);
    }
    map
});

// Tracks source collection for the lifetime of the current process only. The
// data is not persisted across binaries, keeping usage bookkeeping
// lightweight and ephemeral.
static CONSUMED_SOURCES: LazyLock<Mutex<HashSet<SourceKey>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

fn mark_consumed(key: SourceKey) {
    CONSUMED_SOURCES
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .insert(key);
}

fn all_sources() -> Vec<&'static JsonSource> {
    iter::<JsonSource>.into_iter().collect()
}

fn resolve_source(test_path: &str, attachment: AttachmentPoint) -> Option<&'static JsonSource> {
    SOURCE_MAP
        .get(&SourceKeyRef {
            test_path,
            attachment,
        })
        .copied()
}

/// Look up the source registered for a test path and attachment point.
///
/// Marks the source as consumed: a harness calling this during collection
/// leaves [`unconsumed_sources`] reporting only the declarations it never
/// read.
#[must_use]
pub fn lookup_source(
    test_path: TestPath<'_>,
    attachment: AttachmentPoint,
) -> Option<&'static JsonSource> {
    resolve_source(test_path.as_str(), attachment).inspect(|source| {
        mark_consumed(SourceKey::of(source));
    })
}

/// Return every source registered for a test, in declaration order.
///
/// Registration order through `inventory` is unspecified, so entries are
/// ordered by recorded source location, with [`JsonSource::order`] breaking
/// ties between registrations that share a location.
#[must_use]
pub fn sources_for_test(test_path: TestPath<'_>) -> Vec<&'static JsonSource> {
    let mut sources: Vec<_> = iter::<JsonSource>
        .into_iter()
        .filter(|source| source.test_path == test_path.as_str())
        .collect();
    sources.sort_by_key(|source| (source.file, source.line, source.order));
    sources
}

/// Return registered sources that were never collected by the harness.
#[must_use]
pub fn unconsumed_sources() -> Vec<&'static JsonSource> {
    let consumed = CONSUMED_SOURCES
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    all_sources()
        .into_iter()
        .filter(|source| !consumed.contains(&SourceKey::of(source)))
        .collect()
}

/// Serialize the registry to a JSON string.
///
/// Each entry records the test path, attachment kind, declared values,
/// source location, and whether the source has been collected. The JSON is
/// intended for consumption by diagnostic tooling.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[cfg(feature = "diagnostics")]
pub fn dump_registry() -> serde_json::Result<String> {
    diagnostics::dump_registry()
}

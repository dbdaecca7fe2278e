//! Layered property context and placeholder interpolation
//!
//! The context is an ordered list of named property sources; a later source
//! shadows an earlier one for the same key. Interpolation replaces `${key}`
//! tokens in descriptor string fields exactly once, without rescanning
//! resolved values, so a property value containing a placeholder never
//! expands further. Unknown keys stay literal.

use std::collections::BTreeMap;

use crate::descriptor::{BundleEntry, BundleList};

/// An ordered, layered set of named property sources
#[derive(Debug, Clone, Default)]
pub struct PropertyContext {
    sources: Vec<PropertySource>,
}

#[derive(Debug, Clone)]
struct PropertySource {
    #[allow(dead_code)]
    name: String,
    values: BTreeMap<String, String>,
}

impl PropertyContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a named source; later sources shadow earlier ones
    pub fn push_source(
        &mut self,
        name: impl Into<String>,
        values: BTreeMap<String, String>,
    ) {
        self.sources.push(PropertySource {
            name: name.into(),
            values,
        });
    }

    /// Resolve a key, last source wins
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.sources
            .iter()
            .rev()
            .find_map(|source| source.values.get(key).map(String::as_str))
    }

    /// True when no source holds any key
    pub fn is_empty(&self) -> bool {
        self.sources.iter().all(|source| source.values.is_empty())
    }
}

/// Replace `${key}` tokens in a single string
///
/// Single pass over the input; resolved values are copied through verbatim.
/// Tokens referencing unknown keys, unterminated tokens, and bare `$` pass
/// through unchanged.
pub fn interpolate_str(input: &str, context: &PropertyContext) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find('}') {
            Some(end) => {
                let key = &after_open[..end];
                match context.resolve(key) {
                    Some(value) => output.push_str(value),
                    None => {
                        // Unknown key: keep the token literal
                        output.push_str("${");
                        output.push_str(key);
                        output.push('}');
                    }
                }
                rest = &after_open[end + 1..];
            }
            None => {
                // Unterminated token, keep the remainder as-is
                output.push_str(&rest[start..]);
                return output;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Interpolate every string field of every entry in the descriptor
pub fn interpolate_bundle_list(list: &mut BundleList, context: &PropertyContext) {
    if context.is_empty() {
        return;
    }

    for start_level in &mut list.start_levels {
        for entry in &mut start_level.bundles {
            interpolate_entry(entry, context);
        }
    }
}

fn interpolate_entry(entry: &mut BundleEntry, context: &PropertyContext) {
    entry.group = interpolate_str(&entry.group, context);
    entry.artifact = interpolate_str(&entry.artifact, context);
    entry.version = interpolate_str(&entry.version, context);
    if let Some(run_modes) = &entry.run_modes {
        entry.run_modes = Some(interpolate_str(run_modes, context));
    }
}

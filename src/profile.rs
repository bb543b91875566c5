use std::path::Path;

use anyhow::{bail, Context, Result};
use compact_str::{format_compact, CompactString};
use serde::Deserialize;

/// A named, weighted item to lay out. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    pub name: CompactString,
    /// Cumulative cost, non-negative
    pub weight: f64,
}

impl WeightedItem {
    pub fn new(name: impl Into<CompactString>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// One function's statistics as exported by a profiler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileEntry {
    /// Function name, or the full description for builtins
    #[serde(alias = "name")]
    pub function: CompactString,
    #[serde(default)]
    pub file: Option<CompactString>,
    #[serde(default)]
    pub line: Option<u32>,
    /// Total time spent in the function, in seconds
    #[serde(alias = "totaltime")]
    pub total_time: f64,
}

impl ProfileEntry {
    /// `"{function} on line {line} in {file}"` when the location is known,
    /// otherwise the bare function name.
    pub fn display_name(&self) -> CompactString {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => {
                format_compact!("{} on line {} in {}", self.function, line, file)
            }
            _ => self.function.clone(),
        }
    }
}

/// Parse profiler output: a JSON array of entries, or plain text with one
/// `<total_time> <name>` pair per line (`#` starts a comment line).
pub fn parse_profile(text: &str) -> Result<Vec<ProfileEntry>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("Failed to parse JSON profile");
    }

    let mut entries = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((time, name)) = line.split_once(char::is_whitespace) else {
            bail!("line {}: expected '<total_time> <name>'", lineno + 1);
        };
        let total_time: f64 = time
            .parse()
            .with_context(|| format!("line {}: bad total time '{}'", lineno + 1, time))?;
        entries.push(ProfileEntry {
            function: CompactString::new(name.trim()),
            file: None,
            line: None,
            total_time,
        });
    }
    Ok(entries)
}

/// Read and parse a profile file.
pub fn load_profile(path: &Path) -> Result<Vec<ProfileEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let entries = parse_profile(&text).with_context(|| format!("in {}", path.display()))?;
    tracing::info!("Loaded {} profile entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Turn profile entries into layout items, costliest first.
/// The sort is stable so equal-cost entries keep their file order.
pub fn into_weighted_items(entries: &[ProfileEntry]) -> Vec<WeightedItem> {
    let mut items: Vec<WeightedItem> = entries
        .iter()
        .map(|e| WeightedItem::new(e.display_name(), e.total_time))
        .collect();
    items.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    items
}

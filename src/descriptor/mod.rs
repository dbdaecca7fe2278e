//! Bundle list descriptor model
//!
//! The descriptor is an ordered sequence of start levels, each holding an
//! ordered sequence of bundle entries. Start levels are unique by numeric
//! level; within a level, entries are unique by (group, artifact).
//!
//! Lifecycle: loaded from an existing file if present (otherwise empty),
//! mutated in memory by merge and interpolation, then serialized once.

pub mod codec;
pub mod entry;

use serde::{Deserialize, Serialize};

pub use entry::{BundleCoordinate, BundleEntry};

/// A start level group in the descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartLevel {
    /// Numeric activation priority
    pub level: i32,

    /// Bundles activated at this level, in declaration order
    #[serde(default)]
    pub bundles: Vec<BundleEntry>,
}

impl StartLevel {
    /// Create an empty start level
    pub fn new(level: i32) -> Self {
        Self {
            level,
            bundles: Vec::new(),
        }
    }

    /// Find an entry by (group, artifact) identity
    pub fn find_entry(&self, group: &str, artifact: &str) -> Option<&BundleEntry> {
        self.bundles.iter().find(|b| b.matches(group, artifact))
    }
}

/// Bundle list descriptor (bundles.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleList {
    /// Start level groups in activation order
    #[serde(rename = "start-levels", default)]
    pub start_levels: Vec<StartLevel>,
}

impl BundleList {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self {
            start_levels: Vec::new(),
        }
    }

    /// Find a start level by its numeric priority
    #[allow(dead_code)]
    pub fn level(&self, level: i32) -> Option<&StartLevel> {
        self.start_levels.iter().find(|sl| sl.level == level)
    }

    /// Total number of entries across all start levels
    pub fn entry_count(&self) -> usize {
        self.start_levels.iter().map(|sl| sl.bundles.len()).sum()
    }

    /// Fold discovered dependency coordinates into the descriptor
    ///
    /// Every original entry is kept. A coordinate already present as
    /// (group, artifact) within its target start level is dropped, keeping
    /// the original entry and its version. Missing start levels are created
    /// and inserted in ascending numeric order. Returns the number of
    /// entries added.
    pub fn merge(&mut self, coordinates: &[BundleCoordinate], default_level: i32) -> usize {
        let mut added = 0;

        for coordinate in coordinates {
            let target = coordinate.start_level.unwrap_or(default_level);
            let group = self.level_mut_or_insert(target);

            if group
                .find_entry(&coordinate.group, &coordinate.artifact)
                .is_some()
            {
                continue;
            }

            group.bundles.push(coordinate.clone().into_entry());
            added += 1;
        }

        added
    }

    /// Get a mutable start level, creating it in ascending position if absent
    fn level_mut_or_insert(&mut self, level: i32) -> &mut StartLevel {
        if let Some(pos) = self.start_levels.iter().position(|sl| sl.level == level) {
            return &mut self.start_levels[pos];
        }

        let insert_at = self
            .start_levels
            .iter()
            .position(|sl| sl.level > level)
            .unwrap_or(self.start_levels.len());
        self.start_levels.insert(insert_at, StartLevel::new(level));
        &mut self.start_levels[insert_at]
    }
}

//! In-memory best-time table.
//!
//! Keeps the fastest completion times per level, fastest first. Nothing is persisted.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTimeEntry {
    pub player: String,
    pub millis: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBestTimes {
    pub level: u32,
    pub entries: Vec<BestTimeEntry>,
}

#[derive(Debug, Clone)]
pub struct BestTimes {
    per_level: usize,
    levels: BTreeMap<u32, Vec<BestTimeEntry>>,
}

impl BestTimes {
    /// Table keeping at most `per_level` entries per level.
    pub fn new(per_level: usize) -> Self {
        Self {
            per_level,
            levels: BTreeMap::new(),
        }
    }

    /// Record a completion. Returns the 1-based rank, or `None` if it did not place.
    ///
    /// Ties keep the earlier entry ahead.
    pub fn record(&mut self, level: u32, player: &str, time: Duration) -> Option<usize> {
        if self.per_level == 0 {
            return None;
        }
        let millis = u64::try_from(time.as_millis()).unwrap_or(u64::MAX);
        let entries = self.levels.entry(level).or_default();

        let rank = entries.partition_point(|e| e.millis <= millis);
        if rank >= self.per_level {
            return None;
        }
        entries.insert(rank, BestTimeEntry { player: player.to_string(), millis });
        entries.truncate(self.per_level);
        Some(rank + 1)
    }

    pub fn for_level(&self, level: u32) -> Option<LevelBestTimes> {
        self.levels.get(&level).map(|entries| LevelBestTimes {
            level,
            entries: entries.clone(),
        })
    }

    /// All levels with at least one entry, ascending by level.
    pub fn snapshot(&self) -> Vec<LevelBestTimes> {
        self.levels
            .iter()
            .map(|(&level, entries)| LevelBestTimes { level, entries: entries.clone() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted_fastest_first() {
        let mut table = BestTimes::new(5);
        assert_eq!(table.record(1, "bob", Duration::from_millis(900)), Some(1));
        assert_eq!(table.record(1, "ana", Duration::from_millis(400)), Some(1));
        assert_eq!(table.record(1, "eve", Duration::from_millis(600)), Some(2));

        let level = table.for_level(1).expect("level 1 recorded");
        let millis: Vec<u64> = level.entries.iter().map(|e| e.millis).collect();
        assert_eq!(millis, vec![400, 600, 900]);
        assert_eq!(level.entries[0].player, "ana");
    }

    #[test]
    fn test_table_is_capped_per_level() {
        let mut table = BestTimes::new(2);
        table.record(3, "a", Duration::from_millis(100));
        table.record(3, "b", Duration::from_millis(200));
        assert_eq!(table.record(3, "c", Duration::from_millis(300)), None);
        assert_eq!(table.record(3, "d", Duration::from_millis(150)), Some(2));

        let entries = table.for_level(3).expect("level 3 recorded").entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].player, "d");
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut table = BestTimes::new(3);
        table.record(1, "first", Duration::from_millis(500));
        assert_eq!(table.record(1, "second", Duration::from_millis(500)), Some(2));
    }

    #[test]
    fn test_snapshot_orders_levels() {
        let mut table = BestTimes::new(3);
        assert!(table.snapshot().is_empty());
        table.record(4, "a", Duration::from_millis(1));
        table.record(2, "b", Duration::from_millis(1));
        let levels: Vec<u32> = table.snapshot().iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![2, 4]);
        assert!(table.for_level(3).is_none());
    }
}

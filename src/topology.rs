//! Pathway topology
//!
//! A static table of named functional zones, each with an ordered list of
//! sub-stage labels. Scoring policies synthesize a route path by entering
//! one zone, walking part or all of its sub-stages depending on target
//! complexity, appending conditional zones, and terminating with a
//! synthetic `target:<id>` stage for traceability.

use crate::model::BloomTarget;
use std::collections::HashMap;

/// Well-known zone names
pub mod zones {
    pub const MEMORY_BANK: &str = "memory-bank";
    pub const ANALYSIS_CORE: &str = "analysis-core";
    pub const SYNTHESIS_CHAMBER: &str = "synthesis-chamber";
    pub const ATTENTION_NEXUS: &str = "attention-nexus";
    pub const META_LAYER: &str = "meta-layer";
}

/// Complexity above which a path walks all of the entry zone's sub-stages
const FULL_WALK_COMPLEXITY: f64 = 0.7;

/// Depth at which the meta layer is appended for deep analysis
const META_LAYER_DEPTH: u32 = 5;

/// Token density above which the memory bank is appended
const MEMORY_BANK_DENSITY: f64 = 0.7;

/// Static directed graph of named functional zones
#[derive(Debug, Clone)]
pub struct PathwayTopology {
    zones: HashMap<String, Vec<String>>,
}

impl Default for PathwayTopology {
    fn default() -> Self {
        Self::new()
    }
}

impl PathwayTopology {
    /// Build the standard topology
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert(
            zones::MEMORY_BANK.to_string(),
            stage_list(&["recall-system", "consolidation-core", "pattern-library"]),
        );
        table.insert(
            zones::ANALYSIS_CORE.to_string(),
            stage_list(&["deep-processor", "pattern-analyzer", "logic-engine"]),
        );
        table.insert(
            zones::SYNTHESIS_CHAMBER.to_string(),
            stage_list(&["creative-engine", "integration-hub", "ideation-core"]),
        );
        table.insert(
            zones::ATTENTION_NEXUS.to_string(),
            stage_list(&["focus-director", "priority-filter", "awareness-monitor"]),
        );
        table.insert(
            zones::META_LAYER.to_string(),
            stage_list(&["self-observer", "cognitive-tracker", "reflection-engine"]),
        );
        Self { zones: table }
    }

    /// Sub-stages of a zone, if the zone exists
    pub fn stages(&self, zone: &str) -> Option<&[String]> {
        self.zones.get(zone).map(Vec::as_slice)
    }

    /// All zone names
    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.keys().map(String::as_str).collect()
    }

    /// Synthesize a route path entering at `entry_zone`.
    ///
    /// High-complexity targets walk every sub-stage of the entry zone,
    /// simpler targets only the first two. Deep targets gain the meta
    /// layer, token-dense targets the memory bank. The path always ends
    /// with `target:<id>` and is truncated to `max_len` stages by keeping
    /// the head and the final two stages.
    pub fn build_path(&self, entry_zone: &str, target: &BloomTarget, max_len: usize) -> Vec<String> {
        let mut path = vec![entry_zone.to_string()];

        if let Some(stages) = self.zones.get(entry_zone) {
            let walk = if target.complexity > FULL_WALK_COMPLEXITY {
                stages.len()
            } else {
                stages.len().min(2)
            };
            path.extend(stages[..walk].iter().cloned());
        }

        if target.depth >= META_LAYER_DEPTH && entry_zone != zones::META_LAYER {
            path.push(zones::META_LAYER.to_string());
        }
        if target.token_density > MEMORY_BANK_DENSITY && entry_zone != zones::MEMORY_BANK {
            path.push(zones::MEMORY_BANK.to_string());
        }

        path.push(format!("target:{}", target.id));

        if path.len() > max_len {
            let tail = path.split_off(path.len() - 2);
            path.truncate(max_len - 2);
            path.extend(tail);
        }

        path
    }
}

fn stage_list(stages: &[&str]) -> Vec<String> {
    stages.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityVector;

    fn target(depth: u32, complexity: f64, token_density: f64) -> BloomTarget {
        BloomTarget::new("bloom-1", depth, 0.5, complexity, QualityVector::default())
            .with_token_density(token_density)
    }

    #[test]
    fn test_topology_has_five_zones() {
        let topology = PathwayTopology::new();
        assert_eq!(topology.zone_names().len(), 5);
        assert_eq!(
            topology.stages(zones::ANALYSIS_CORE).unwrap(),
            &[
                "deep-processor".to_string(),
                "pattern-analyzer".to_string(),
                "logic-engine".to_string()
            ]
        );
        assert!(topology.stages("unknown-zone").is_none());
    }

    #[test]
    fn test_simple_target_walks_two_stages() {
        let topology = PathwayTopology::new();
        let path = topology.build_path(zones::ANALYSIS_CORE, &target(2, 0.4, 0.5), 6);

        assert_eq!(
            path,
            vec![
                "analysis-core",
                "deep-processor",
                "pattern-analyzer",
                "target:bloom-1"
            ]
        );
    }

    #[test]
    fn test_complex_target_walks_all_stages() {
        let topology = PathwayTopology::new();
        let path = topology.build_path(zones::ATTENTION_NEXUS, &target(2, 0.9, 0.5), 6);

        assert_eq!(
            path,
            vec![
                "attention-nexus",
                "focus-director",
                "priority-filter",
                "awareness-monitor",
                "target:bloom-1"
            ]
        );
    }

    #[test]
    fn test_deep_target_gains_meta_layer() {
        let topology = PathwayTopology::new();
        let path = topology.build_path(zones::ANALYSIS_CORE, &target(5, 0.4, 0.5), 8);

        assert!(path.contains(&zones::META_LAYER.to_string()));
    }

    #[test]
    fn test_dense_target_gains_memory_bank() {
        let topology = PathwayTopology::new();
        let path = topology.build_path(zones::ANALYSIS_CORE, &target(2, 0.4, 0.8), 8);

        assert!(path.contains(&zones::MEMORY_BANK.to_string()));
    }

    #[test]
    fn test_memory_bank_entry_is_not_duplicated() {
        let topology = PathwayTopology::new();
        let path = topology.build_path(zones::MEMORY_BANK, &target(2, 0.4, 0.9), 8);

        let count = path.iter().filter(|s| *s == zones::MEMORY_BANK).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_path_is_truncated_to_max_len() {
        let topology = PathwayTopology::new();
        // Deep, complex, dense: entry + 3 stages + meta + memory + target = 7
        let path = topology.build_path(zones::ANALYSIS_CORE, &target(7, 0.9, 0.9), 6);

        assert_eq!(path.len(), 6);
        // Head is preserved, tail keeps the final two stages
        assert_eq!(path[0], "analysis-core");
        assert_eq!(path.last().unwrap(), "target:bloom-1");
        assert_eq!(path[path.len() - 2], zones::MEMORY_BANK);
    }

    #[test]
    fn test_path_always_ends_at_target_stage() {
        let topology = PathwayTopology::new();
        for zone in topology.zone_names() {
            let path = topology.build_path(zone, &target(6, 0.8, 0.8), 6);
            assert_eq!(path.last().unwrap(), "target:bloom-1");
            assert!(path.len() <= 6);
            assert!(path.len() >= 2);
        }
    }
}

//! Route history and the bounded active-route buffer
//!
//! History keeps compact records of accepted routes for analytics; when it
//! exceeds its capacity it is trimmed to the newest half. Active routes are
//! full results kept in a fixed-size ring so the collection can never grow
//! without bound.

use crate::model::{RouteRecord, RouteResult};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Bounded log of accepted-route records
#[derive(Debug)]
pub struct RouteHistory {
    records: Mutex<Vec<RouteRecord>>,
    capacity: usize,
}

impl RouteHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    /// Append a record, trimming to the newest half once capacity is
    /// exceeded
    pub fn push(&self, record: RouteRecord) {
        let mut records = self.records.lock().unwrap();
        records.push(record);

        if records.len() > self.capacity {
            let keep = (self.capacity / 2).max(1);
            let drop_count = records.len() - keep;
            records.drain(..drop_count);
        }
    }

    /// Most recent records, oldest first, optionally filtered by tracer
    /// type (case-insensitive)
    pub fn recent(&self, tracer_type: Option<&str>, limit: usize) -> Vec<RouteRecord> {
        let records = self.records.lock().unwrap();
        let filter = tracer_type.map(str::to_lowercase);

        let matching: Vec<RouteRecord> = records
            .iter()
            .filter(|record| {
                filter
                    .as_deref()
                    .map(|t| record.tracer_type.to_lowercase() == t)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        let start = matching.len().saturating_sub(limit);
        matching[start..].to_vec()
    }

    /// Per-tracer usage counts over the most recent `window` records
    pub fn usage_counts(&self, window: usize) -> HashMap<String, u64> {
        let records = self.records.lock().unwrap();
        let start = records.len().saturating_sub(window);

        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in &records[start..] {
            *counts.entry(record.tracer_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-capacity ring of recently accepted route results
#[derive(Debug)]
pub struct ActiveRoutes {
    routes: Mutex<VecDeque<RouteResult>>,
    capacity: usize,
}

impl ActiveRoutes {
    pub fn new(capacity: usize) -> Self {
        Self {
            routes: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Append a result, evicting the oldest entry when full
    pub fn push(&self, result: RouteResult) {
        let mut routes = self.routes.lock().unwrap();
        if routes.len() == self.capacity {
            routes.pop_front();
        }
        routes.push_back(result);
    }

    /// Snapshot of the buffered results, oldest first
    pub fn snapshot(&self) -> Vec<RouteResult> {
        self.routes.lock().unwrap().iter().cloned().collect()
    }

    /// Number of buffered results
    pub fn len(&self) -> usize {
        self.routes.lock().unwrap().len()
    }

    /// True when the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all buffered results
    pub fn clear(&self) {
        self.routes.lock().unwrap().clear();
    }
}

//! telemetry/counters.rs
//! Mutable byte/count tallies, converted into a `TelemetrySnapshot` at the end.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::container::ContainerInfo;

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub containers: u64,
    pub bytes_raw: u64,
    pub bytes_prefix: u64,
    pub bytes_payload: u64,
}

impl TelemetryCounters {
    /// Record one container, compressed or decompressed.
    pub fn add_container(&mut self, info: &ContainerInfo) {
        self.containers += 1;
        self.bytes_raw += info.original_len as u64;
        self.bytes_prefix += info.prefix_len as u64;
        self.bytes_payload += info.payload_len as u64;
    }

    /// Total container bytes (prefix + payload).
    pub fn bytes_container(&self) -> u64 {
        self.bytes_prefix + self.bytes_payload
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.containers += other.containers;
        self.bytes_raw += other.bytes_raw;
        self.bytes_prefix += other.bytes_prefix;
        self.bytes_payload += other.bytes_payload;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

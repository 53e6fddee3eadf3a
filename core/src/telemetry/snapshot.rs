//! telemetry/snapshot.rs
//! Immutable view over counters and timers, serializable for reporting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub containers: u64,
    pub bytes_raw: u64,
    pub bytes_container: u64,
    pub bytes_prefix: u64,
    /// `bytes_container / bytes_raw`; above 1.0 when the prefix outweighs savings.
    pub compression_ratio: f64,
    pub throughput_raw_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_raw > 0 {
            counters.bytes_container() as f64 / counters.bytes_raw as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_raw as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            containers: counters.containers,
            bytes_raw: counters.bytes_raw,
            bytes_container: counters.bytes_container(),
            bytes_prefix: counters.bytes_prefix,
            compression_ratio,
            throughput_raw_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Stage times never exceed the wall clock they were measured within.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed && self.bytes_prefix <= self.bytes_container
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

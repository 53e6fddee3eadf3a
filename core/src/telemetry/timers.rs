//! telemetry/timers.rs
//! Stage timers: read, compress/decompress, write.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Compress,
    Decompress,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read       => "read",
            Stage::Compress   => "compress",
            Stage::Decompress => "decompress",
            Stage::Write      => "write",
        };
        f.write_str(name)
    }
}

/// Wall time charged to each stage of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    pub read: Duration,
    pub compress: Duration,
    pub decompress: Duration,
    pub write: Duration,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Duration {
        match stage {
            Stage::Read       => &mut self.read,
            Stage::Compress   => &mut self.compress,
            Stage::Decompress => &mut self.decompress,
            Stage::Write      => &mut self.write,
        }
    }

    /// Accumulates into the stage's running total.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.slot(stage) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Read       => self.read,
            Stage::Compress   => self.compress,
            Stage::Decompress => self.decompress,
            Stage::Write      => self.write,
        }
    }

    pub fn total(&self) -> Duration {
        self.read + self.compress + self.decompress + self.write
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.add_stage_time(stage, start.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}

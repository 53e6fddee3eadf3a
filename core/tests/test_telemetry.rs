#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lzjb_core::{
        container::{inspect, ContainerCodec},
        constants::flags,
        telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer},
    };

    #[test]
    fn counters_track_container_layout() {
        let raw = vec![7u8; 10_000];
        let container = ContainerCodec::default().compress(&raw, flags::NONE).unwrap();

        let mut counters = TelemetryCounters::default();
        counters.add_container(&inspect(&container).unwrap());

        assert_eq!(counters.containers, 1);
        assert_eq!(counters.bytes_raw, 10_000);
        assert_eq!(counters.bytes_prefix, 2);
        assert_eq!(counters.bytes_container(), container.len() as u64);
    }

    #[test]
    fn counters_merge() {
        let mut a = TelemetryCounters { containers: 1, bytes_raw: 10, bytes_prefix: 1, bytes_payload: 4 };
        let b = TelemetryCounters { containers: 2, bytes_raw: 20, bytes_prefix: 2, bytes_payload: 8 };
        a += b;
        assert_eq!(a, TelemetryCounters { containers: 3, bytes_raw: 30, bytes_prefix: 3, bytes_payload: 12 });
    }

    #[test]
    fn timer_accumulates_stages() {
        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Compress, Duration::from_micros(100));
        timer.add_stage_time(Stage::Compress, Duration::from_micros(50));
        let value = timer.time(Stage::Read, || 41 + 1);
        timer.finish();

        assert_eq!(value, 42);
        assert_eq!(timer.stage_times.get(Stage::Compress), Duration::from_micros(150));
        assert_eq!(timer.stage_times.get(Stage::Write), Duration::ZERO);
        assert_eq!(timer.stage_times.total(), timer.stage_times.compress + timer.stage_times.read);
        assert_eq!(Stage::Decompress.to_string(), "decompress");
    }

    #[test]
    fn snapshot_ratio_and_json() {
        let counters = TelemetryCounters { containers: 1, bytes_raw: 1000, bytes_prefix: 2, bytes_payload: 248 };
        let mut timer = TelemetryTimer::new();
        timer.time(Stage::Compress, || ());
        timer.finish();

        let snap = TelemetrySnapshot::from(&counters, &timer);
        assert_eq!(snap.bytes_container, 250);
        assert!((snap.compression_ratio - 0.25).abs() < f64::EPSILON);
        assert!(snap.sanity_check());

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"bytes_raw\":1000"));
        assert!(json.contains("\"stage_times\":{\"read\":"));
    }

    #[test]
    fn empty_snapshot_has_zero_ratio() {
        let snap = TelemetrySnapshot::from(&TelemetryCounters::default(), &TelemetryTimer::new());
        assert_eq!(snap.compression_ratio, 0.0);
    }
}

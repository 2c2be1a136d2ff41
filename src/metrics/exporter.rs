use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::RingLruMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// directly or forwarded to an OpenTelemetry collector. Write failures are
/// dropped: export is best-effort and must never disturb the cache.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and hands back the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<RingLruMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &RingLruMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("promotion_calls_total", snapshot.promotion_calls);
        self.write_counter("promotion_moves_total", snapshot.promotion_moves);
        self.write_counter("promotion_swaps_total", snapshot.promotion_swaps);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_found_total", snapshot.remove_found);
        self.write_counter("clears_total", snapshot.clears);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_hits_total", snapshot.peek_hits);
        self.write_counter("contains_calls_total", snapshot.contains_calls);
        self.write_gauge("cache_len", snapshot.cache_len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
        self.write_gauge("ring_holes", snapshot.ring_holes as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exported(prefix: &str, snapshot: &RingLruMetricsSnapshot) -> String {
        let exporter = PrometheusTextExporter::new(prefix, Vec::new());
        exporter.export(snapshot);
        String::from_utf8(exporter.into_inner()).unwrap()
    }

    #[test]
    fn export_writes_type_lines_and_values() {
        let snapshot = RingLruMetricsSnapshot {
            get_calls: 5,
            get_hits: 4,
            evicted_entries: 2,
            cache_len: 8,
            capacity: 8,
            ..Default::default()
        };
        let text = exported("ringlru", &snapshot);

        assert!(text.contains("# TYPE ringlru_get_calls_total counter\nringlru_get_calls_total 5\n"));
        assert!(text.contains("ringlru_get_hits_total 4\n"));
        assert!(text.contains("ringlru_evicted_entries_total 2\n"));
        assert!(text.contains("# TYPE ringlru_cache_len gauge\nringlru_cache_len 8\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let text = exported("", &RingLruMetricsSnapshot::default());
        assert!(text.contains("\ncapacity 0\n"));
        assert!(!text.contains("_capacity"));
    }
}

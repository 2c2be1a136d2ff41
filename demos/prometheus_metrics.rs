use std::io;

use ringlru::metrics::{MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter};
use ringlru::policy::ring_lru::RingLruCore;

fn main() {
    let mut cache: RingLruCore<u32, u32> = RingLruCore::new(128);

    for i in 0..512u32 {
        let key = i % 200;
        if cache.get(&key).is_none() {
            cache.add(key, i);
        }
    }
    cache.remove(&199);

    let snapshot = cache.snapshot();
    println!("hit ratio: {:.2}", snapshot.hit_ratio());

    let exporter = PrometheusTextExporter::new("ringlru", io::stdout());
    exporter.export(&snapshot);
}

/// Benchmarks for the hopdot conversion pipeline.
///
/// Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hopdot::infrastructure::{DotExporter, HopPathBuilder, RoxmlScanParser};
use hopdot::ports::{ScanParser, TopologyBuilder};

/// Synthetic scan: every host shares a 3-hop prefix, then fans out.
fn create_synthetic_scan(num_hosts: usize, hops_per_host: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<!DOCTYPE nmaprun>\n<nmaprun>\n");
    for h in 0..num_hosts {
        xml.push_str(&format!(
            "<host><address addr=\"10.{}.{}.1\" addrtype=\"ipv4\"/><trace>",
            h / 256,
            h % 256
        ));
        for ttl in 1..=hops_per_host {
            let ipaddr = if ttl <= 3 {
                format!("172.16.0.{}", ttl)
            } else {
                format!("10.{}.{}.{}", h / 256, h % 256, ttl)
            };
            xml.push_str(&format!("<hop ttl=\"{}\" ipaddr=\"{}\" rtt=\"0.50\"/>", ttl, ipaddr));
        }
        xml.push_str("</trace></host>\n");
    }
    xml.push_str("</nmaprun>\n");
    xml
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for &hosts in &[10usize, 100, 1000] {
        let xml = create_synthetic_scan(hosts, 12);
        group.throughput(Throughput::Bytes(xml.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", hosts), &xml, |b, xml| {
            b.iter(|| RoxmlScanParser.parse(black_box(xml)).unwrap())
        });

        let doc = RoxmlScanParser.parse(&xml).unwrap();
        group.bench_with_input(BenchmarkId::new("build", hosts), &doc, |b, doc| {
            b.iter(|| HopPathBuilder.build_topology(black_box(doc)))
        });

        let topology = HopPathBuilder.build_topology(&doc);
        group.bench_with_input(BenchmarkId::new("to_dot", hosts), &topology, |b, topology| {
            b.iter(|| DotExporter::to_dot(black_box(topology)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);

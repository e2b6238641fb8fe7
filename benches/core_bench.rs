use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use mbb_routing_mgt::payload::{
    normalize_gateway_response, parse_body, DownlinkEntry, GatewayVerifiers, TerritoryGroup,
    TransitEntry, UplinkEntry, VerifierEntry,
};
use mbb_routing_mgt::{
    curve_between_points, group_routes, join_gateway_latency, Bulge, CurveOptions, LinkStatus,
};
use std::hint::black_box;

fn bench_payload_normalization(c: &mut Criterion) {
    let body = include_str!("../tests/fixtures/gateway_response.json");

    c.bench_function("normalize_gateway_fixture", |b| {
        b.iter(|| {
            let value = parse_body(black_box(body)).expect("Fixture ungueltig");
            let gw = normalize_gateway_response(&value).expect("Normalisierung fehlgeschlagen");
            black_box(gw.bds.len())
        })
    });
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_between_points");
    let from = DVec2::new(98.3535818, 3.83726071);
    let to = DVec2::new(99.4859986, 2.73429714);

    for &segments in &[64usize, 256, 4096] {
        let options = CurveOptions {
            segments,
            bow_factor: 1.2,
            bulge: Bulge::North,
        };
        group.bench_with_input(BenchmarkId::new("segments", segments), &options, |b, opts| {
            b.iter(|| black_box(curve_between_points(black_box(from), black_box(to), opts)).len())
        });
    }

    group.finish();
}

fn hostname(index: usize) -> String {
    format!("TRANSIT-{:05}", index)
}

fn build_verifiers(count: usize) -> GatewayVerifiers {
    let entries = |offset: f64| -> Vec<VerifierEntry> {
        (0..count)
            .map(|i| VerifierEntry {
                verifier_id: format!("VRF-{}", i),
                hostname: hostname(i),
                latency: offset + (i % 50) as f64,
                threshold: 40.0,
                status: if i % 7 == 0 {
                    LinkStatus::NotClear
                } else {
                    LinkStatus::Clear
                },
            })
            .collect()
    };
    GatewayVerifiers {
        bds: entries(10.0),
        btc: entries(12.0),
        pnk: entries(20.0),
        ..Default::default()
    }
}

fn build_territories(count: usize) -> TerritoryGroup {
    let mut group = TerritoryGroup::new();
    for territory in 1..=4usize {
        let transits = (0..count)
            .filter(|i| i % 4 + 1 == territory)
            .map(|i| TransitEntry {
                // jeder zehnte Transit ohne Verifier
                transit: if i % 10 == 0 {
                    format!("UNKNOWN-{}", i)
                } else {
                    hostname(i)
                },
                baseline: 30.0,
                latency: 31.0,
                status: None,
            })
            .collect();
        group.insert(territory.to_string(), transits);
    }
    group
}

fn bench_latency_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_gateway_latency");

    for &count in &[100usize, 10_000] {
        let verifiers = build_verifiers(count);
        let territories = build_territories(count);

        group.bench_with_input(
            BenchmarkId::new("transits", count),
            &(verifiers, territories),
            |b, (v, t)| b.iter(|| black_box(join_gateway_latency(v, t)).len()),
        );
    }

    group.finish();
}

fn build_routes(count: usize) -> (Vec<UplinkEntry>, Vec<DownlinkEntry>) {
    let uplinks = (0..count)
        .map(|i| UplinkEntry {
            region: "01-Sumbagut".to_string(),
            tera: "TREG1".to_string(),
            target: "103.10.64.1".to_string(),
            date: "2025-12-08".to_string(),
            hour: 14,
            ebr: format!("EBR-{}", i),
            latency_ebr: 18.0,
            transit: hostname(i),
            path: String::new(),
            route_type: "IGW".to_string(),
            paths: Vec::new(),
            information: None,
        })
        .collect();
    let downlinks = (0..count)
        .map(|i| DownlinkEntry {
            region: "01-Sumbagut".to_string(),
            tera: "TREG1".to_string(),
            ip_address: "10.0.0.1".to_string(),
            target: "103.10.64.1".to_string(),
            date: "2025-12-08".to_string(),
            hour: 14,
            // halb überlappend mit den Uplinks
            ebr: format!("EBR-{}", i + count / 2),
            latency: 19.0,
            transit: hostname(i),
            path: String::new(),
            route_type: "IGW".to_string(),
            paths: Vec::new(),
        })
        .collect();
    (uplinks, downlinks)
}

fn bench_route_grouping(c: &mut Criterion) {
    let (uplinks, downlinks) = build_routes(5_000);

    c.bench_function("group_routes_5000", |b| {
        b.iter(|| black_box(group_routes(black_box(&uplinks), black_box(&downlinks))).len())
    });
}

criterion_group!(
    benches,
    bench_payload_normalization,
    bench_curves,
    bench_latency_join,
    bench_route_grouping
);
criterion_main!(benches);

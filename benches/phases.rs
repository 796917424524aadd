//! Benchmarks for the phase pipeline and artifact rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use imageprep::config;
use imageprep::context::SystemContext;
use imageprep::phases::orchestrator::{apply_phases, render_json, render_script};

const FULL_CONFIG: &str = r#"
timezone: UTC
environment:
  LANG: C.UTF-8
sysctls:
  net.ipv4.ip_forward: "1"
packages:
  - socat
  - "!cloud-guest-utils #debian"
files:
  /etc/motd: "provisioned\n"
users:
  - name: deploy
    sudo: true
services:
  - sshd
cleanup: true
"#;

fn bench_pipeline(c: &mut Criterion) {
    let cleanup_only = config::parse("cleanup: true").unwrap();
    let full = config::parse(FULL_CONFIG).unwrap();
    let ctx = SystemContext::new();

    c.bench_function("pipeline_cleanup_only", |b| {
        b.iter(|| apply_phases(black_box(&cleanup_only), black_box(&ctx)).unwrap());
    });

    c.bench_function("pipeline_full", |b| {
        b.iter(|| apply_phases(black_box(&full), black_box(&ctx)).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let full = config::parse(FULL_CONFIG).unwrap();
    let (commands, filesystem) = apply_phases(&full, &SystemContext::new()).unwrap();

    c.bench_function("render_script", |b| {
        b.iter(|| render_script(black_box(&commands), black_box(&filesystem)));
    });

    c.bench_function("render_json", |b| {
        b.iter(|| render_json(black_box(&commands), black_box(&filesystem)).unwrap());
    });
}

criterion_group!(benches, bench_pipeline, bench_render);
criterion_main!(benches);

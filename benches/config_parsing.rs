//! Benchmarks for configuration parsing and merging.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use imageprep::config;

/// Minimal configuration: one section.
const MINIMAL_CONFIG: &str = "cleanup: true\n";

/// Small configuration with a few sections.
const SMALL_CONFIG: &str = r#"
timezone: UTC
packages:
  - curl
  - openssh-server
services:
  - sshd
cleanup: true
"#;

/// Larger configuration touching every section.
const FULL_CONFIG: &str = r#"
pre_commands:
  - modprobe br_netfilter || true
commands:
  - mkdir -p /opt/app
post_commands:
  - echo done
timezone: Europe/Amsterdam
environment:
  LANG: C.UTF-8
  EDITOR: vi
  PAGER: less
sysctls:
  net.ipv4.ip_forward: "1"
  net.bridge.bridge-nf-call-iptables: "1"
  vm.swappiness: "10"
packages:
  - socat
  - "haveged #debian #ubuntu"
  - "chrony #redhat"
  - "!cloud-guest-utils #debian"
files:
  /etc/motd: "provisioned\n"
  /etc/issue: "\n"
users:
  - name: deploy
    groups: [wheel, docker]
    shell: /bin/bash
    sudo: true
services:
  - sshd
  - chronyd
cleanup: true
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parse");
    for (name, input) in [
        ("minimal", MINIMAL_CONFIG),
        ("small", SMALL_CONFIG),
        ("full", FULL_CONFIG),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| config::parse(black_box(input)).unwrap());
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let base = config::parse(SMALL_CONFIG).unwrap();
    let overlay = config::parse(FULL_CONFIG).unwrap();

    c.bench_function("config_merge", |b| {
        b.iter(|| {
            let mut merged = base.clone();
            merged.merge(black_box(overlay.clone()));
            merged
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let config = config::parse(FULL_CONFIG).unwrap();

    c.bench_function("config_validate", |b| {
        b.iter(|| black_box(&config).validate());
    });
}

criterion_group!(benches, bench_parse, bench_merge, bench_validate);
criterion_main!(benches);

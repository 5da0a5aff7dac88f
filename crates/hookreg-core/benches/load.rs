// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hookreg_core::{Hook, Registry, Repository};

fn build_registry(count: usize) -> Registry {
    let mut repos = Vec::with_capacity(count);
    for i in 0..count {
        let mut hook = Hook::new(format!("check-{}", i));
        if i % 3 == 0 {
            hook.additional_dependencies = vec![format!("dep-{}==1.0", i)];
        }
        if i % 4 == 0 {
            hook.exclude = Some("^docs/".to_string());
        }
        repos.push(Repository::new(
            format!("https://github.com/hooks/repo-{}", i),
            format!("v1.{}.0", i),
            vec![hook],
        ));
    }
    Registry::new(repos)
}

fn bench_parse(c: &mut Criterion) {
    let document = build_registry(100)
        .to_toml_string()
        .expect("Failed to serialize benchmark manifest");
    c.bench_function("parse_100", |b| {
        b.iter(|| black_box(Registry::from_toml_str(&document)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let registry = build_registry(100);
    c.bench_function("serialize_100", |b| {
        b.iter(|| black_box(registry.to_toml_string()))
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);

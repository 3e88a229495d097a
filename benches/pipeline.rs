//! Benchmarks for identifier decoding, record assembly and serialization.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- assemble`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use groupmeta::codec;
use groupmeta::core::assembler::assemble;
use groupmeta::core::models::{Conversation, ParticipantRaw};
use groupmeta::core::output::to_json_line;
use groupmeta::normalize::normalize;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_members(count: usize) -> Vec<ParticipantRaw> {
    (0..count)
        .map(|i| {
            ParticipantRaw::new(format!("55119{:08}@c.us", i))
                .with_name(format!(" Member\t{} ", i))
                .with_formatted_name(format!("+55 11 9{:04}-{:04}", i % 10_000, i))
                .with_business(i % 7 == 0)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.bench_function("decode", |b| {
        b.iter(|| codec::decode(black_box("5511999999999-1600000000@g.us")))
    });
    group.bench_function("format_local", |b| {
        b.iter(|| codec::format_local(black_box("1600000000")))
    });
    group.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  Team\r\nSync\tWeekly  ")))
    });
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let conversation = Conversation::group("5511999999999-1600000000@g.us", " Team\tSync ");

    for size in [16usize, 256, 1024] {
        let members = generate_members(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("record", size), &members, |b, members| {
            b.iter(|| assemble(black_box(&conversation), black_box(members)))
        });

        let record = assemble(&conversation, &members).unwrap();
        group.bench_with_input(BenchmarkId::new("to_json_line", size), &record, |b, record| {
            b.iter(|| to_json_line(black_box(record)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec, bench_assemble);
criterion_main!(benches);

// Criterion benchmark for the full normalization pipeline.
// Run with `cargo bench --bench pipeline`.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sudanorm::{NormalizeConfig, Normalizer};

// Deterministic corpus covering the character classes the pipeline
// actually touches: diacritics, variant letters, social-media noise,
// digits, repetition.
fn corpus(size_kb: usize) -> String {
    const POOL: &[&str] = &[
        "السَّلامُ عليكم ورحمة الله وبركاته!!!",
        "شوف الرابط دا https://example.com/path?q=1 يا زول",
        "@ahmed قال شنو؟؟ الحكاية دي غريبة…",
        "اجتمعوا يوم 2023-12-25T10:30:00Z في الخرطوم",
        "عندي ١٢٣ كتاب و ٤٥ قلم على الطاولة",
        "كتييييير جميل واللهِ يااااخ #السودان",
        "أهلاً وسهلاً، البيت بيتك إن شاء الله.",
        "راسلنا على info@example.sd أو اتصل 10:30 pm",
    ];

    let mut out = String::with_capacity(size_kb * 1024);
    let mut i = 0;
    while out.len() < size_kb * 1024 {
        out.push_str(POOL[i % POOL.len()]);
        out.push(' ');
        i += 1;
    }
    out
}

fn bench_default_pipeline(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("default_pipeline");
    for size_kb in [4, 64, 256] {
        let input = corpus(size_kb);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("{size_kb}kb"), |b| {
            b.iter(|| black_box(normalizer.normalize(black_box(&input))).len());
        });
    }
    group.finish();
}

fn bench_clean_input_zero_copy(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    // Already-normalized text: every stage skips via its pre-scan
    let input = "السلام عليكم ورحمه الله ".repeat(2_000);
    let mut group = c.benchmark_group("clean_input");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("zero_copy", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&input))).len());
    });
    group.finish();
}

fn bench_everything_enabled(c: &mut Criterion) {
    let normalizer = Normalizer::new(NormalizeConfig {
        remove_html_tags: true,
        remove_hashtags: true,
        remove_latin_chars: true,
        remove_tatweel: true,
        remove_special_chars: true,
        normalize_numbers: true,
        ..NormalizeConfig::default()
    });
    let input = corpus(64);
    let mut group = c.benchmark_group("everything_enabled");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("64kb", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&input))).len());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_default_pipeline,
    bench_clean_input_zero_copy,
    bench_everything_enabled
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hmpi_scorer::{ConcentrationSet, Sample, SampleMeta, SampleScorer, DEFAULT_REGISTRY};

fn full_panel() -> Sample {
    let concentrations: ConcentrationSet = DEFAULT_REGISTRY
        .metals()
        .iter()
        .map(|m| (m.symbol, m.standard * 0.8))
        .collect();
    Sample::new(SampleMeta::new("bench"), concentrations)
}

fn bench_single_sample(c: &mut Criterion) {
    let scorer = SampleScorer::new().expect("default scorer");
    let sample = full_panel();

    c.bench_function("score_sample_11_metals", |b| {
        b.iter(|| scorer.score_sample(black_box(&sample)))
    });

    let batch: Vec<Sample> = (0..1000).map(|_| full_panel()).collect();
    c.bench_function("score_batch_1000", |b| {
        b.iter(|| scorer.score_batch(black_box(&batch)))
    });
}

criterion_group!(benches, bench_single_sample);
criterion_main!(benches);

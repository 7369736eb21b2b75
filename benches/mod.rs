use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    render::bench_integers,
    render::bench_floats,
    render::bench_banner_row,
    shell::bench_typing,
    shell::bench_completion,
    shell::bench_history_recall
);
criterion_main!(benches);

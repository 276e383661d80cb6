use criterion::{black_box, criterion_group, criterion_main, Criterion};
use revbot::board::{Board, Color};
use revbot::search::alphabeta::{SearchParams, Searcher};
use revbot::search::weights::ScoreTable;
use std::time::Duration;

fn bench_search(c: &mut Criterion) {
    let table = ScoreTable::for_size(8).unwrap();
    let board = Board::standard(8);
    let params = SearchParams {
        movetime: Duration::from_secs(3600),
        max_depth: Some(4),
    };
    c.bench_function("search_depth_4_standard_8x8", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(&table, Color::Black, Color::White, 4);
            let result = searcher.run(black_box(&board), params);
            black_box(result.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);

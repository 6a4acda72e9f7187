use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Game, GameConfig, Grid, Piece};
use blockfall::types::{Color, PieceKind, Position, GRID_HEIGHT, GRID_WIDTH};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut game = Game::new(GameConfig::default());
        b.iter(|| {
            game.tick();
            if game.is_over() {
                game.restart();
            }
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    let gray = Color::new(128, 128, 128);
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
            for row in 18..22 {
                let cells: Vec<Position> =
                    (0..GRID_WIDTH as i16).map(|c| Position::new(c, row)).collect();
                grid.lock(&cells, gray);
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("piece_spawn", |b| {
        b.iter(|| black_box(Piece::spawn(black_box(PieceKind::T), GRID_WIDTH)))
    });
}

fn bench_is_valid(c: &mut Criterion) {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    let piece = Piece::spawn(PieceKind::J, GRID_WIDTH);
    c.bench_function("grid_is_valid", |b| {
        b.iter(|| black_box(grid.is_valid(black_box(piece.cells()))))
    });
}

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("game_rotate", |b| {
        let mut game = Game::new(GameConfig::default());
        b.iter(|| game.rotate())
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_full_rows,
    bench_spawn,
    bench_is_valid,
    bench_rotate
);
criterion_main!(benches);

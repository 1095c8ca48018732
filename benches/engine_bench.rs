use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parchis::board::{GameState, Player, TokenId, ALL_COLORS, TRACK_SIZE};
use parchis::rules::{apply_move, can_traverse};
use parchis::snapshot::GameSnapshot;

/// Four seated players with all sixteen tokens scattered on the track.
fn populated_state() -> GameState {
    let mut state = GameState::empty();
    for (seat, color) in ALL_COLORS.iter().enumerate() {
        state.players[seat] = Some(Player::new(format!("player-{}", seat), *color));
    }
    for seat in 0..4u8 {
        for token in 0..4u8 {
            let square = 1 + (seat * 16 + token * 4) % TRACK_SIZE;
            state.place_token(TokenId::new(seat, token), square);
        }
    }
    state
}

fn bench_traverse_full_lap(c: &mut Criterion) {
    let state = populated_state();
    c.bench_function("traverse_full_lap", |b| {
        b.iter(|| can_traverse(black_box(&state), black_box(1), black_box(67)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let state = populated_state();
    c.bench_function("apply_move_6_steps", |b| {
        let mut scratch = state.clone();
        b.iter(|| {
            scratch.clone_from(&state);
            apply_move(&mut scratch, black_box(TokenId::new(0, 0)), black_box(6))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = populated_state();
    c.bench_function("game_snapshot", |b| {
        b.iter(|| GameSnapshot::of(black_box(&state)))
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = populated_state();
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(
    benches,
    bench_traverse_full_lap,
    bench_apply_move,
    bench_snapshot,
    bench_state_clone,
);
criterion_main!(benches);

use backgammon_engine::ai::{AiConfig, HeuristicAgent};
use backgammon_engine::core::{Board, Color, Difficulty, GameConfig, GameRng, GameState};
use backgammon_engine::rules::{dispatch, legal_moves};
use backgammon_engine::Action;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Positions reached by seeded self-play, each with a fresh roll.
fn corpus() -> Vec<GameState> {
    let mut agent = HeuristicAgent::new(AiConfig::default().with_difficulty(Difficulty::Easy));
    let mut dice = GameRng::new(1337).for_context("dice");
    let mut state = GameState::default();
    let mut positions = Vec::new();

    while positions.len() < 32 && !state.is_terminal() {
        let (a, b) = (dice.roll_die(), dice.roll_die());
        let Ok(rolled) = dispatch(&state, &Action::RollDice(a, b)) else {
            break;
        };
        positions.push(rolled.clone());
        let plan = agent.plan_turn(&rolled);
        let mut next = rolled;
        for mv in plan.moves {
            match dispatch(&next, &Action::MoveChecker { from: mv.from, to: mv.to }) {
                Ok(s) => next = s,
                Err(_) => break,
            }
        }
        state = match dispatch(&next, &Action::CompleteTurn) {
            Ok(s) => s,
            Err(_) => break,
        };
    }
    positions
}

fn bench_legal_moves(c: &mut Criterion) {
    let positions = corpus();
    c.bench_function("movegen/legal_moves", |bch| {
        bch.iter(|| {
            let mut total = 0usize;
            for state in &positions {
                total += legal_moves(black_box(state)).len();
            }
            black_box(total)
        })
    });

    // Doubles exercise the deepest dice-usage search
    let doubles = GameState::default().with_roll(2, 2);
    c.bench_function("movegen/opening_doubles", |bch| {
        bch.iter(|| black_box(legal_moves(black_box(&doubles))))
    });

    let board = Board::from_layout(
        &[(0, 3), (2, 4), (3, 4), (5, 4)],
        &[(18, 5), (20, 5), (23, 5)],
    );
    let bear_off =
        GameState::at_position(GameConfig::default(), board, Color::White).with_roll(6, 6);
    c.bench_function("movegen/bear_off_doubles", |bch| {
        bch.iter(|| black_box(legal_moves(black_box(&bear_off))))
    });
}

fn bench_turn_selection(c: &mut Criterion) {
    let state = GameState::default().with_roll(6, 4);
    for difficulty in [Difficulty::Normal, Difficulty::Hard] {
        let config = AiConfig::default().with_difficulty(difficulty);
        c.bench_function(&format!("ai/plan_turn/{difficulty:?}"), |bch| {
            bch.iter(|| {
                let mut agent = HeuristicAgent::new(config.clone());
                black_box(agent.plan_turn(black_box(&state)))
            })
        });
    }
}

criterion_group!(movegen, bench_legal_moves, bench_turn_selection);
criterion_main!(movegen);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use nhl_roster::fixtures;
use nhl_roster::projections::{project_player_detail, project_roster};
use nhl_roster::tui::{reduce, Action, AppState};
use nhl_statsapi::{Person, Position, RosterEntry};

/// Build a roster far larger than any real one to measure projection cost
fn create_large_roster(size: usize) -> Vec<RosterEntry> {
    (0..size)
        .map(|i| RosterEntry {
            person: Person {
                id: 8470000 + i as i64,
                full_name: format!("Player Number {}", i),
            },
            jersey_number: format!("{}", i % 99),
            position: Position {
                name: "Center".to_string(),
            },
        })
        .collect()
}

fn bench_project_roster(c: &mut Criterion) {
    let roster = create_large_roster(1000);

    c.bench_function("project_roster_1000", |b| {
        b.iter(|| project_roster(black_box(&roster)))
    });
}

fn bench_project_player_detail(c: &mut Criterion) {
    let info = fixtures::create_mock_player_info(8471214);
    let splits = fixtures::create_mock_splits(8471214);

    c.bench_function("project_player_detail", |b| {
        b.iter(|| project_player_detail(black_box(8471214), black_box(&info), black_box(&splits)))
    });
}

fn bench_reducer_select_team(c: &mut Criterion) {
    let mut state = AppState::default();
    state.data.teams = Arc::new(fixtures::create_mock_teams());
    state.data.roster = Arc::new(project_roster(&fixtures::create_mock_roster(15)));

    c.bench_function("reduce_select_team", |b| {
        b.iter(|| reduce(black_box(state.clone()), Action::SelectTeam(10)))
    });
}

fn bench_roster_loaded(c: &mut Criterion) {
    let mut state = AppState::default();
    state.data.teams = Arc::new(fixtures::create_mock_teams());
    state.ui.selected_team_id = Some(15);
    let rows = project_roster(&create_large_roster(1000));

    c.bench_function("reduce_roster_loaded_1000", |b| {
        b.iter(|| {
            reduce(
                black_box(state.clone()),
                Action::RosterLoaded(15, Ok(rows.clone())),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_project_roster,
    bench_project_player_detail,
    bench_reducer_select_team,
    bench_roster_loaded
);
criterion_main!(benches);

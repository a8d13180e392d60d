use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use crate::board::{Board, Mark, Move};
use crate::game::Game;
use crate::perft::GameCounts;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::{evaluate, Outcome};
use crate::search::select::select_best_move;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    pub threads: usize,
}

impl Default for SelfPlayParams {
    fn default() -> Self { Self { games: 100, seed: 42, threads: 1 } }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

/// Engine as X against a uniformly random O. The opponent draws from one
/// `SmallRng` seeded by `params.seed`, so a seed always replays the same games.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_observed(params, |_, _| {})
}

/// Same as `generate_games`, calling `on_game` after each finished game.
pub fn generate_games_observed<F: FnMut(usize, &GameRecord)>(params: &SelfPlayParams, mut on_game: F) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let search = SearchParams { threads: params.threads.max(1), ..SearchParams::default() };
    let mut searcher = Searcher::with_params(search);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let record = play_random_game(&mut searcher, search, &mut rng);
        debug!("game {} -> {:?} in {} plies", gi, record.outcome, record.moves.len());
        on_game(gi, &record);
        games.push(record);
    }
    games
}

fn play_random_game(searcher: &mut Searcher, search: SearchParams, rng: &mut SmallRng) -> GameRecord {
    let mut game = Game::new();
    while !game.is_over() {
        let mv = if game.to_move() == Mark::X {
            searcher.search_with_params(game.board(), search).bestmove
        } else {
            let moves: Vec<Move> = game.board().empty_cells().collect();
            if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
        };
        let Some(mv) = mv else { break };
        if let Err(e) = game.play(mv) {
            warn!("self-play stopped on illegal move {}: {}", mv, e);
            break;
        }
    }
    GameRecord { moves: game.history().to_vec(), outcome: evaluate(game.board()) }
}

pub fn tally(games: &[GameRecord]) -> GameCounts {
    let mut counts = GameCounts::default();
    for g in games {
        match g.outcome {
            Outcome::XWins => counts.x_wins += 1,
            Outcome::OWins => counts.o_wins += 1,
            Outcome::Draw => counts.draws += 1,
            Outcome::Ongoing => {}
        }
    }
    counts
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NoLossReport {
    pub games: GameCounts,
    /// First O-winning line found, if any.
    pub losing_line: Option<Vec<Move>>,
}

impl NoLossReport {
    pub fn holds(&self) -> bool { self.games.o_wins == 0 }
}

/// Play the engine as X against every legal sequence of O replies from `board`.
pub fn verify_no_loss(board: &Board) -> NoLossReport {
    let mut report = NoLossReport::default();
    let mut line = Vec::new();
    walk(board, &mut line, &mut report);
    info!(
        "no-loss check: {} games, X {} / draw {} / O {}",
        report.games.total(), report.games.x_wins, report.games.draws, report.games.o_wins
    );
    report
}

fn walk(board: &Board, line: &mut Vec<Move>, report: &mut NoLossReport) {
    match evaluate(board) {
        Outcome::XWins => { report.games.x_wins += 1; return; }
        Outcome::Draw => { report.games.draws += 1; return; }
        Outcome::OWins => {
            report.games.o_wins += 1;
            if report.losing_line.is_none() { report.losing_line = Some(line.clone()); }
            return;
        }
        Outcome::Ongoing => {}
    }
    if board.side_to_move() == Mark::X {
        if let Some(mv) = select_best_move(board) {
            line.push(mv);
            walk(&board.with(mv, Mark::X), line, report);
            line.pop();
        }
    } else {
        for mv in board.empty_cells() {
            line.push(mv);
            walk(&board.with(mv, Mark::O), line, report);
            line.pop();
        }
    }
}

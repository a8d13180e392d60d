use crate::board::{Board, Mark, Move};
use crate::search::eval::{evaluate, terminal_score};
use crate::search::select::{tie_break, CandidateSet};
use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

/// Bound used for the root window; every real score lies in [-10, 10].
pub const SCORE_INF: i32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Alpha-beta cut-offs. Disabling them gives the plain exhaustive minimax,
    /// which must return the same scores.
    pub use_pruning: bool,
    /// Root moves are scored on the rayon pool when > 1.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self { Self { use_pruning: true, threads: 1 } }
}

impl SearchParams {
    /// Defaults overridden by `TICTACBOT_THREADS` and `TICTACBOT_NO_PRUNING=1`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`. Unparseable values are ignored.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut p = Self::default();
        if let Some(t) = lookup("TICTACBOT_THREADS").and_then(|s| s.trim().parse::<usize>().ok()) {
            p.threads = t.max(1);
        }
        if lookup("TICTACBOT_NO_PRUNING").map(|v| v.trim() == "1").unwrap_or(false) {
            p.use_pruning = false;
        }
        p
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: i32,
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    /// Best root score; `None` when the board has no empty cell.
    pub score: Option<i32>,
    /// Every root move in scan order.
    pub scores: Vec<RootMove>,
    /// Root moves tied at the best score, in scan order.
    pub candidates: Vec<Move>,
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone)]
pub struct Searcher {
    pub(crate) nodes: u64,
    cutoffs: u64,
    use_pruning: bool,
    threads: usize,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { nodes: 0, cutoffs: 0, use_pruning: true, threads: 1 }
    }
}

/// Score `board` for the side given by `maximizing` (true: X to move), from
/// X's perspective, `depth` plies below the root.
pub fn search(board: &Board, depth: i32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Searcher::default().minimax(board, depth, maximizing, alpha, beta)
}

impl Searcher {
    pub fn with_params(params: SearchParams) -> Self {
        Self { use_pruning: params.use_pruning, threads: params.threads.max(1), ..Self::default() }
    }

    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cutoffs(&self) -> u64 { self.cutoffs }

    pub fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if let Some(score) = terminal_score(evaluate(board), depth) {
            return score;
        }
        // Children are copies, so a cut-off cannot leave a placement behind.
        if maximizing {
            let mut best = -SCORE_INF;
            for mv in board.empty_cells() {
                let child = board.with(mv, Mark::X);
                let score = self.minimax(&child, depth + 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if self.use_pruning && beta <= alpha { self.cutoffs += 1; break; }
            }
            best
        } else {
            let mut best = SCORE_INF;
            for mv in board.empty_cells() {
                let child = board.with(mv, Mark::O);
                let score = self.minimax(&child, depth + 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if self.use_pruning && beta <= alpha { self.cutoffs += 1; break; }
            }
            best
        }
    }

    /// Place X on every empty cell and score the reply position with a fresh
    /// full window. Output is in scan order regardless of thread count.
    pub fn score_root_moves(&mut self, board: &Board) -> Vec<RootMove> {
        let moves: Vec<Move> = board.empty_cells().collect();
        if self.threads > 1 && moves.len() > 1 {
            return self.score_root_moves_parallel(board, &moves);
        }
        let mut out = Vec::with_capacity(moves.len());
        for mv in moves {
            let child = board.with(mv, Mark::X);
            let score = self.minimax(&child, 0, false, -SCORE_INF, SCORE_INF);
            trace!("root move {} score {}", mv, score);
            out.push(RootMove { mv, score });
        }
        out
    }

    fn score_root_moves_parallel(&mut self, board: &Board, moves: &[Move]) -> Vec<RootMove> {
        // Each worker owns its board copy and window; nothing is shared.
        let use_pruning = self.use_pruning;
        let results: Vec<(RootMove, u64, u64)> = moves.par_iter().map(|&mv| {
            let child = board.with(mv, Mark::X);
            let mut w = Searcher { use_pruning, ..Searcher::default() };
            let score = w.minimax(&child, 0, false, -SCORE_INF, SCORE_INF);
            (RootMove { mv, score }, w.nodes, w.cutoffs)
        }).collect();

        let mut out = Vec::with_capacity(results.len());
        for (rm, n, c) in results {
            self.nodes += n;
            self.cutoffs += c;
            trace!("root move {} score {}", rm.mv, rm.score);
            out.push(rm);
        }
        out
    }

    pub fn search_with_params(&mut self, board: &Board, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;
        self.use_pruning = params.use_pruning;
        self.threads = params.threads.max(1);

        let scores = self.score_root_moves(board);
        let mut set = CandidateSet::new();
        for rm in &scores {
            set.offer(rm.mv, rm.score);
        }
        let bestmove = tie_break(set.moves());
        debug!(
            "board {} candidates {:?} score {:?} -> {:?} ({} nodes, {} cutoffs)",
            board.notation(), set.moves(), set.best_score(), bestmove, self.nodes, self.cutoffs
        );
        SearchResult {
            bestmove,
            score: set.best_score(),
            candidates: set.moves().to_vec(),
            scores,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }
}

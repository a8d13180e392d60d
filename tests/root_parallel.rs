use tictacbot::board::Board;
use tictacbot::search::alphabeta::{SearchParams, Searcher};

fn boards() -> Vec<Board> {
    [".../.../...", "O../.X./...", ".O./.X./...", "X.O/.O./..X", "X.X/OOX/.O."]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

#[test]
fn root_parallel_result_equals_single_thread() {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    for b in boards() {
        let single = Searcher::default().search_with_params(&b, SearchParams::default());
        let p = SearchParams { threads: 4, ..SearchParams::default() };
        let multi = pool.install(|| Searcher::default().search_with_params(&b, p));
        assert_eq!(multi.scores, single.scores, "scores differ on {}", b.notation());
        assert_eq!(multi.candidates, single.candidates);
        assert_eq!(multi.bestmove, single.bestmove);
        assert_eq!(multi.nodes, single.nodes, "node totals differ on {}", b.notation());
    }
}

#[test]
fn root_parallel_opens_in_the_center() {
    let p = SearchParams { threads: 4, ..SearchParams::default() };
    let r = Searcher::default().search_with_params(&Board::empty(), p);
    assert_eq!(r.bestmove, Some(tictacbot::Move::new(1, 1)));
}

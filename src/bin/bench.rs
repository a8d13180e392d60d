use clap::Parser;
use std::time::Instant;
use tictacbot::board::Board;
use tictacbot::search::alphabeta::{SearchParams, Searcher};

// Openings and middlegames, all with X to move.
const POSITIONS: [&str; 5] = ["empty", "O../.X./...", ".O./.X./...", "X.O/.O./..X", "XO./.X./..O"];

#[derive(Parser, Debug)]
#[command(name = "tictacbot-bench", version, about = "Benchmark TicTacBot search")]
struct Args {
    /// Threads
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Repetitions per position
    #[arg(long, default_value_t = 20)]
    iters: u32,

    /// Also run without alpha-beta cut-offs
    #[arg(long, default_value_t = false)]
    compare_pruning: bool,
}

fn run(boards: &[Board], params: SearchParams, iters: u32) {
    let mut s = Searcher::with_params(params);
    let mut nodes = 0u64;
    let t0 = Instant::now();
    for _ in 0..iters {
        for b in boards {
            nodes += s.search_with_params(b, params).nodes;
        }
    }
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    println!("pruning={} threads={} nodes={} elapsed={:.3}s nps={:.1}", params.use_pruning, params.threads, nodes, dt.as_secs_f64(), nps);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let boards = POSITIONS
        .iter()
        .map(|p| if *p == "empty" { Ok(Board::empty()) } else { Board::from_notation(p) })
        .collect::<Result<Vec<_>, _>>()?;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let params = SearchParams { use_pruning: true, threads: args.threads.max(1) };
    pool.install(|| run(&boards, params, args.iters));
    if args.compare_pruning {
        let params = SearchParams { use_pruning: false, ..params };
        pool.install(|| run(&boards, params, args.iters));
    }
    Ok(())
}

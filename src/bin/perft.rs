use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;
use tictacbot::board::Board;
use tictacbot::perft::{count_games, perft, reachable_positions};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree counts for TicTacBot")]
struct Args {
    /// Depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board notation or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Also tally every complete game and count distinct reachable boards
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let base = if args.board == "empty" { Board::empty() } else { Board::from_notation(&args.board)? };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth == 0 {
            perft(&base, args.depth)
        } else if tictacbot::evaluate(&base).is_terminal() {
            0
        } else {
            let side = base.side_to_move();
            let roots: Vec<_> = base.empty_cells().collect();
            roots.par_iter().map(|&mv| perft(&base.with(mv, side), args.depth - 1)).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }

    if args.games {
        let counts = count_games(&base);
        println!("games: {} (x: {}, o: {}, draw: {})", counts.total(), counts.x_wins, counts.o_wins, counts.draws);
        println!("positions: {}", reachable_positions(&base).len());
    }
    Ok(())
}

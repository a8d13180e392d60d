use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tictacbot::board::{Board, Mark, Move};
use tictacbot::game::{Game, GameStatus};
use tictacbot::protocol::ProtocolEngine;
use tictacbot::search::alphabeta::{SearchParams, Searcher};
use tictacbot::search::eval::evaluate;

#[derive(Parser, Debug)]
#[command(author, version, about = "Perfect-play tic-tac-toe engine", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play against the engine (engine is X and moves first, you are O)
    Play,
    /// Print the engine's move for X on a board, e.g. "X.O/.X./..O"
    Best {
        board: String,
        /// Threads for root-split scoring
        #[arg(long, default_value_t = 1)]
        threads: usize,
        /// Disable alpha-beta cut-offs (exhaustive minimax)
        #[arg(long)]
        no_pruning: bool,
        /// Print the full search result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a board as ongoing, x, o or draw
    Eval { board: String },
    /// Run the line protocol on stdin/stdout
    Protocol,
}

fn read_human_move(game: &Game) -> Result<Option<Move>> {
    loop {
        print!("Enter row and col (0-2) for 'O', or 'quit': ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(None); }
        let input = input.trim();
        if input == "quit" { return Ok(None); }

        match input.parse::<Move>() {
            Ok(mv) if game.board().get(mv) == Mark::Empty => return Ok(Some(mv)),
            Ok(_) => println!("Spot taken, try again."),
            Err(e) => println!("{e}"),
        }
    }
}

fn announce(status: GameStatus) {
    match status {
        GameStatus::XWon => println!("Winner: X (engine)"),
        GameStatus::OWon => println!("Winner: O"),
        GameStatus::Drawn => println!("It's a tie!"),
        GameStatus::InProgress => {}
    }
}

fn play() -> Result<()> {
    println!("Tic-tac-toe: engine is X (moves first), you are O");
    let mut game = Game::new();
    loop {
        if let Some(mv) = game.play_engine()? {
            println!("\nEngine plays: {mv}");
        }
        println!("\n{}", game.board());
        if game.is_over() { announce(game.status()); break; }

        let Some(mv) = read_human_move(&game)? else {
            println!("Bye!");
            break;
        };
        game.play(mv)?;
        if game.is_over() {
            println!("\n{}", game.board());
            announce(game.status());
            break;
        }
    }
    Ok(())
}

/// Reply for `best`. A decided board has no move to report; O to move is an error.
fn best_report(board: &Board, params: SearchParams, json: bool) -> Result<String> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Ok(if json {
            serde_json::to_string_pretty(&serde_json::json!({ "bestmove": null, "outcome": outcome }))?
        } else {
            format!("bestmove=(none) outcome={}", outcome.as_str())
        });
    }
    if board.side_to_move() != Mark::X {
        anyhow::bail!("engine plays X but it is O to move on {}", board.notation());
    }
    let mut searcher = Searcher::with_params(params);
    let res = if params.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads).build()?;
        pool.install(|| searcher.search_with_params(board, params))
    } else {
        searcher.search_with_params(board, params)
    };
    if json {
        return Ok(serde_json::to_string_pretty(&res)?);
    }
    let best = res.bestmove.map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string());
    Ok(format!("bestmove={} score={:?} candidates={} nodes={} cutoffs={}",
        best, res.score, res.candidates.len(), res.nodes, res.cutoffs))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Play) {
        Commands::Play => play()?,
        Commands::Best { board, threads, no_pruning, json } => {
            let board = Board::from_notation(&board)?;
            let params = SearchParams { use_pruning: !no_pruning, threads: threads.max(1) };
            println!("{}", best_report(&board, params, json)?);
        }
        Commands::Eval { board } => {
            let board = Board::from_notation(&board)?;
            println!("{}", evaluate(&board).as_str());
        }
        Commands::Protocol => ProtocolEngine::new().run_loop()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board { Board::from_notation(s).unwrap() }

    #[test]
    fn best_on_decided_board_reports_no_move() {
        let p = SearchParams::default();
        assert_eq!(best_report(&board("XOX/XOO/OXX"), p, false).unwrap(), "bestmove=(none) outcome=draw");
        assert_eq!(best_report(&board("XXX/OO./..."), p, false).unwrap(), "bestmove=(none) outcome=x");
        let json: serde_json::Value = serde_json::from_str(&best_report(&board("XXX/OO./..."), p, true).unwrap()).unwrap();
        assert!(json["bestmove"].is_null());
        assert_eq!(json["outcome"], "XWins");
    }

    #[test]
    fn best_refuses_o_to_move_and_answers_x_to_move() {
        let p = SearchParams::default();
        assert!(best_report(&board("X../.../..."), p, false).is_err());
        assert!(best_report(&board("X.X/OOX/.O."), p, false).unwrap().starts_with("bestmove=2,2 score=Some(10)"));
    }
}

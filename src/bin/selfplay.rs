use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tictacbot::board::Board;
use tictacbot::selfplay::{generate_games_observed, tally, verify_no_loss, SelfPlayParams};
use tictacbot::Outcome;

#[derive(Parser, Debug)]
#[command(name = "tictacbot-selfplay", about = "Play the engine against a random opponent, or against every opponent line")]
struct Args {
    #[arg(long, default_value_t = 1000)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Enumerate every O reply sequence instead of sampling
    #[arg(long)]
    exhaustive: bool,
    /// Starting board for --exhaustive
    #[arg(long, default_value = "empty")]
    board: String,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();

    if a.exhaustive {
        let board = if a.board == "empty" { Board::empty() } else { Board::from_notation(&a.board)? };
        let report = verify_no_loss(&board);
        if a.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("games={} x={} draw={} o={}", report.games.total(), report.games.x_wins, report.games.draws, report.games.o_wins);
        }
        if !report.holds() {
            anyhow::bail!("engine lost along {:?}", report.losing_line);
        }
        return Ok(());
    }

    let params = SelfPlayParams { games: a.games, seed: a.seed, threads: a.threads.max(1) };
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    let mut losses = 0usize;
    let games = generate_games_observed(&params, |_, g| {
        if g.outcome == Outcome::OWins { losses += 1; }
        pb.set_message(format!("losses: {losses}"));
        pb.inc(1);
    });
    pb.finish();

    let counts = tally(&games);
    if a.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("games={} x={} draw={} o={}", counts.total(), counts.x_wins, counts.draws, counts.o_wins);
    }
    if counts.o_wins > 0 {
        anyhow::bail!("engine lost {} games", counts.o_wins);
    }
    Ok(())
}

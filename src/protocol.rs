use std::io::{self, BufRead, Write};
use log::{info, warn};
use crate::board::{Board, Mark, Move};
use crate::error::{Error, Result};
use crate::game::Game;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::evaluate;

/// Line-oriented engine protocol in the spirit of UCI.
///
/// ```text
/// isready                      -> readyok
/// newgame
/// position empty|<board> [moves r,c ...]
/// go                           -> bestmove r,c | bestmove none
/// analyze                      -> info move r,c score s ... bestmove ...
/// eval                         -> outcome ongoing|x|o|draw
/// d                            -> <board notation>
/// quit
/// ```
pub struct ProtocolEngine {
    board: Board,
    searcher: Searcher,
    params: SearchParams,
}

impl Default for ProtocolEngine {
    fn default() -> Self { Self::new() }
}

impl ProtocolEngine {
    pub fn new() -> Self { Self::with_params(SearchParams::from_env()) }

    pub fn with_params(params: SearchParams) -> Self {
        Self { board: Board::empty(), searcher: Searcher::with_params(params), params }
    }

    pub fn board(&self) -> &Board { &self.board }

    /// Replies for one input line; `None` once `quit` is received.
    pub fn handle_line(&mut self, line: &str) -> Option<Vec<String>> {
        let line = line.trim();
        if line.is_empty() { return Some(Vec::new()); }
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let out = match cmd {
            "quit" => return None,
            "isready" => vec!["readyok".to_string()],
            "newgame" => { self.board = Board::empty(); Vec::new() }
            "position" => match self.cmd_position(rest) {
                Ok(()) => Vec::new(),
                Err(e) => vec![format!("error {e}")],
            },
            "go" => self.cmd_go(false),
            "analyze" => self.cmd_go(true),
            "eval" => vec![format!("outcome {}", evaluate(&self.board).as_str())],
            "d" => vec![self.board.notation()],
            other => vec![format!("error unknown command '{other}'")],
        };
        Some(out)
    }

    fn cmd_position(&mut self, args: &str) -> Result<()> {
        let mut tokens = args.split_whitespace();
        let start = match tokens.next() {
            None | Some("empty") | Some("startpos") => Board::empty(),
            Some(notation) => Board::from_notation(notation)?,
        };
        let mut game = Game::from_board(start)?;
        if let Some("moves") = tokens.next() {
            for tok in tokens {
                let mv: Move = tok.parse()?;
                game.play(mv)?;
            }
        }
        self.board = *game.board();
        Ok(())
    }

    fn cmd_go(&mut self, analyze: bool) -> Vec<String> {
        if evaluate(&self.board).is_terminal() {
            return vec!["bestmove none".to_string()];
        }
        if self.board.side_to_move() != Mark::X {
            return vec![format!("error {}", Error::NotEngineTurn)];
        }
        let res = self.searcher.search_with_params(&self.board, self.params);
        let mut out = Vec::new();
        if analyze {
            for rm in &res.scores {
                out.push(format!("info move {} score {}", rm.mv, rm.score));
            }
            out.push(format!("info nodes {} cutoffs {}", res.nodes, res.cutoffs));
        }
        match res.bestmove {
            Some(mv) => out.push(format!("bestmove {mv}")),
            None => out.push("bestmove none".to_string()),
        }
        out
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let io_err = |operation: &str| {
            let operation = operation.to_string();
            move |source: io::Error| Error::Io { operation, source }
        };
        for line in input.lines() {
            let line = line.map_err(io_err("read command"))?;
            let Some(replies) = self.handle_line(&line) else {
                info!("quit received");
                break;
            };
            for r in replies {
                if r.starts_with("error") { warn!("{line}: {r}"); }
                writeln!(output, "{r}").map_err(io_err("write reply"))?;
            }
            output.flush().map_err(io_err("flush output"))?;
        }
        Ok(())
    }

    pub fn run_loop(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}

use std::io::Cursor;
use tictacbot::protocol::ProtocolEngine;
use tictacbot::search::alphabeta::SearchParams;

fn engine() -> ProtocolEngine { ProtocolEngine::with_params(SearchParams::default()) }

fn send(e: &mut ProtocolEngine, line: &str) -> Vec<String> {
    e.handle_line(line).expect("engine quit unexpectedly")
}

#[test]
fn isready_and_opening_move() {
    let mut e = engine();
    assert_eq!(send(&mut e, "isready"), vec!["readyok"]);
    assert!(send(&mut e, "position empty").is_empty());
    assert_eq!(send(&mut e, "go"), vec!["bestmove 1,1"]);
}

#[test]
fn position_with_moves_then_eval() {
    let mut e = engine();
    assert!(send(&mut e, "position X.X/OOX/.O.").is_empty());
    assert_eq!(send(&mut e, "go"), vec!["bestmove 2,2"]);
    assert!(send(&mut e, "position X.X/OOX/.O. moves 2,2").is_empty());
    assert_eq!(send(&mut e, "eval"), vec!["outcome x"]);
    assert_eq!(send(&mut e, "go"), vec!["bestmove none"]);
    assert_eq!(send(&mut e, "d"), vec!["X.X/OOX/.OX"]);
}

#[test]
fn analyze_lists_every_root_move() {
    let mut e = engine();
    send(&mut e, "position XOO/X.O/..X");
    let out = send(&mut e, "analyze");
    let infos: Vec<&String> = out.iter().filter(|l| l.starts_with("info move")).collect();
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[2], "info move 2,1 score 8");
    assert_eq!(out.last().unwrap(), "bestmove 1,1");
}

#[test]
fn errors_are_reported_not_fatal() {
    let mut e = engine();
    assert!(send(&mut e, "position XXX")[0].starts_with("error"));
    assert!(send(&mut e, "position empty moves 1,1 1,1")[0].starts_with("error"));
    assert!(send(&mut e, "frobnicate")[0].starts_with("error unknown command"));
    send(&mut e, "position empty moves 1,1");
    assert!(send(&mut e, "go")[0].starts_with("error"));
    // A failed position command leaves the previous board in place.
    assert_eq!(send(&mut e, "d"), vec![".../.X./..."]);
    send(&mut e, "newgame");
    assert_eq!(send(&mut e, "d"), vec![".../.../..."]);
}

#[test]
fn run_stops_at_quit() {
    let mut e = engine();
    let input = Cursor::new("isready\nposition empty\ngo\nquit\neval\n");
    let mut out = Vec::new();
    e.run(input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "readyok\nbestmove 1,1\n");
    assert!(e.handle_line("quit").is_none());
}

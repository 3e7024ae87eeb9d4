use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::error;

use chess_ai::agent::ai::{num_moves_to_mate_from_score, AiPlayer, AiSettings, Search};
use chess_ai::game_repr::{Position, START_FEN};

#[derive(Parser)]
#[command(name = "chess_ai", version, about = "Chess move search and perft tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a position and print the best move
    Search {
        #[arg(default_value = START_FEN)]
        fen: String,
        /// Fixed search depth in plies
        #[arg(default_value_t = 6)]
        depth: u32,
        /// Deepen until this many milliseconds have passed instead of stopping at `depth`
        #[arg(long)]
        time: Option<u64>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        depth: u32,
        #[arg(default_value = START_FEN)]
        fen: String,
    },
    /// Perft split by root move
    Divide {
        depth: u32,
        #[arg(default_value = START_FEN)]
        fen: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let fen = match &cli.command {
        Command::Search { fen, .. } | Command::Perft { fen, .. } | Command::Divide { fen, .. } => fen,
    };
    let mut pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Search { depth, time, .. } => run_search(&mut pos, depth, time),
        Command::Perft { depth, .. } => {
            let start = Instant::now();
            let nodes = pos.perft(depth);
            let elapsed = start.elapsed();
            println!("perft({depth}) = {nodes}");
            println!(
                "{:.3}s, {:.0} nodes/s",
                elapsed.as_secs_f64(),
                nodes as f64 / elapsed.as_secs_f64().max(1e-9)
            );
        }
        Command::Divide { depth, .. } => {
            let split = pos.divide(depth);
            let total: u64 = split.iter().map(|(_, n)| n).sum();
            for (mv, nodes) in split {
                println!("{mv}: {nodes}");
            }
            println!("\nNodes searched: {total}");
        }
    }
    ExitCode::SUCCESS
}

fn run_search(pos: &mut Position, depth: u32, time: Option<u64>) {
    let settings = match time {
        Some(millis) => AiSettings::timed(millis),
        None => AiSettings::fixed_depth(depth),
    };

    let result = match time {
        // The AI player arms the abort timer for time-bounded settings
        Some(_) => AiPlayer::with_position(pos.clone(), settings).choose_move(),
        None => Search::new(settings).start_search(pos),
    };

    match result.best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }
    if result.is_mate() {
        let moves = num_moves_to_mate_from_score(result.eval);
        println!("score mate {}", if result.eval > 0 { moves } else { -moves });
    } else {
        println!("score cp {}", result.eval);
    }
    let d = &result.diagnostics;
    println!(
        "depth {} nodes {} qnodes {} time {} ms",
        d.last_completed_depth,
        d.num_nodes,
        d.num_q_nodes,
        d.elapsed.as_millis()
    );
}

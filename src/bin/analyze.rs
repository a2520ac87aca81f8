use std::io::Read;

use clap::Parser;
use serde::Deserialize;
use serde_json::json;

use darksquare::{
    evaluate_game_state, search_root, GameOutcome, Grid, NullOracle, Position, Side,
    DEFAULT_DEPTH,
};

#[derive(Debug, Parser)]
#[command(
    name = "analyze",
    about = "Darksquare position analysis: best move and outcome for a JSON position on stdin"
)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,
}

/// Input schema: { "grid": [[i8; 8]; 8], "to_move": "Red" | "Black" }
#[derive(Debug, Deserialize)]
struct Input {
    grid: Grid,
    to_move: Side,
}

fn run(args: &Args) -> Result<(), String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("stdin read error: {e}"))?;

    let input: Input =
        serde_json::from_str(&raw).map_err(|e| format!("invalid JSON input: {e}"))?;

    let pos = Position::from_grid(&input.grid, input.to_move)
        .map_err(|e| format!("invalid position: {e}"))?;

    let outcome = evaluate_game_state(&pos);
    if outcome != GameOutcome::InProgress {
        // Terminal position: no best_move in the output.
        println!("{}", json!({ "outcome": outcome }));
        return Ok(());
    }

    let result =
        search_root(&pos, args.depth, &NullOracle).map_err(|e| format!("search error: {e}"))?;

    println!(
        "{}",
        json!({
            "outcome": outcome,
            "best_move": result.best_move,
            "score": result.score,
            "depth": result.depth,
            "nodes": result.nodes,
        })
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("[analyze] Error: {e}");
        std::process::exit(1);
    }
}

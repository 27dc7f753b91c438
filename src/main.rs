use std::path::Path;

use connect_four_arena::arena;
use connect_four_arena::config::AppConfig;
use connect_four_arena::render;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "arena.toml".to_string());
    let config = AppConfig::load_or_default(Path::new(&path))?;

    println!(
        "{:?} (Red) vs {:?} (Yellow) on {}x{}, {} game(s), seed {}",
        config.arena.red,
        config.arena.yellow,
        config.board.width,
        config.board.height,
        config.arena.games,
        config.arena.seed,
    );

    let show_moves = config.arena.show_moves;
    let stats = arena::run_series(&config, |board, mv| {
        if show_moves {
            println!("{}", render::frame(board, mv));
        }
    })?;

    println!("{stats}");
    Ok(())
}

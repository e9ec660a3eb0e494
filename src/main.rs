use clap::Parser;
use tracing_subscriber::EnvFilter;

use othello::config::Cli;
use othello::game::Game;
use othello::view::ConsoleView;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let (black, white) = cli.players();
    let mut game = Game::new(black, white).unwrap_or_else(|err| {
        eprintln!("Failed to set up game: {err}");
        std::process::exit(1);
    });

    let mut view = ConsoleView::stdio();
    if let Err(err) = game.play(&mut view) {
        eprintln!("Game aborted: {err}");
        std::process::exit(1);
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use clap::Parser;
use omok::{GameSession, Mark, DEFAULT_BOARD_SIZE, MAX_CLI_BOARD_SIZE};

/// Hotseat whole-line tic-tac-toe in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board rows/columns (browser presets: 5, 7, 10).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Display name for the X player.
    #[arg(long, default_value = "Player 1")]
    x_name: String,
    /// Display name for the O player.
    #[arg(long, default_value = "Player 2")]
    o_name: String,
}

fn main() -> anyhow::Result<()> {
    omok::init_logging();
    let cli = Cli::parse();
    if cli.size > MAX_CLI_BOARD_SIZE {
        anyhow::bail!(
            "board size {} exceeds the terminal maximum of {}",
            cli.size,
            MAX_CLI_BOARD_SIZE
        );
    }
    let mut session = GameSession::with_size(cli.size).map_err(|e| anyhow::anyhow!(e))?;
    session.names_mut().set_name(Mark::X, cli.x_name);
    session.names_mut().set_name(Mark::O, cli.o_name);
    omok::run_interactive(&mut session)
}

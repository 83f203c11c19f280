use clap::Parser;
use labelkit::cli::{run, Cli};
use labelkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

use clap::Parser;
use rickview::cli::Cli;
use rickview::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    let start = cli.start_options(&config);
    rickview::ui::runtime::run(config, start)
}

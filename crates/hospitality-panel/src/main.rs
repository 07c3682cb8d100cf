use std::process::ExitCode;

use clap::Parser;
use hospitality_panel::cli::{self, Cli};
use hospitality_panel::{logging, PanelError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<PanelError>()
                .map(PanelError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    logging::init(cli.verbose, config.log_json);
    cli::run(cli, config).await?;
    Ok(())
}

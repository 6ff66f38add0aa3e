use std::io::Write;

use clap::Parser;
use fractal_catalog::{CatalogController, Cli, JsonPresenter, OutputFormat, TextPresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    fractal_catalog::init_logging(cli.log_format, cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            CatalogController::new(TextPresenter::new()).run(&cli.command, &mut out)?;
        }
        OutputFormat::Json => {
            CatalogController::new(JsonPresenter::new()).run(&cli.command, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

use clap::Parser;
use color_eyre::Result;
use contact_form::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    contact_form::run(args).await
}

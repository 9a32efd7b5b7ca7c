use amalgamate::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let manifest = load_manifest(&cli.root, cli.manifest.as_deref())?;

    if handle_build_commands(cli, &manifest)? {
        return Ok(());
    }
    if handle_inspect_commands(cli, &manifest)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command: {:?}", cli.command)
}

fn main() {
    let cli = Cli::parse();
    if !cli.quiet {
        init_tracing();
    }

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "run failed");
        print_error(cli.json, error_code(&err), &format!("{:#}", err));
        std::process::exit(1);
    }
}

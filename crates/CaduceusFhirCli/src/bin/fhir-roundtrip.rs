use caduceus_fhir_cli::cli::{Args, init_tracing, run_cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    run_cli(args)
}

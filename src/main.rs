use clap::Parser;
use rustmaxflow::max_flow::instance::read_instance;
use rustmaxflow::max_flow::max_flow;
use rustmaxflow::max_flow::utils::format_report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rustmaxflow")]
#[command(about = "Maximum flow of a capacitated network with Dinic's algorithm")]
struct Args {
    /// Instance file: header `n m s t` followed by `m` lines of `u v cap`
    file: PathBuf,

    /// List every edge, not only the ones carrying flow
    #[arg(short, long)]
    all_edges: bool,
}

fn run(args: &Args) -> Result<(), rustmaxflow::Error> {
    log::info!("reading instance from {}", args.file.display());
    let instance = read_instance(&args.file)?;
    let network = instance.to_network()?;
    let report = max_flow(&network)?;
    print!("{}", format_report(&network, &report, args.all_edges));
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

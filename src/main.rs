use clap::Parser;

mod cfg;
mod cli;
mod snapshot;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    let cfg = cfg::Cfg::from_env_or_default();
    if let Err(err) = cli::run(args, cfg) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

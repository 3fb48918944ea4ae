mod app;
mod cli;
mod config;
mod store;
mod table;

use app::App;
use cli::Cli;
use env_logger::Env;

pub type Result<T> = anyhow::Result<T>;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args(std::env::args_os());

    if let Err(e) = App::new(cli).run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

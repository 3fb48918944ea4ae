use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::store::{Train, TrainStore};
use crate::{table, Result};

pub struct App {
    cli: Cli,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        App { cli }
    }

    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Runs the parsed command, writing any table to `out`.
    pub fn run_with(self, out: &mut impl Write) -> Result<()> {
        match self.cli.command {
            Some(cmd) => match cmd {
                Command::Add {
                    data,
                    punkt_nazn,
                    nomer,
                    time,
                } => execute_add_command(
                    data.data,
                    Train {
                        destination: punkt_nazn,
                        number: nomer,
                        time,
                    },
                ),
                Command::Display { data } => {
                    let (_, store) = open_store(data.data)?;
                    table::render(out, store.trains())
                }
                Command::Select { data, nom } => {
                    let (_, store) = open_store(data.data)?;
                    table::render(out, &store.select(nom))
                }
            },
            None => Ok(()),
        }
    }
}

fn open_store(data: Option<PathBuf>) -> Result<(Config, TrainStore)> {
    let config = Config::resolve(data)?;
    let store = TrainStore::load(config.data_file())?;
    Ok((config, store))
}

fn execute_add_command(data: Option<PathBuf>, train: Train) -> Result<()> {
    let (config, mut store) = open_store(data)?;

    log::info!(
        "Adding train to {} ({:?}) departing {}",
        train.destination,
        train.number,
        train.time
    );
    store.add_train(train);

    store.save(config.data_file())
}

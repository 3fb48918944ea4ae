use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trains", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct DataArgs {
    /// The data file name. If not supplied, trains will use $TRAINS_DATA instead.
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new train.
    Add {
        #[command(flatten)]
        data: DataArgs,

        /// Destination of the train.
        #[arg(short, long = "punkt_nazn")]
        punkt_nazn: String,

        /// Number of the train.
        #[arg(short, long, allow_negative_numbers = true)]
        nomer: Option<i64>,

        /// Departure time.
        #[arg(short, long)]
        time: String,
    },
    /// Display all trains.
    Display {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Select trains by number. `-no` works as a short form of `--nom`.
    Select {
        #[command(flatten)]
        data: DataArgs,

        /// The train number to look for.
        #[arg(long, allow_negative_numbers = true)]
        nom: i64,
    },
}

impl Cli {
    /// Parses argv, exiting with a usage error on bad input.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(normalize_args(args))
    }
}

/// Rewrites `-no N`, `-no=N` and `-noN` after `select` into `--nom` forms clap understands.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut in_select = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if !in_select {
                in_select = arg == "select";
                return arg;
            }

            match arg.to_str().and_then(|s| s.strip_prefix("-no")) {
                Some("") => OsString::from("--nom"),
                Some(rest) => {
                    let value = rest.strip_prefix('=').unwrap_or(rest);
                    if value.parse::<i64>().is_ok() {
                        OsString::from(format!("--nom={value}"))
                    } else {
                        arg
                    }
                }
                None => arg,
            }
        })
        .collect()
}

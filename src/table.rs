use std::io::Write;

use crate::store::Train;
use crate::Result;

const DESTINATION_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 20;
const TIME_WIDTH: usize = 20;

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(TIME_WIDTH)
    )
}

/// Writes `trains` as a bordered table. Nothing is written for an empty slice.
pub fn render(out: &mut impl Write, trains: &[Train]) -> Result<()> {
    if trains.is_empty() {
        return Ok(());
    }

    let line = border();

    writeln!(out, "{line}")?;
    writeln!(
        out,
        "| {:^DESTINATION_WIDTH$} | {:^NUMBER_WIDTH$} | {:^TIME_WIDTH$} |",
        "destination", "train number", "departure time"
    )?;
    writeln!(out, "{line}")?;

    for Train {
        destination,
        number,
        time,
    } in trains
    {
        let number = number.map(|n| n.to_string()).unwrap_or_default();
        writeln!(
            out,
            "| {destination:<DESTINATION_WIDTH$} | {number:<NUMBER_WIDTH$} | {time:<TIME_WIDTH$} |"
        )?;
    }

    writeln!(out, "{line}")?;
    Ok(())
}

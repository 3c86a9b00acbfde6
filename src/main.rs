use anyhow::Result;
use log::LevelFilter;

use cybersys::commands;

fn main() -> Result<()> {
    let matches = commands::cli().get_matches();

    match matches.subcommand() {
        Some(("snapshot", sub_matches)) => {
            cybersys::init_logging(LevelFilter::Info);
            commands::snapshot::execute(sub_matches)
        }
        Some(("version", _)) => commands::version::execute(),
        Some(("dashboard", sub_matches)) => {
            // stderr output would corrupt the alternate screen
            cybersys::init_logging(LevelFilter::Off);
            commands::dashboard::execute(Some(sub_matches))
        }
        _ => {
            cybersys::init_logging(LevelFilter::Off);
            commands::dashboard::execute(None)
        }
    }
}

// Command handlers module
pub mod dashboard;
pub mod snapshot;
pub mod version;

use clap::{Arg, ArgAction, Command};

/// Command-line definition shared by the binary and its tests
pub fn cli() -> Command {
    Command::new("cybersys")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulated system health dashboard for the terminal")
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive dashboard (default)")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Metric refresh interval in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1000"),
                )
                .arg(
                    Arg::new("process-interval")
                        .long("process-interval")
                        .value_name("MS")
                        .help("Process table refresh interval in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("2000"),
                )
                .arg(
                    Arg::new("theme")
                        .short('t')
                        .long("theme")
                        .value_name("NAME")
                        .help("Color theme: dark, cyberpunk or midnight")
                        .default_value("cyberpunk"),
                ),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Print generated samples with their health report and exit")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Number of samples to print")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Delay between samples in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1000"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output JSON lines instead of text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

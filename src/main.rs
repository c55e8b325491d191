use anyhow::Result;
use clap::{App as Cli, Arg};
use teamboard::app::App;
use teamboard::config::Config;

fn main() -> Result<()> {
    let matches = Cli::new("teamboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for browsing team projects")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config)
}

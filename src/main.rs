//! resview CLI - normalize cluster application and user group records

use clap::Parser;

use resview::cli::{
    self, AppCommands, Cli, Commands, ConfigCommands, GlobalOptions, UserGroupCommands,
};
use resview::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Running with {:?}", opts);

    match cli.command {
        Commands::App(AppCommands::List { input, icon }) => cli::app::list(&opts, &input, icon),
        Commands::UserGroup(UserGroupCommands::List { input }) => {
            cli::user_group::list(&opts, &input)
        }
        Commands::Config(ConfigCommands::Show) => cli::config::show(&opts),
        Commands::Config(ConfigCommands::Init { force }) => cli::config::init(&opts, force),
        Commands::Version => {
            println!("resview version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

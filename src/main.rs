mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use reltime::shared::config::{Config, load_config};
use reltime::shared::env_var::EnvVars;
use reltime::shared::logging;

fn main() -> anyhow::Result<()> {
    let Cli { command } = Cli::parse();
    let env = EnvVars::load();

    match command {
        Commands::Format(args) => {
            let config = load_config()?;
            logging::init(&env, &config.log_level);
            args.run(&config)?;
        }
        Commands::Config(config_cmd) => {
            logging::init(&env, &Config::default().log_level);
            config_cmd.run()?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "reltime", &mut std::io::stdout());
        }
    }

    Ok(())
}

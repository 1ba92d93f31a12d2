use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Backend;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        println!("📄 Config file: {}\n", Config::config_file().display());
        println!("{}", cfg.to_yaml()?);

        match cfg.backend() {
            Backend::Normalized { database } => println!("Backend: SQLite ({})", database),
            Backend::Snapshot { file } => println!("Backend: snapshot ({})", file.display()),
        }
    }

    Ok(())
}

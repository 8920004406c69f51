use clap::{Args, Parser, Subcommand};

/// Clap's help machinery is disabled at every level. `-h` is a plain flag and
/// the usage blocks come from the renderer.
#[derive(Parser, Debug)]
#[command(
    name = "poke-cli",
    bin_name = "poke-cli",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get details about a specific ability
    #[command(disable_help_flag = true)]
    Ability(EntityArgs),

    /// Get details about a specific move
    #[command(disable_help_flag = true)]
    Move(EntityArgs),
}

#[derive(Args, Debug)]
pub struct EntityArgs {
    /// Entity name, hyphenated (e.g. `clear-body`)
    pub name: Option<String>,

    /// List the related Pokémon
    #[arg(short, long)]
    pub pokemon: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ability_with_flag() {
        let cli = Cli::try_parse_from(["poke-cli", "ability", "stench", "--pokemon"]).unwrap();
        match cli.command {
            Some(Commands::Ability(args)) => {
                assert_eq!(args.name.as_deref(), Some("stench"));
                assert!(args.pokemon);
                assert!(!args.help);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli =
            Cli::try_parse_from(["poke-cli", "move", "growl", "-v", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}

//! Argument validation. Runs before any lookup: a request that leaves here is
//! well-formed, and anything that is not becomes a [`ValidationError`] carrying
//! the usage block of the command that was being invoked.

use super::args::{Cli, Commands, EntityArgs};
use crate::error::{ValidationError, ValidationErrorKind};
use crate::model::{Category, CommandRequest, Flags, UsageTopic};
use crate::render::Renderer;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use tracing::debug;

/// Flags that apply to every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    Request(CommandRequest),
    Usage(UsageTopic),
    Version(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub options: GlobalOptions,
    pub action: Validated,
}

/// Check the process arguments (program name first) and build the request.
pub fn validate<I, T>(args: I) -> Result<Parsed, ValidationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|a| a.into().to_string_lossy().into_owned())
        .collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return recover(&err, &args),
    };

    let options = GlobalOptions {
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    let action = match cli.command {
        None if cli.help => Validated::Usage(UsageTopic::Main),
        None => {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingArgument,
                "Please specify a command.",
                usage_text(UsageTopic::Main),
            ))
        }
        Some(Commands::Ability(entity)) => entity_action(Category::Ability, entity, cli.help)?,
        Some(Commands::Move(entity)) => entity_action(Category::Move, entity, cli.help)?,
    };

    debug!(?action, "arguments validated");
    Ok(Parsed { options, action })
}

fn entity_action(
    category: Category,
    entity: EntityArgs,
    top_level_help: bool,
) -> Result<Validated, ValidationError> {
    if entity.help || top_level_help {
        return Ok(Validated::Usage(UsageTopic::Command(category)));
    }

    match entity.name.as_deref() {
        Some(name) if !name.trim().is_empty() => Ok(Validated::Request(CommandRequest::new(
            category,
            name,
            Flags {
                pokemon: entity.pokemon,
            },
        ))),
        _ => Err(ValidationError::new(
            ValidationErrorKind::MissingArgument,
            missing_name_message(category),
            usage_text(UsageTopic::Command(category)),
        )),
    }
}

/// Map a clap failure onto our own error kinds. A help flag anywhere after a
/// known command wins over whatever else went wrong.
fn recover(err: &clap::Error, args: &[String]) -> Result<Parsed, ValidationError> {
    let options = scan_options(args);
    let command = command_token(args);
    let category = command.and_then(category_for);

    if err.kind() == ErrorKind::DisplayVersion {
        return Ok(Parsed {
            options,
            action: Validated::Version(err.to_string()),
        });
    }

    if wants_help(args) {
        let topic = category.map_or(UsageTopic::Main, UsageTopic::Command);
        return Ok(Parsed {
            options,
            action: Validated::Usage(topic),
        });
    }

    let topic = category.map_or(UsageTopic::Main, UsageTopic::Command);
    let offending = offending_token(err);

    let error = match (err.kind(), command, category) {
        (ErrorKind::InvalidSubcommand, _, _) | (_, Some(_), None) => {
            let token = command.or(offending.as_deref()).unwrap_or_default();
            ValidationError::new(
                ValidationErrorKind::UnknownCategory,
                format!("'{}' is not a valid command.", token),
                usage_text(UsageTopic::Main),
            )
        }
        (
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand,
            _,
            _,
        ) => ValidationError::new(
            ValidationErrorKind::MissingArgument,
            category.map_or("Please specify a command.", missing_name_message),
            usage_text(topic),
        ),
        _ => ValidationError::new(
            ValidationErrorKind::MalformedFlag,
            match offending {
                Some(token) => format!("Invalid argument '{}'.", token),
                None => "Invalid arguments.".to_string(),
            },
            usage_text(topic),
        ),
    };

    debug!(kind = ?error.kind, clap_kind = ?err.kind(), "argument validation failed");
    Err(error)
}

fn missing_name_message(category: Category) -> &'static str {
    match category {
        Category::Ability => "Please specify an ability.",
        Category::Move => "Please specify a move.",
    }
}

fn category_for(token: &str) -> Option<Category> {
    match token {
        "ability" => Some(Category::Ability),
        "move" => Some(Category::Move),
        _ => None,
    }
}

/// First token after the program name that is not a flag.
fn command_token(args: &[String]) -> Option<&str> {
    args.iter()
        .skip(1)
        .map(String::as_str)
        .find(|a| !a.starts_with('-'))
}

fn wants_help(args: &[String]) -> bool {
    args.iter().skip(1).any(|a| a == "-h" || a == "--help")
}

fn scan_options(args: &[String]) -> GlobalOptions {
    let has = |flag: &str| args.iter().skip(1).any(|a| a == flag);
    GlobalOptions {
        verbose: has("-v") || has("--verbose"),
        no_color: has("--no-color"),
    }
}

fn offending_token(err: &clap::Error) -> Option<String> {
    [ContextKind::InvalidSubcommand, ContextKind::InvalidArg]
        .into_iter()
        .find_map(|kind| match err.get(kind) {
            Some(ContextValue::String(s)) => Some(s.clone()),
            _ => None,
        })
}

/// Plain usage text for error messages.
pub fn usage_text(topic: UsageTopic) -> String {
    Renderer::with_color(false).render_usage(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, ValidationError> {
        let mut full = vec!["poke-cli"];
        full.extend_from_slice(args);
        validate(full)
    }

    fn kind_of(args: &[&str]) -> ValidationErrorKind {
        parse(args).unwrap_err().kind
    }

    #[test]
    fn test_valid_ability_request() {
        let parsed = parse(&["ability", "Clear-Body"]).unwrap();
        assert_eq!(
            parsed.action,
            Validated::Request(CommandRequest::new(
                Category::Ability,
                "clear-body",
                Flags::default()
            ))
        );
        assert_eq!(parsed.options, GlobalOptions::default());
    }

    #[test]
    fn test_pokemon_flag_short_and_long() {
        for flag in ["-p", "--pokemon"] {
            match parse(&["move", "flamethrower", flag]).unwrap().action {
                Validated::Request(req) => assert!(req.flags.pokemon, "{} not recognized", flag),
                other => panic!("unexpected action {:?}", other),
            }
        }
    }

    #[test]
    fn test_help_yields_command_usage() {
        for args in [
            vec!["ability", "-h"],
            vec!["ability", "--help"],
            vec!["move", "flamethrower", "--help"],
            vec!["move", "-p", "-h"],
        ] {
            let parsed = parse(&args).unwrap();
            let expected = if args[0] == "ability" {
                Category::Ability
            } else {
                Category::Move
            };
            assert_eq!(parsed.action, Validated::Usage(UsageTopic::Command(expected)));
        }
    }

    #[test]
    fn test_help_wins_over_other_errors() {
        let parsed = parse(&["ability", "stench", "extra", "--bogus", "-h"]).unwrap();
        assert_eq!(
            parsed.action,
            Validated::Usage(UsageTopic::Command(Category::Ability))
        );
    }

    #[test]
    fn test_top_level_help() {
        assert_eq!(
            parse(&["-h"]).unwrap().action,
            Validated::Usage(UsageTopic::Main)
        );
    }

    #[test]
    fn test_missing_entity_name() {
        let err = parse(&["ability"]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingArgument);
        assert_eq!(err.message, "Please specify an ability.");
        assert!(err.usage.contains("poke-cli ability <ability-name> [flag]"));

        let err = parse(&["move", "-p"]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingArgument);
        assert_eq!(err.message, "Please specify a move.");
    }

    #[test]
    fn test_missing_command() {
        assert_eq!(kind_of(&[]), ValidationErrorKind::MissingArgument);
        assert_eq!(kind_of(&["--no-color"]), ValidationErrorKind::MissingArgument);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse(&["berry", "oran"]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownCategory);
        assert!(err.message.contains("'berry'"));
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["ability", "stench", "--shiny"]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MalformedFlag);
        assert!(err.message.contains("--shiny"));
        assert!(err.usage.contains("ability"));
    }

    #[test]
    fn test_extra_positional_is_malformed() {
        assert_eq!(
            kind_of(&["move", "thunder", "punch"]),
            ValidationErrorKind::MalformedFlag
        );
    }

    #[test]
    fn test_version() {
        match parse(&["-V"]).unwrap().action {
            Validated::Version(text) => assert!(text.contains(env!("CARGO_PKG_VERSION"))),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_global_options_survive() {
        let parsed = parse(&["--no-color", "-v", "ability", "stench"]).unwrap();
        assert!(parsed.options.no_color);
        assert!(parsed.options.verbose);
    }
}

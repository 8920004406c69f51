use super::layout::{Line, Segment};
use super::styles::names;
use crate::model::{Category, UsageTopic};

const HYPHEN_HINT: &str = "Use a hyphen when typing a name with a space.";

fn blank() -> Line {
    vec![Segment::plain("")]
}

fn heading(text: &str) -> Line {
    vec![Segment::new(text, names::TITLE)]
}

fn flag_row(flags: &str, description: &str) -> Line {
    vec![Segment::plain(format!("    {:<17}{}", flags, description))]
}

/// Content lines of the usage block for a topic.
pub fn usage_lines(topic: UsageTopic) -> Vec<Line> {
    match topic {
        UsageTopic::Main => vec![
            vec![Segment::plain(
                "Welcome! This tool displays data about Pokémon abilities and moves.",
            )],
            blank(),
            heading("USAGE:"),
            vec![Segment::plain(
                "    poke-cli [flags] <command> <name> [command-flags]",
            )],
            blank(),
            heading("COMMANDS:"),
            flag_row("ability", "Get details about a specific ability."),
            flag_row("move", "Get details about a specific move."),
            blank(),
            heading("FLAGS:"),
            flag_row("-h, --help", "Prints the help menu."),
            flag_row("-v, --verbose", "Prints debug logs to stderr."),
            flag_row("    --no-color", "Disables colored output."),
            flag_row("-V, --version", "Prints the version."),
        ],
        UsageTopic::Command(category) => {
            let (command, about, related) = match category {
                Category::Ability => (
                    "ability",
                    "Get details about a specific ability.",
                    "Prints Pokémon that have this ability.",
                ),
                Category::Move => (
                    "move",
                    "Get details about a specific move.",
                    "Prints Pokémon that learn this move.",
                ),
            };
            vec![
                vec![Segment::plain(about)],
                blank(),
                heading("USAGE:"),
                vec![
                    Segment::plain("    poke-cli "),
                    Segment::new(command, names::TITLE),
                    Segment::plain(format!(" <{}-name> [flag]", command)),
                ],
                vec![Segment::plain("    "), Segment::new(HYPHEN_HINT, names::HINT)],
                blank(),
                heading("FLAGS:"),
                flag_row("-p, --pokemon", related),
                flag_row("-h, --help", "Prints the help menu."),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_command_usage_mentions_flags() {
        let out = text(&usage_lines(UsageTopic::Command(Category::Ability)));
        assert!(out.contains("poke-cli ability <ability-name> [flag]"));
        assert!(out.contains("-p, --pokemon"));
        assert!(out.contains(HYPHEN_HINT));
    }

    #[test]
    fn test_main_usage_lists_commands() {
        let out = text(&usage_lines(UsageTopic::Main));
        assert!(out.contains("ability"));
        assert!(out.contains("move"));
        assert!(out.contains("--no-color"));
    }
}

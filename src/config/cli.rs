use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "section-toggler")]
#[command(about = "Load a page description, apply an expand/collapse action and show the result")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "toggler.toml")]
    pub config: String,

    /// Page address, including any query string (defaults to page.address)
    #[arg(short, long)]
    pub url: Option<String>,

    /// JSON file holding remembered state between runs
    #[arg(short, long, default_value = "toggler-memory.json")]
    pub store: String,

    /// Print the resulting state as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Only load the page and show the initial state
    Show,
    /// Flip one section without touching the others
    Toggle { id: String },
    /// Open one section and close the rest
    Select { id: String },
    /// Open every section
    ExpandAll,
    /// Close every section
    CollapseAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_action() {
        let args = CliArgs::parse_from([
            "section-toggler",
            "--url",
            "https://example.org/p?x",
            "select",
            "sec_a",
        ]);
        assert_eq!(args.config, "toggler.toml");
        assert_eq!(args.url.as_deref(), Some("https://example.org/p?x"));
        assert!(matches!(args.action, Some(Action::Select { ref id }) if id == "sec_a"));
    }

    #[test]
    fn test_default_action_is_none() {
        let args = CliArgs::parse_from(["section-toggler", "--json"]);
        assert!(args.json);
        assert!(args.action.is_none());
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let args = CliArgs::parse_from(["section-toggler", "expand-all"]);
        assert!(matches!(args.action, Some(Action::ExpandAll)));
    }
}

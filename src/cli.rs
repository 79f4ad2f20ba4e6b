use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::SearchType;

#[derive(Parser)]
#[command(name = "magnet")]
#[command(about = "Magnet CLI: issues, pages, and search")]
#[command(after_help = "EXAMPLES:
    magnet issues list --search login      Search issues
    magnet issues get abc123               Show an issue as JSON
    magnet issues create --description \"Fix login\"
    magnet pages create --title \"Roadmap\"
    magnet search \"onboarding\" --types page

ENVIRONMENT:
    MAGNET_API_KEY       API key (UUID), required
    MAGNET_API_URL       API base URL (default https://www.magnet.run)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, get, create, or update Magnet issues
    #[command(
        alias = "i",
        after_help = "EXAMPLES:
    magnet issues list --limit 10
    magnet issues get abc123 --preview-only
    magnet issues create --description \"Fix login\" --base-branch develop
    magnet issues update abc123 --markdown \"# Fix login\" --status done"
    )]
    Issues {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// List, get, create, or update Magnet pages
    #[command(
        alias = "p",
        after_help = "EXAMPLES:
    magnet pages list --search roadmap
    magnet pages get def456
    magnet pages create --title \"Roadmap\" --markdown \"# Q3\"
    magnet pages update def456 --markdown \"# Q4\" --skip-sync"
    )]
    Pages {
        #[command(subcommand)]
        action: PageCommands,
    },
    /// Search issues and pages
    #[command(after_help = "EXAMPLES:
    magnet search \"login bug\"
    magnet search onboarding --types issue,page")]
    Search(SearchArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    magnet completions bash > ~/.bash_completion.d/magnet
    magnet completions zsh > ~/.zfunc/_magnet
    magnet completions fish > ~/.config/fish/completions/magnet.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// List issues
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    magnet issues list --search login
    magnet issues list --limit 20 --cursor <pagination.nextCursor>"
    )]
    List(ListArgs),
    /// Get an issue by ID
    #[command(after_help = "EXAMPLES:
    magnet issues get abc123
    magnet issues get abc123 --preview-only")]
    Get(GetArgs),
    /// Create an issue from markdown
    #[command(after_help = "EXAMPLES:
    magnet issues create --description \"Login fails on Safari\"
    magnet issues create --description \"...\" --title \"Safari login\" --base-branch develop")]
    Create(IssueCreateArgs),
    /// Replace an issue's markdown and metadata
    #[command(after_help = "EXAMPLES:
    magnet issues update abc123 --markdown \"# Safari login\"
    magnet issues update abc123 --markdown \"...\" --status in_progress --assignee user_123")]
    Update(IssueUpdateArgs),
}

#[derive(Subcommand)]
pub enum PageCommands {
    /// List pages
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    magnet pages list --search roadmap
    magnet pages list --cursor <pagination.nextCursor>"
    )]
    List(ListArgs),
    /// Get a page by ID
    #[command(after_help = "EXAMPLES:
    magnet pages get def456")]
    Get(GetArgs),
    /// Create a page from markdown
    #[command(after_help = "EXAMPLES:
    magnet pages create --title \"Roadmap\"
    magnet pages create --title \"Roadmap\" --markdown \"# Q3 goals\"")]
    Create(PageCreateArgs),
    /// Replace a page's markdown
    #[command(after_help = "EXAMPLES:
    magnet pages update def456 --markdown \"# Q4 goals\" --title \"Roadmap\"")]
    Update(PageUpdateArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ListArgs {
    /// Search query
    #[arg(long)]
    pub search: Option<String>,

    /// Page size (default from API). Use with --cursor for pagination.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination cursor (use pagination.nextCursor from previous response)
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct GetArgs {
    /// Resource ID
    pub id: String,

    /// Return a truncated markdownPreview instead of the full docContent
    #[arg(long)]
    pub preview_only: bool,
}

#[derive(Args, Debug)]
pub struct IssueCreateArgs {
    /// Issue description (markdown); required
    #[arg(long, short)]
    pub description: String,

    /// Issue title (optional)
    #[arg(long, short)]
    pub title: Option<String>,

    /// Base branch name
    #[arg(long, default_value = "main")]
    pub base_branch: String,

    /// Initial status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct IssueUpdateArgs {
    /// Issue ID
    pub id: String,

    /// New issue body (markdown)
    #[arg(long, short)]
    pub markdown: String,

    /// New title
    #[arg(long, short)]
    pub title: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// Assign to user ID
    #[arg(long)]
    pub assignee: Option<String>,

    /// Do not push the change to open real-time editing sessions
    #[arg(long)]
    pub skip_sync: bool,
}

#[derive(Args, Debug)]
pub struct PageCreateArgs {
    /// Page title; required
    #[arg(long, short)]
    pub title: String,

    /// Page content (markdown); defaults to title if empty
    #[arg(long, short)]
    pub markdown: Option<String>,
}

#[derive(Args, Debug)]
pub struct PageUpdateArgs {
    /// Page ID
    pub id: String,

    /// New page content (markdown)
    #[arg(long, short)]
    pub markdown: String,

    /// New title
    #[arg(long, short)]
    pub title: Option<String>,

    /// Do not push the change to open real-time editing sessions
    #[arg(long)]
    pub skip_sync: bool,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Comma-separated types: issue, page (default: both)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub types: Vec<SearchType>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from(["magnet", "issues", "list", "--cursor", "c1"]).unwrap();
        let Commands::Issues {
            action: IssueCommands::List(args),
        } = cli.command
        else {
            panic!("expected issues list");
        };
        assert_eq!(args.cursor.as_deref(), Some("c1"));
        assert_eq!(args.limit, None);
    }

    #[test]
    fn create_defaults_base_branch() {
        let cli = Cli::try_parse_from(["magnet", "issues", "create", "--description", "x"]).unwrap();
        let Commands::Issues {
            action: IssueCommands::Create(args),
        } = cli.command
        else {
            panic!("expected issues create");
        };
        assert_eq!(args.base_branch, "main");
    }

    #[test]
    fn create_requires_description() {
        assert!(Cli::try_parse_from(["magnet", "issues", "create"]).is_err());
    }

    #[test]
    fn search_types_split_on_commas() {
        let cli = Cli::try_parse_from(["magnet", "search", "q", "--types", "issue,page"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.types, vec![SearchType::Issue, SearchType::Page]);
    }

    #[test]
    fn search_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["magnet", "search", "q", "--types", "user"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["magnet", "-vv", "search", "q"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

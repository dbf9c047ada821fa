use crate::demo::{
    run_letter, run_navigator_audit, run_navigator_walk, run_quiz, run_recommend, LetterArgs,
    QuizArgs, RecommendArgs, WalkArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use court_access::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Court Access Toolkit",
    about = "Serve or run the court accommodation tools from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Recommend accommodations and draft a request letter
    Calculator {
        #[command(subcommand)]
        command: CalculatorCommand,
    },
    /// Walk the accommodation duty decision tree
    Navigator {
        #[command(subcommand)]
        command: NavigatorCommand,
    },
    /// Take the accommodation knowledge quiz
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CalculatorCommand {
    /// List the accommodations matching the selected answers
    Recommend(RecommendArgs),
    /// Compose the plain-text accommodation request letter
    Letter(LetterArgs),
}

#[derive(Subcommand, Debug)]
enum NavigatorCommand {
    /// Follow a sequence of option indices from the first question
    Walk(WalkArgs),
    /// Check the decision tree for dangling, unreachable, or empty nodes
    Audit,
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Answer questions in order using the supplied option indices
    Run(QuizArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculator {
            command: CalculatorCommand::Recommend(args),
        } => run_recommend(args),
        Command::Calculator {
            command: CalculatorCommand::Letter(args),
        } => run_letter(args),
        Command::Navigator {
            command: NavigatorCommand::Walk(args),
        } => run_navigator_walk(args),
        Command::Navigator {
            command: NavigatorCommand::Audit,
        } => run_navigator_audit(),
        Command::Quiz {
            command: QuizCommand::Run(args),
        } => run_quiz(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use court_access::tools::calculator::{Barrier, DisabilityCategory, ProceedingType};

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["court-access-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_calculator_tag_keys() {
        let cli = Cli::try_parse_from([
            "court-access-api",
            "calculator",
            "recommend",
            "--proceeding",
            "child-support",
            "--disability",
            "hearing",
            "--disability",
            "chronic_illness",
            "--barrier",
            "fast_pacing",
            "--json",
        ])
        .expect("parses");

        let Some(Command::Calculator {
            command: CalculatorCommand::Recommend(args),
        }) = cli.command
        else {
            panic!("expected calculator recommend");
        };
        assert_eq!(args.answers.proceeding, ProceedingType::ChildSupport);
        assert_eq!(
            args.answers.disabilities,
            vec![DisabilityCategory::Hearing, DisabilityCategory::ChronicIllness]
        );
        assert_eq!(args.answers.barriers, vec![Barrier::FastPacing]);
        assert!(args.json);
    }

    #[test]
    fn rejects_unknown_tag_keys() {
        let err = Cli::try_parse_from([
            "court-access-api",
            "calculator",
            "recommend",
            "--proceeding",
            "custody",
            "--disability",
            "telepathy",
            "--barrier",
            "fast_pacing",
        ])
        .expect_err("unknown disability rejected");
        assert!(err.to_string().contains("telepathy"));
    }

    #[test]
    fn parses_letter_date_and_navigator_choices() {
        let cli = Cli::try_parse_from([
            "court-access-api",
            "calculator",
            "letter",
            "--proceeding",
            "divorce",
            "--disability",
            "vision",
            "--barrier",
            "written_materials",
            "--date",
            "2025-03-14",
        ])
        .expect("parses");
        let Some(Command::Calculator {
            command: CalculatorCommand::Letter(args),
        }) = cli.command
        else {
            panic!("expected calculator letter");
        };
        assert_eq!(args.date.map(|date| date.to_string()).as_deref(), Some("2025-03-14"));

        let cli = Cli::try_parse_from(["court-access-api", "navigator", "walk", "--choose", "0", "--choose", "2"])
            .expect("parses");
        let Some(Command::Navigator {
            command: NavigatorCommand::Walk(args),
        }) = cli.command
        else {
            panic!("expected navigator walk");
        };
        assert_eq!(args.choose, vec![0, 2]);
    }
}

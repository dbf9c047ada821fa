use chrono::{Local, NaiveDate};
use clap::Args;
use court_access::error::AppError;
use court_access::tools::calculator::router::RecommendationResponse;
use court_access::tools::calculator::{
    compose, AnswerSet, Barrier, DisabilityCategory, LetterFields, ProceedingType,
    RecommendationEngine, RecommendationResult,
};
use court_access::tools::navigator::{DecisionGraph, NavigatorState, Outcome, Step};
use court_access::tools::quiz::{QuestionBank, QuizSession};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnswerArgs {
    /// Proceeding type key (e.g. custody, child_support)
    #[arg(long)]
    pub(crate) proceeding: ProceedingType,
    /// Disability category key; repeat for several
    #[arg(long = "disability", required = true)]
    pub(crate) disabilities: Vec<DisabilityCategory>,
    /// Barrier key; repeat for several
    #[arg(long = "barrier", required = true)]
    pub(crate) barriers: Vec<Barrier>,
}

impl AnswerArgs {
    fn answers(&self) -> Result<AnswerSet, AppError> {
        let answers = AnswerSet::new(
            self.proceeding,
            self.disabilities.iter().copied(),
            self.barriers.iter().copied(),
        );
        answers.ensure_complete()?;
        Ok(answers)
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    /// Print the result as JSON instead of a readable list
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LetterArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    /// Letter date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Write the letter to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct WalkArgs {
    /// Option index to choose at each question, in order
    #[arg(long)]
    pub(crate) choose: Vec<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Option index to answer each question with, in order
    #[arg(long)]
    pub(crate) answer: Vec<usize>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let answers = args.answers.answers()?;
    let result = RecommendationEngine::standard().evaluate(&answers);

    if args.json {
        let body = RecommendationResponse {
            count: result.len(),
            recommendations: result.recommendations,
            answers,
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    render_answers(&answers);
    render_recommendations(&result);
    Ok(())
}

pub(crate) fn run_letter(args: LetterArgs) -> Result<(), AppError> {
    let answers = args.answers.answers()?;
    let result = RecommendationEngine::standard().evaluate(&answers);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let letter = compose(&result, &answers, &LetterFields::dated(date));

    match args.output {
        Some(path) => {
            std::fs::write(&path, letter)?;
            println!(
                "Wrote accommodation request letter ({} accommodations) to {}",
                result.len(),
                path.display()
            );
        }
        None => print!("{letter}"),
    }
    Ok(())
}

pub(crate) fn run_navigator_walk(args: WalkArgs) -> Result<(), AppError> {
    let graph = DecisionGraph::standard();
    let mut state = NavigatorState::new(&graph);

    for choice in args.choose {
        let node = state.current_node(&graph)?;
        println!("\n{}", node.question);
        if let Some(option) = node.options.get(choice) {
            println!("  > {}", option.text);
        }

        match state.advance(&graph, choice)? {
            Step::Moved(_) => {}
            Step::Terminal(outcome) => {
                println!("\nPath: {}", state.path().join(" -> "));
                render_outcome(outcome);
                return Ok(());
            }
        }
    }

    let node = state.current_node(&graph)?;
    println!("\nPath: {}", state.path().join(" -> "));
    println!("\n{}", node.question);
    if let Some(context) = node.context {
        println!("  {context}");
    }
    for (index, option) in node.options.iter().enumerate() {
        println!("  [{index}] {}", option.text);
    }
    Ok(())
}

pub(crate) fn run_navigator_audit() -> Result<(), AppError> {
    let graph = DecisionGraph::standard();
    let audit = graph.audit();

    println!("Decision tree audit: {} nodes", audit.nodes);
    if audit.is_clean() {
        println!("- no defects found");
    }
    for defect in &audit.defects {
        println!("- {}", defect.summary());
    }
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let mut session = QuizSession::for_bank(&bank);

    for answer in args.answer {
        let Some(question) = bank.get(session.current_index()) else {
            break;
        };
        println!("\nQuestion {} of {}", session.current_index() + 1, session.total());
        println!("{}", question.scenario);
        println!("{}", question.prompt);

        if !session.select(question, answer) {
            println!("  option {answer} is not one of the {} choices", question.options.len());
            continue;
        }
        let correct = session.submit(question).unwrap_or(false);
        let chosen = question.options.get(answer).copied().unwrap_or_default();
        println!("  > {chosen}");
        println!("  {}", if correct { "Correct" } else { "Incorrect" });
        println!("  {}", question.explanation);
        println!("  ({})", question.citation);
        session.advance();

        if session.is_complete() {
            break;
        }
    }

    println!(
        "\nScore: {}/{} ({}%)",
        session.score(),
        session.total(),
        session.percentage()
    );
    if session.is_complete() {
        println!("Result: {}", session.score_band().label());
    } else {
        println!(
            "{} questions remaining",
            session.total() - session.current_index()
        );
    }
    Ok(())
}

fn render_answers(answers: &AnswerSet) {
    println!("Proceeding: {}", answers.category.label());
    println!("Disabilities:");
    for disability in &answers.disabilities {
        println!("- {}", disability.label());
    }
    println!("Barriers:");
    for barrier in &answers.barriers {
        println!("- {}", barrier.label());
    }
}

fn render_recommendations(result: &RecommendationResult) {
    println!("\nRecommended accommodations ({})", result.len());
    if result.is_empty() {
        println!("- none matched; describe your request to the ADA coordinator directly");
    }
    for (index, matched) in result.recommendations.iter().enumerate() {
        let recommendation = &matched.recommendation;
        println!("{}. {}", index + 1, recommendation.title);
        println!("   {}", recommendation.description);
        println!("   Legal basis: {} ({})", recommendation.legal_basis, recommendation.citation);
        println!("   Why: {}", recommendation.rationale);
    }
}

fn render_outcome(outcome: &Outcome) {
    println!("\n[{}] {}", outcome.severity.label(), outcome.title);
    println!("{}", outcome.description);
    println!("Legal basis: {}", outcome.legal_basis);
    println!("Next steps:");
    for step in &outcome.next_steps {
        println!("- {step}");
    }
}

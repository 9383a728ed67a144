//! Pathwise: Career Questionnaire CLI
//!
//! Walks the user through one of two questionnaires and prints the roadmap
//! or career match the backend produces.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use pathwise::cli::{
    apply_answers, confirm_retry, load_answer_file, run_batch, run_wizard, select_flow, Cli,
    WizardResult,
};
use pathwise::engine::{Question, WizardState};
use pathwise::flows::{
    know, DiscoveryEvaluator, Flow, ResultPayload, RoadmapEvaluator, TestCatalog,
};
use pathwise::remote::{Backend, Evaluator, QuestionSource, StaticQuestions};
use pathwise::report::{display_result, export_run, AnswerSummary};
use pathwise::utils::{
    create_spinner, finish_with_success, finish_with_warning, init_tracing, log_destination,
    print_banner, print_completion, print_config, print_info, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(
        &cli.log_level,
        &log_destination(!cli.is_batch(), cli.log_file.as_deref()),
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // Pick the flow - from the subcommand, or the landing menu
    let flow = match cli.flow() {
        Some(flow) => flow,
        None if cli.is_batch() => anyhow::bail!(
            "An answer file needs a flow. Use `pathwise know` or `pathwise discover`."
        ),
        None => match select_flow()? {
            Some(flow) => flow,
            None => {
                println!("Cancelled by user.");
                return Ok(());
            }
        },
    };

    if !cli.json {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(flow, &cli.backend_url, cli.timeout_secs);
    }

    let config = cli.backend_config();
    let backend = Backend::from_config(&config)?;

    let questions = load_questions(flow, &backend, &config.tests_path, &runtime, !cli.is_batch())?;
    let questions: Vec<Question> = if cli.strict {
        questions.into_iter().map(Question::required).collect()
    } else {
        questions
    };
    let state = WizardState::<ResultPayload>::initialize(questions)?;

    let finished = match flow {
        Flow::Know => {
            let evaluator = RoadmapEvaluator::new(backend, config.roadmap_path.clone());
            run_flow(&cli, flow, state, evaluator, &runtime)?
        }
        Flow::Discover => {
            let evaluator = DiscoveryEvaluator::new(backend, config.evaluate_path.clone());
            run_flow(&cli, flow, state, evaluator, &runtime)?
        }
    };

    let Some(finished) = finished else {
        println!("Cancelled by user.");
        return Ok(());
    };
    let result = finished
        .result()
        .ok_or_else(|| anyhow::anyhow!("The wizard finished without a result"))?;

    if cli.json {
        let value = result.to_value().context("Failed to serialize result")?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        display_result(result);
    }

    if let Some(path) = &cli.export {
        export_run(finished.answers(), result, &cli.backend_url, path)?;
        if !cli.json {
            print_success(&format!("Exported to {}", path.display()));
        }
    }

    if !cli.json {
        print_completion();
    }

    Ok(())
}

/// Fetch the flow's questions, offering a retry when interactive
fn load_questions(
    flow: Flow,
    backend: &Backend,
    tests_path: &str,
    runtime: &Runtime,
    interactive: bool,
) -> Result<Vec<Question>> {
    let source: Box<dyn QuestionSource> = match flow {
        Flow::Know => Box::new(StaticQuestions(know::questions())),
        Flow::Discover => Box::new(TestCatalog::new(backend.clone(), tests_path)),
    };

    loop {
        let spinner = create_spinner("Loading questions...");
        match runtime.block_on(source.questions()) {
            Ok(questions) => {
                finish_with_success(&spinner, &format!("Loaded {} questions", questions.len()));
                return Ok(questions);
            }
            Err(err) => {
                finish_with_warning(&spinner, "Could not load questions");
                if !interactive || !confirm_retry("load the tests", &err.to_string())? {
                    return Err(err).context("Failed to load questions");
                }
            }
        }
    }
}

/// Answer the questions from a file or the TUI, then evaluate.
///
/// Returns `None` when the user quits the wizard.
fn run_flow<E>(
    cli: &Cli,
    flow: Flow,
    state: WizardState<ResultPayload>,
    evaluator: E,
    runtime: &Runtime,
) -> Result<Option<WizardState<ResultPayload>>>
where
    E: Evaluator<Output = ResultPayload> + 'static,
{
    let Some(path) = &cli.answers else {
        return match run_wizard(flow, state, Arc::new(evaluator), runtime.handle().clone())? {
            WizardResult::Completed(state) => {
                if !cli.json {
                    let summary = AnswerSummary::new(state.questions(), state.answers());
                    print_info(&format!(
                        "Answered {} of {} questions",
                        summary.answered(),
                        state.question_count()
                    ));
                }
                Ok(Some(*state))
            }
            WizardResult::Quit => Ok(None),
        };
    };

    let answers = load_answer_file(path)?;
    let state = apply_answers(&state, &answers)?;
    if !cli.json {
        AnswerSummary::new(state.questions(), state.answers()).display();
    }

    let spinner = create_spinner(flow.busy_label());
    match runtime.block_on(run_batch(&state, &evaluator)) {
        Ok(done) => {
            finish_with_success(&spinner, "Result received");
            Ok(Some(done))
        }
        Err(err) => {
            finish_with_warning(&spinner, "Evaluation failed");
            Err(err.into())
        }
    }
}

mod highlighter;
mod lexer;

use clap::Parser;
use mical::{
    Engine, EngineOptions, EvaluatorOptions, InputGuard, Outcome, ParserOptions,
    RecordingListener, render_error,
};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

use crate::highlighter::{Highlighter, ParenValidator};

/// Evaluated when no expression is given.
const DEFAULT_EXPRESSION: &str = "2 * (3 + 4)";

const HISTORY_SIZE: usize = 1000;

/// mical - strict integer arithmetic
#[derive(Parser, Debug)]
#[command(name = "mical")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Print the parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print tree walker events after a successful evaluation
    #[arg(long)]
    walk: bool,

    /// Also render failures as annotated source reports on stderr
    #[arg(long)]
    explain: bool,

    /// Exit with a non-zero code when evaluation fails
    #[arg(long)]
    exit_code: bool,

    /// Disable the eval/exec deny list
    #[arg(long)]
    no_guard: bool,

    /// Maximum parenthesis nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Read expressions interactively (or line by line when stdin is a pipe)
    #[arg(short, long)]
    interactive: bool,

    /// Expression to evaluate
    expression: Option<String>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions::default();
        if self.no_guard {
            options.guard = InputGuard::disabled();
        }
        if let Some(depth) = self.max_depth {
            options.parser = ParserOptions { max_depth: depth };
            // One level for the top expression, so the evaluator accepts
            // everything the parser does.
            options.evaluator = EvaluatorOptions {
                max_depth: depth.saturating_add(1),
            };
        }
        options
    }
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline(guard: InputGuard) -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new(guard)))
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(edit_mode);

    if let Some(dir) = dirs::data_local_dir().map(|dir| dir.join("mical")) {
        let history = std::fs::create_dir_all(&dir)
            .map_err(|e| e.to_string())
            .and_then(|_| {
                FileBackedHistory::with_file(HISTORY_SIZE, dir.join("history.txt"))
                    .map_err(|e| e.to_string())
            });
        match history {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(error) => tracing::warn!(%error, "history disabled"),
        }
    }

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

/// Print an outcome the way the reference tool does.
fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Ok(value) => println!("Resultado optimizado: {}", value),
        Outcome::Diagnostic(diagnostic) => println!("Error: {}", diagnostic),
        Outcome::SecurityViolation(violation) => println!("Error de seguridad: {}", violation),
        Outcome::NoResult { message } => {
            println!("Error de evaluación: {}", message);
            println!("Resultado optimizado: None");
        }
    }
}

fn interpret_input(engine: &Engine, input: &str, args: &Args) -> Outcome {
    tracing::debug!(input, "interpreting");

    if args.debug_parse {
        if let Ok(tree) = engine.parse(input) {
            println!("=== Parse Tree ===");
            println!("{:#?}", tree);
            println!();
        }
    }

    let mut recorder = RecordingListener::new();
    let result = if args.walk {
        engine.evaluate_with_walker(input, &mut recorder)
    } else {
        engine.evaluate(input)
    };
    let outcome = Outcome::from(result.clone());

    print_outcome(&outcome);

    if args.walk && !recorder.events.is_empty() {
        println!("=== Walk ===");
        for event in &recorder.events {
            println!("{}", event.describe(input));
        }
    }

    if let (true, Err(e)) = (args.explain, &result) {
        render_error(input, e);
    }

    outcome
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(args.engine_options());

    if !args.interactive {
        let expr = args.expression.as_deref().unwrap_or(DEFAULT_EXPRESSION);
        let outcome = interpret_input(&engine, expr, &args);
        if args.exit_code && !outcome.is_ok() {
            std::process::exit(outcome.exit_code());
        }
        return Ok(());
    }

    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(engine.options().guard.clone());

        println!("mical REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if !buffer.trim().is_empty() {
                        interpret_input(&engine, &buffer, &args);
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    }

    // Pipe/stdin mode
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut first_failure = None;

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = interpret_input(&engine, &line, &args);
        if !outcome.is_ok() && first_failure.is_none() {
            first_failure = Some(outcome.exit_code());
        }
    }

    if let (true, Some(code)) = (args.exit_code, first_failure) {
        std::process::exit(code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["mical"]).unwrap();
        assert_eq!(args.expression, None);
        assert_eq!(args.engine_options(), EngineOptions::default());
    }

    #[test]
    fn test_args_build_engine_options() {
        let args =
            Args::try_parse_from(["mical", "--no-guard", "--max-depth", "3", "eval"]).unwrap();
        let options = args.engine_options();

        assert!(options.guard.is_disabled());
        assert_eq!(options.parser.max_depth, 3);
        assert_eq!(options.evaluator.max_depth, 4);
        assert_eq!(args.expression.as_deref(), Some("eval"));
    }

    #[test]
    fn test_interpret_input_returns_the_printed_outcome() {
        let args = Args::try_parse_from(["mical", "--walk", "--explain"]).unwrap();
        let engine = Engine::new(args.engine_options());

        assert_eq!(interpret_input(&engine, "2 * (3 + 4)", &args), Outcome::Ok(14));
        assert_eq!(
            interpret_input(&engine, "9223372036854775807 + 1", &args),
            engine.run("9223372036854775807 + 1")
        );
        assert!(matches!(
            interpret_input(&engine, "eval(1)", &args),
            Outcome::SecurityViolation(_)
        ));
    }

    #[test]
    fn test_max_depth_applies_to_both_stages() {
        let args = Args::try_parse_from(["mical", "--max-depth", "2"]).unwrap();
        let engine = Engine::new(args.engine_options());

        assert_eq!(engine.run("((1))"), Outcome::Ok(1));
        assert!(matches!(engine.run("(((1)))"), Outcome::Diagnostic(_)));
    }
}

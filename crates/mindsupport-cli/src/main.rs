use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};

use mindsupport_chat::config::{ChatConfig, load_config, load_or_default};
use mindsupport_chat::conversation::Conversation;
use mindsupport_chat::error::ChatError;
use mindsupport_chat::responder::Responder;
use mindsupport_instruments::instruments::RECALL_PERIOD;
use mindsupport_instruments::report::{render_report, report_filename};
use mindsupport_instruments::scoring::{Answer, ScoreOutcome, TestResult};
use mindsupport_instruments::session::{ScreeningSession, Step};
use mindsupport_instruments::{all_instruments, require_instrument};

#[derive(Parser)]
#[command(author, version, about = "Mental health screening and support companion", long_about = None)]
struct Cli {
    /// Chat config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available screening instruments
    Instruments {
        /// Also print questions and severity ranges
        #[arg(long)]
        detail: bool,
    },
    /// Take a screening, interactively or from a list of answers
    Screen {
        /// Instrument ID; omit for the complete PHQ-9 + GAD-7 screening
        #[arg(long)]
        instrument: Option<String>,
        /// Comma-separated point values, e.g. 1,0,2,3,1,0,0,1,2
        #[arg(long, requires = "instrument")]
        answers: Option<String>,
        /// Write a plain-text report to this file (or directory)
        #[arg(long, value_name = "PATH", conflicts_with = "answers")]
        export: Option<PathBuf>,
    },
    /// Check text for crisis keywords
    Check {
        /// Text to check
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Chat with the scripted support companion
    Chat,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Instruments { detail } => list_instruments(detail),
        Commands::Screen {
            instrument,
            answers,
            export,
        } => match answers {
            Some(answers) => {
                let id = instrument.ok_or_else(|| eyre::eyre!("--answers requires --instrument"))?;
                score_answers(&id, &answers)
            }
            None => run_screening(instrument.as_deref(), export.as_deref()),
        },
        Commands::Check { text } => {
            let config = chat_config(cli.config.as_deref())?;
            let responder = Responder::from_config(&config);
            let text = text.join(" ");
            match responder.detector().first_match(&text) {
                Some(keyword) => {
                    println!("crisis keywords detected ({keyword})");
                    println!("If you are in danger, call {} or 911.", responder.helpline());
                }
                None => println!("no crisis keywords detected"),
            }
            Ok(())
        }
        Commands::Chat => {
            let config = chat_config(cli.config.as_deref())?;
            run_chat(Responder::from_config(&config))
        }
    }
}

fn chat_config(explicit: Option<&Path>) -> Result<ChatConfig> {
    if let Some(path) = explicit {
        return load_config(path).wrap_err("loading chat config");
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    let path = base.join("mindsupport").join("config.json");
    load_or_default(&path).wrap_err_with(|| format!("loading {}", path.display()))
}

fn list_instruments(detail: bool) -> Result<()> {
    for instrument in all_instruments() {
        println!(
            "{:<6} {} ({}, {} questions, max score {})",
            instrument.id(),
            instrument.name(),
            instrument.heading(),
            instrument.questions().len(),
            instrument.max_score(),
        );
        if detail {
            for question in instrument.questions() {
                println!("    {}. {}", question.id, question.prompt);
            }
            for range in instrument.ranges() {
                println!("    {:>2}-{:<2} {}", range.min, range.max, range.level);
            }
        }
    }
    Ok(())
}

fn parse_answers(csv: &str) -> Result<Vec<u32>> {
    csv.split(',')
        .map(|v| {
            v.trim()
                .parse::<u32>()
                .wrap_err_with(|| format!("invalid answer value '{}'", v.trim()))
        })
        .collect()
}

fn score_answers(id: &str, csv: &str) -> Result<()> {
    let instrument = require_instrument(id)?;
    let answers = Answer::sequence(&parse_answers(csv)?);
    match instrument.score(&answers)? {
        ScoreOutcome::Complete(result) => print_result(instrument.name(), instrument.max_score(), &result),
        ScoreOutcome::Incomplete { answered, expected } => {
            println!("{}: incomplete ({answered} of {expected} questions answered)", instrument.name());
        }
    }
    Ok(())
}

fn print_result(name: &str, max_score: u32, result: &TestResult) {
    println!("{name}: {}/{max_score} {}", result.score, result.level);
    println!("  {}", result.description);
}

fn run_screening(instrument: Option<&str>, export: Option<&Path>) -> Result<()> {
    let mut session = match instrument {
        Some(id) => ScreeningSession::for_id(id)?,
        None => ScreeningSession::complete(),
    };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{RECALL_PERIOD}");
    println!("Answer 0-3, 'b' to go back, 'q' to quit.\n");

    while let (Some(question), Some(progress)) = (session.current_question(), session.progress()) {
        println!("[{}/{}] {}", progress.question_number, progress.total, question.prompt);
        for option in &question.options {
            println!("    {} = {}", option.value, option.label);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim() {
            "q" => return Ok(()),
            "b" => {
                if let Some(previous) = session.back() {
                    println!("(previous answer was {previous})");
                }
            }
            input => {
                let Ok(value) = input.parse::<u32>() else {
                    println!("please enter a number");
                    continue;
                };
                match session.record(value) {
                    Ok(Step::NextQuestion) => {}
                    Ok(Step::NextInstrument(_)) => println!("\nNext questionnaire.\n"),
                    Ok(Step::Finished(_)) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    println!();
    for done in session.results() {
        print_result(&done.instrument_name, done.max_score, &done.result);
    }

    if let Some(path) = export {
        let today = jiff::Zoned::now().date();
        let record = session.to_record(today);
        let path = if path.is_dir() {
            path.join(report_filename(today))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, render_report(&record))
            .wrap_err_with(|| format!("writing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "screening report written");
        println!("\nReport written to {}", path.display());
    }
    Ok(())
}

fn run_chat(responder: Responder) -> Result<()> {
    let mut conversation = Conversation::new(responder);
    if let Some(welcome) = conversation.history().last() {
        println!("bot> {}", welcome.content);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "/quit" => break,
            "/clear" => {
                conversation.clear();
                println!("(conversation cleared)");
                continue;
            }
            "/dismiss" => {
                conversation.dismiss_alert();
                continue;
            }
            _ => {}
        }

        match conversation.send(&line) {
            Ok(reply) => println!("bot> {}", reply.content),
            Err(ChatError::EmptyMessage) => continue,
            Err(e) => return Err(e.into()),
        }
        if conversation.crisis_alert() {
            println!(
                "!! Crisis detected. Please get immediate help if you're in danger: call {} or 911. (/dismiss to hide)",
                conversation.responder().helpline(),
            );
        }
    }
    Ok(())
}

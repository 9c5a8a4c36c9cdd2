use std::path::PathBuf;

use clap::{Parser, Subcommand};
use isoprompt::domain::{
    AspectRatio, InputMode, MODEL_OPTIONS, PromptMode, STYLE_OPTIONS, clamp_section_count,
};
use isoprompt::services::{load_model, save_model};
use isoprompt::{AppError, ExtractOutcome, PromptModel, compose};

#[derive(Parser)]
#[command(name = "isoprompt")]
#[command(version)]
#[command(
    about = "Assemble symbolic isometric infographic prompts, with AI-assisted structure extraction",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the prompt from a model file (seeded defaults when omitted)
    #[clap(visible_alias = "c")]
    Compose {
        /// Model file to read
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Copy the rendered prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Ask the AI to derive structure, then render the prompt
    #[clap(visible_alias = "x")]
    Extract {
        /// Topic to research (topic input mode)
        #[arg(short, long, conflicts_with = "text_file")]
        topic: Option<String>,
        /// File with pasted text to analyze (text input mode)
        #[arg(long)]
        text_file: Option<PathBuf>,
        /// Prompt mode: evolution or breakdown
        #[arg(short, long)]
        mode: Option<String>,
        /// Number of sections to request (1-6)
        #[arg(short, long)]
        sections: Option<u8>,
        /// Hosted model id to delegate to
        #[arg(long)]
        llm: Option<String>,
        /// Model file to start from (seeded defaults when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Write the updated model back to this path
        #[arg(long)]
        save: Option<PathBuf>,
        /// Copy the rendered prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Interactive form: pick mode, topic, style, layout, and ratio
    #[clap(visible_alias = "w")]
    Wizard {
        /// Write the resulting model to this path
        #[arg(long)]
        save: Option<PathBuf>,
        /// Copy the rendered prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Write a seeded default model file for hand editing
    Init {
        /// Target path
        #[arg(default_value = "isoprompt.toml")]
        path: PathBuf,
    },
    /// List the visual style catalog
    Styles,
    /// List the supported aspect ratios
    Ratios,
    /// List the hosted models available for extraction
    Llms,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compose { file, copy } => run_compose(file, copy),
        Commands::Extract { topic, text_file, mode, sections, llm, file, save, copy } => {
            run_extract(topic, text_file, mode, sections, llm, file, save, copy)
        }
        Commands::Wizard { save, copy } => run_wizard(save, copy),
        Commands::Init { path } => run_init(path),
        Commands::Styles => {
            for style in &STYLE_OPTIONS {
                println!("{:<12} {}", style.id, style.label);
            }
            Ok(())
        }
        Commands::Ratios => {
            for ratio in AspectRatio::ALL {
                println!("{:<6} {}", ratio.token(), ratio.label());
            }
            Ok(())
        }
        Commands::Llms => {
            for model in &MODEL_OPTIONS {
                println!("{:<40} {} ({})", model.id, model.name, model.provider);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_compose(file: Option<PathBuf>, copy: bool) -> Result<(), AppError> {
    let (_, prompt) = isoprompt::compose_from_file(file.as_deref())?;
    println!("{prompt}");
    if copy {
        isoprompt::copy_to_clipboard(&prompt)?;
        eprintln!("Copied to clipboard");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_extract(
    topic: Option<String>,
    text_file: Option<PathBuf>,
    mode: Option<String>,
    sections: Option<u8>,
    llm: Option<String>,
    file: Option<PathBuf>,
    save: Option<PathBuf>,
    copy: bool,
) -> Result<(), AppError> {
    let mut model = match file.as_deref() {
        Some(path) => load_model(path)?,
        None => PromptModel::default(),
    };

    if let Some(mode) = mode.as_deref() {
        model.switch_mode(PromptMode::parse(mode)?);
    }
    if let Some(topic) = topic {
        model.input_mode = InputMode::Topic;
        model.topic = topic;
    }
    if let Some(path) = text_file.as_deref() {
        model.input_mode = InputMode::Text;
        model.source_text = std::fs::read_to_string(path)?;
    }
    if let Some(count) = sections {
        model.section_count = clamp_section_count(count);
    }

    match isoprompt::extract(&mut model, llm.as_deref())? {
        ExtractOutcome::Applied => {}
        ExtractOutcome::SkippedEmptyInput => {
            // Silent no-op per the extraction contract: missing input blocks
            // the action without a user-visible message.
            return Ok(());
        }
        ExtractOutcome::Busy => return Ok(()),
    }

    let prompt = compose(&model);
    println!("{prompt}");

    if let Some(path) = save.as_deref() {
        save_model(path, &model)?;
        eprintln!("Saved model to {}", path.display());
    }
    if copy {
        isoprompt::copy_to_clipboard(&prompt)?;
        eprintln!("Copied to clipboard");
    }
    Ok(())
}

fn run_wizard(save: Option<PathBuf>, copy: bool) -> Result<(), AppError> {
    let outcome = isoprompt::app::run_wizard()?;
    let mut model = outcome.model;

    if let Some(llm) = outcome.extract_with.as_deref() {
        match isoprompt::extract(&mut model, Some(llm))? {
            ExtractOutcome::Applied => {}
            ExtractOutcome::SkippedEmptyInput | ExtractOutcome::Busy => {}
        }
    }

    let prompt = compose(&model);
    println!("{prompt}");

    if let Some(path) = save.as_deref() {
        save_model(path, &model)?;
        eprintln!("Saved model to {}", path.display());
    }
    if copy {
        isoprompt::copy_to_clipboard(&prompt)?;
        eprintln!("Copied to clipboard");
    }
    Ok(())
}

fn run_init(path: PathBuf) -> Result<(), AppError> {
    isoprompt::init_model_file(&path)?;
    println!("Wrote default model to {}", path.display());
    Ok(())
}

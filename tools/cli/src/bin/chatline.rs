use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chat_timeline::{
    CompositionMetadata, FrameTrace, FrameView, Script, ScriptRaw, Timeline, TimelineConfig,
    SCRIPT_SCHEMA_VERSION, TRACE_FORMAT_VERSION,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Chat timeline compiler CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Script JSON file.
    #[arg(required_unless_present = "demo")]
    script: Option<PathBuf>,
    /// Use the built-in demo conversation instead of a file.
    #[arg(long, conflicts_with = "script")]
    demo: bool,
    /// Timeline configuration TOML.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a script JSON file.
    Validate(Input),
    /// Compile a script into a frame timeline (JSON).
    Compile {
        #[command(flatten)]
        input: Input,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print what is on screen at a frame.
    Sample {
        #[command(flatten)]
        input: Input,
        #[arg(long, allow_negative_numbers = true)]
        frame: i64,
    },
    /// Write every view change across the timeline as YAML.
    Trace {
        #[command(flatten)]
        input: Input,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print render metadata (fps, canvas, duration in frames).
    Metadata(Input),
    /// Print the JSON Schema for script files.
    Schema {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct TraceEnvelope {
    trace_format_version: u16,
    script_schema_version: String,
    fps: u32,
    total_duration_frames: u64,
    trace: FrameTrace,
}

#[derive(Serialize)]
struct SampleReport {
    frame: i64,
    view: FrameView,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Validate(input) => validate_script(&input),
        Command::Compile { input, output } => compile_script(&input, output.as_deref()),
        Command::Sample { input, frame } => sample_frame(&input, frame),
        Command::Trace { input, output } => trace_script(&input, output.as_deref()),
        Command::Metadata(input) => print_metadata(&input),
        Command::Schema { output } => write_schema(output.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(input: &Input) -> Result<TimelineConfig> {
    match &input.config {
        Some(path) => TimelineConfig::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(TimelineConfig::default()),
    }
}

fn load_script(input: &Input) -> Result<Script> {
    if input.demo {
        return Ok(ScriptRaw::demo().validate()?);
    }
    let path = input
        .script
        .as_deref()
        .context("no script given; pass a path or --demo")?;
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let script = ScriptRaw::from_json(&raw)
        .context("parse script")?
        .validate()
        .context("validate script")?;
    debug!(
        messages = script.messages().len(),
        self_participant = script.self_participant(),
        "script loaded"
    );
    Ok(script)
}

fn load_timeline(input: &Input) -> Result<(Timeline, TimelineConfig)> {
    let config = load_config(input)?;
    let script = load_script(input)?;
    let timeline = Timeline::compile_with(&script, &config).context("compile timeline")?;
    Ok((timeline, config))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn validate_script(input: &Input) -> Result<()> {
    let script = load_script(input)?;
    println!(
        "ok: {} participants, {} messages, self = {}",
        script.participants().len(),
        script.messages().len(),
        script.self_participant()
    );
    Ok(())
}

fn compile_script(input: &Input, output: Option<&Path>) -> Result<()> {
    let (timeline, _) = load_timeline(input)?;
    let json = timeline.to_json()?;
    write_or_print(output, &json)
}

fn sample_frame(input: &Input, frame: i64) -> Result<()> {
    let (timeline, _) = load_timeline(input)?;
    let report = SampleReport {
        frame,
        view: FrameView::from_sample(&timeline.sample(frame)),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn trace_script(input: &Input, output: Option<&Path>) -> Result<()> {
    let (timeline, _) = load_timeline(input)?;
    let envelope = TraceEnvelope {
        trace_format_version: TRACE_FORMAT_VERSION,
        script_schema_version: SCRIPT_SCHEMA_VERSION.to_string(),
        fps: timeline.fps(),
        total_duration_frames: timeline.total_duration_frames(),
        trace: FrameTrace::transitions(&timeline),
    };
    let yaml = serde_yaml::to_string(&envelope)?;
    write_or_print(output, &yaml)
}

fn print_metadata(input: &Input) -> Result<()> {
    let (timeline, config) = load_timeline(input)?;
    let metadata = CompositionMetadata::for_timeline(&timeline, &config.composition);
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}

fn write_schema(output: Option<&Path>) -> Result<()> {
    let schema = ScriptRaw::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;
    write_or_print(output, &json)
}

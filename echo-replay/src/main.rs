//! Replays a scripted session against the client engine and prints what
//! the client would send back to the server.

mod script;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use echo_client::{ClientEngine, PlatformQuirks};
use simplelog::{Config, LevelFilter, WriteLogger};
use webdom::ROOT_ID;

use crate::script::{Script, Step};

#[derive(Parser, Debug)]
#[command(about = "Replay server messages and DOM events through the client engine")]
struct Cli {
    /// Replay script (JSON).
    script: PathBuf,
    /// Browser quirks to emulate. Overrides the script's config.
    #[arg(long, value_enum)]
    quirks: Option<QuirksPreset>,
    /// Write engine logs to this file.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Log at trace level instead of debug.
    #[arg(short, long)]
    verbose: bool,
    /// Print the document tree after the last step.
    #[arg(long)]
    dump: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuirksPreset {
    Standard,
    Gecko,
    Trident,
    None,
}

impl From<QuirksPreset> for PlatformQuirks {
    fn from(preset: QuirksPreset) -> Self {
        match preset {
            QuirksPreset::Standard => PlatformQuirks::standard(),
            QuirksPreset::Gecko => PlatformQuirks::gecko(),
            QuirksPreset::Trident => PlatformQuirks::trident(),
            QuirksPreset::None => PlatformQuirks::none(),
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log else {
        return Ok(());
    };
    let level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    let log_file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("initializing logger")?;
    Ok(())
}

fn flush(engine: &mut ClientEngine) -> Result<()> {
    let message = engine.take_outgoing();
    if message.connection_requested() {
        println!("# connection requested");
    }
    if !message.is_empty() {
        println!("{}", serde_json::to_string_pretty(&message)?);
    }
    Ok(())
}

fn replay(engine: &mut ClientEngine, script: &Script) -> Result<()> {
    for node in &script.fixture {
        engine.document_mut().append(ROOT_ID, node.to_element())?;
    }

    for (number, step) in script.steps.iter().enumerate() {
        log::debug!("step {}", number);
        match step {
            Step::Server(message) => engine
                .process(message)
                .with_context(|| format!("step {number}: server message"))?,
            Step::Event(event) => {
                let result = engine.dispatch(event.clone());
                println!(
                    "# {:?} on {} -> {:?}",
                    event.kind,
                    event.target.as_deref().unwrap_or("window"),
                    result
                );
            }
            Step::Extent { id, width, height } => engine
                .document_mut()
                .set_extent(id, *width, *height)
                .with_context(|| format!("step {number}: extent"))?,
            Step::Choose {
                select,
                index,
                extend,
            } => engine
                .document_mut()
                .choose_option(select, *index, *extend)
                .with_context(|| format!("step {number}: choose"))?,
            Step::Flush => flush(engine)?,
        }
    }
    flush(engine)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading {}", cli.script.display()))?;
    let script: Script = serde_json::from_str(&source)
        .with_context(|| format!("parsing {}", cli.script.display()))?;

    let mut config = script.config.clone().unwrap_or_default();
    if let Some(preset) = cli.quirks {
        config = config.with_quirks(preset.into());
    }
    let mut engine = ClientEngine::new(config);

    let result = replay(&mut engine, &script);
    if cli.dump {
        print!("{}", engine.document().dump(ROOT_ID));
    }
    result
}

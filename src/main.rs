use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use step_recorder::export::{self, build_prompt, ChatCompletionRequest, PromptKind};
use step_recorder::recording::ChannelSink;
use step_recorder::{
    generate_locators, Config, DomEvent, EventKind, ExportFormat, PageSnapshot, RecordingSession,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "step-recorder")]
#[command(about = "Generate locators and replay recorded interactions against HTML pages")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the locators for one element
    Locate {
        /// HTML file to read
        #[arg(long)]
        html: PathBuf,

        /// CSS selector picking the element
        #[arg(long)]
        selector: String,
    },

    /// List every interactive element with its locators
    Scan {
        #[arg(long)]
        html: PathBuf,
    },

    /// Record a list of events against a page and export the steps
    Replay {
        #[arg(long)]
        html: PathBuf,

        /// JSON array of {"event", "selector", "value"?, "timestamp"?}
        #[arg(long)]
        events: PathBuf,

        /// csv, txt, json or script (defaults to the config value)
        #[arg(long)]
        format: Option<String>,

        /// Emit an LLM chat-completion request instead of an export
        #[arg(long, value_enum)]
        prompt: Option<PromptArg>,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PromptArg {
    Manual,
    Script,
}

impl From<PromptArg> for PromptKind {
    fn from(arg: PromptArg) -> Self {
        match arg {
            PromptArg::Manual => PromptKind::ManualTestCases,
            PromptArg::Script => PromptKind::AutomationScript,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReplayEvent {
    event: EventKind,
    selector: String,
    value: Option<String>,
    timestamp: Option<i64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Locate { html, selector } => {
            let page = load_page(&html, &Config::default())?;
            let element = page.capture(&selector)?;
            let locators = generate_locators(&element);
            println!("{}", serde_json::to_string_pretty(&locators)?);
        }
        Commands::Scan { html } => {
            let page = load_page(&html, &Config::default())?;
            let state = page.scan()?;
            info!(elements = state.elements.len(), "scan complete");
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Commands::Replay {
            html,
            events,
            format,
            prompt,
            output,
            config,
        } => {
            let config = match config {
                Some(path) => Config::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => Config::default(),
            };
            let format = match format {
                Some(name) => name.parse::<ExportFormat>()?,
                None => config.export.format,
            };

            let rendered = replay(&html, &events, &config, format, prompt.map(Into::into)).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "export written");
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

fn load_page(path: &Path, config: &Config) -> anyhow::Result<PageSnapshot> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("reading HTML page {}", path.display()))?;
    Ok(PageSnapshot::parse_with_config(&html, &config.capture))
}

async fn replay(
    html: &Path,
    events: &Path,
    config: &Config,
    format: ExportFormat,
    prompt: Option<PromptKind>,
) -> anyhow::Result<String> {
    let page = load_page(html, config)?;
    let raw = std::fs::read_to_string(events)
        .with_context(|| format!("reading events {}", events.display()))?;
    let events: Vec<ReplayEvent> = serde_json::from_str(&raw).context("parsing events")?;

    let (sink, mut receiver) = ChannelSink::channel();
    let forwarder = tokio::spawn(async move {
        let mut delivered = 0usize;
        while let Some(step) = receiver.recv().await {
            debug!(index = step.index, css = %step.locators.css, "step delivered");
            delivered += 1;
        }
        delivered
    });

    let mut session = RecordingSession::new(config.capture.clone(), Arc::new(sink));
    session.start()?;
    for event in events {
        let element = match page.capture(&event.selector) {
            Ok(element) => element,
            Err(e) => {
                warn!(selector = %event.selector, error = %e, "skipping event");
                continue;
            }
        };
        let mut dom_event = DomEvent::new(event.event, element);
        if let Some(value) = event.value {
            dom_event = dom_event.with_value(value);
        }
        if let Some(timestamp) = event.timestamp {
            dom_event = dom_event.at(timestamp);
        }
        session.record(dom_event).await?;
    }
    let steps = session.stop().await?;
    drop(session);

    let delivered = forwarder.await.context("step forwarder panicked")?;
    info!(steps = steps.len(), delivered, "replay finished");

    match prompt {
        Some(kind) => {
            let request = ChatCompletionRequest::new(&config.prompt, build_prompt(kind, &steps));
            Ok(serde_json::to_string_pretty(&request)?)
        }
        None => Ok(export::export(&steps, format, config)?),
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use serde::{Deserialize, Serialize};
use slide_transformer::bus::BusEvent;
use slide_transformer::config::TransformerConfig;
use slide_transformer::element::ElementId;
use slide_transformer::engine::{Effect, Transformer, TransformerCore};
use slide_transformer::error::TransformerError;
use slide_transformer::event::{
    DragEndEvent, DragEvent, ResizeEndEvent, ResizeEvent, ResizeStartEvent, RotateEndEvent, RotateEvent,
    RoundEndEvent, RoundEvent, TransformerAction,
};
use slide_transformer::selection::EditorSnapshot;
use slide_transformer::services::{ActionDispatcher, Services, StaticLayout, TextSelectionState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "slide-transformer", about = "Replay a gesture script through the slide transformer")]
struct Cli {
    /// JSON script with a layout, an initial snapshot, and steps.
    #[arg(env = "TRANSFORMER_SCRIPT")]
    script: PathBuf,

    /// Print the handle configuration after every step.
    #[arg(long)]
    handles: bool,
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    layout: StaticLayout,
    snapshot: EditorSnapshot,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum Step {
    Update { snapshot: EditorSnapshot },
    Bus { name: String },
    ContainerResized { id: ElementId },
    Drag { event: DragEvent },
    DragGroup { events: Vec<DragEvent> },
    DragEnd { event: DragEndEvent },
    DragGroupEnd { events: Vec<DragEndEvent> },
    ResizeStart { event: ResizeStartEvent },
    ResizeGroupStart { events: Vec<ResizeStartEvent> },
    Resize { event: ResizeEvent },
    ResizeGroup { events: Vec<ResizeEvent> },
    ResizeEnd { event: ResizeEndEvent },
    ResizeGroupEnd { events: Vec<ResizeEndEvent> },
    Round { event: RoundEvent },
    RoundEnd { event: RoundEndEvent },
    Rotate { event: RotateEvent },
    RotateEnd { event: RotateEndEvent },
}

/// One line of replay output.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Output<'a> {
    Effect { step: usize, effect: &'a Effect },
    Action { action: &'a TransformerAction },
    SelectedFontSize { size: f64 },
    Handles { step: usize, config: &'a serde_json::Value },
}

fn emit(output: &Output<'_>) -> Result<(), TransformerError> {
    println!("{}", serde_json::to_string(output)?);
    Ok(())
}

/// Prints every dispatched action as a JSON line.
struct PrintDispatcher;

#[async_trait]
impl ActionDispatcher for PrintDispatcher {
    async fn dispatch(&self, action: TransformerAction) -> Result<(), TransformerError> {
        emit(&Output::Action { action: &action }).map_err(|e| TransformerError::Dispatch(e.to_string()))
    }
}

struct PrintTextState;

impl TextSelectionState for PrintTextState {
    fn set_selected_normalized_font_size(&self, size: f64) {
        if let Err(e) = emit(&Output::SelectedFontSize { size }) {
            tracing::error!(error = %e, "failed to print font size");
        }
    }
}

async fn run_step(transformer: &mut Transformer, step: Step) -> Result<Vec<Effect>, TransformerError> {
    let effects = match step {
        Step::Update { snapshot } => transformer.update(snapshot),
        Step::Bus { name } => transformer.on_bus(name.parse::<BusEvent>()?),
        Step::ContainerResized { id } => transformer.on_container_resized(&id),
        Step::Drag { event } => transformer.on_drag(&event),
        Step::DragGroup { events } => transformer.on_drag_group(&events),
        Step::DragEnd { event } => transformer.on_drag_end(event).await,
        Step::DragGroupEnd { events } => transformer.on_drag_group_end(events).await,
        Step::ResizeStart { event } => {
            transformer.on_resize_start(&event);
            Vec::new()
        }
        Step::ResizeGroupStart { events } => {
            transformer.on_resize_group_start(&events);
            Vec::new()
        }
        Step::Resize { event } => transformer.on_resize(&event),
        Step::ResizeGroup { events } => transformer.on_resize_group(&events),
        Step::ResizeEnd { event } => transformer.on_resize_end(event).await,
        Step::ResizeGroupEnd { events } => transformer.on_resize_group_end(events).await,
        Step::Round { event } => transformer.on_round(&event),
        Step::RoundEnd { event } => transformer.on_round_end(event).await,
        Step::Rotate { event } => transformer.on_rotate(&event),
        Step::RotateEnd { event } => transformer.on_rotate_end(event).await,
    };
    Ok(effects)
}

async fn run(cli: Cli) -> Result<(), TransformerError> {
    let config = TransformerConfig::from_env()?;
    let raw = tokio::fs::read_to_string(&cli.script).await?;
    let script: Script = serde_json::from_str(&raw)?;
    info!(script = %cli.script.display(), steps = script.steps.len(), "replaying gesture script");

    let core = TransformerCore::new(config, Services::from(script.layout));
    let mut transformer = Transformer::new(core, Arc::new(PrintDispatcher), Arc::new(PrintTextState));

    let initial = transformer.update(script.snapshot);
    for effect in &transformer.apply(initial).await {
        emit(&Output::Effect { step: 0, effect })?;
    }

    for (index, step) in script.steps.into_iter().enumerate() {
        let step_no = index + 1;
        // End handlers have already run their dispatches.
        let effects = run_step(&mut transformer, step).await?;
        for effect in &transformer.apply(effects).await {
            emit(&Output::Effect { step: step_no, effect })?;
        }
        if cli.handles {
            let config = serde_json::to_value(transformer.handles())?;
            emit(&Output::Handles { step: step_no, config: &config })?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "replay failed");
        std::process::exit(1);
    }
}

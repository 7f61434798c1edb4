//! Command-line argument parsing and the replay driver
//!
//! Supports:
//! - Replaying a script file or stdin against a fresh engine
//! - Seeding the buffer from a file
//! - Monospace or font-backed measurement
//! - Plain or JSON output of the final state

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use editcore::config::EngineConfig;
use editcore::editable::TextEditEngine;
use editcore::platform::{
    Clipboard, FontMetrics, MemoryClipboard, MonospaceMetrics, SystemClipboard, TextMetrics,
};
use editcore::script::{parse_script, ScriptRunner};

/// Replay an editing script against the text engine
#[derive(Parser, Debug)]
#[command(name = "editcore", version, about = "Replay an editing script against the text engine")]
pub struct CliArgs {
    /// Script to replay, or `-` for stdin
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Initial buffer content
    #[arg(long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// Widget width
    #[arg(long, default_value_t = 640.0)]
    pub width: f64,

    /// Widget height
    #[arg(long, default_value_t = 480.0)]
    pub height: f64,

    /// Advance of one char for monospace measurement
    #[arg(long, default_value_t = 8.0)]
    pub char_width: f64,

    /// Line height for monospace measurement
    #[arg(long, default_value_t = 16.0)]
    pub line_height: f64,

    /// Measure with a TTF/OTF font instead of a monospace grid
    #[arg(long, value_name = "TTF")]
    pub font: Option<PathBuf>,

    /// Font size in pixels (used with --font)
    #[arg(long, default_value_t = 14.0)]
    pub font_size: f32,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Final engine state as printed by the CLI
#[derive(Debug, Serialize)]
pub struct StateDump {
    pub text: String,
    pub cursor: usize,
    pub line: usize,
    pub column: usize,
    pub selection: Option<(usize, usize)>,
    pub selected_text: String,
    pub scroll_offset: usize,
    pub max_lines: usize,
    pub visible_lines: Vec<String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub frames: u64,
}

impl StateDump {
    pub fn capture(engine: &mut TextEditEngine) -> Self {
        let selection = engine
            .has_selection()
            .then(|| engine.selection().bounds());
        let view = engine.view();
        let visible_lines = view.lines.iter().map(|line| line.to_string()).collect();
        let cursor = view.cursor;

        Self {
            text: engine.text().to_string(),
            cursor: engine.cursor(),
            line: cursor.line,
            column: cursor.column,
            selection,
            selected_text: engine.selected_text().to_string(),
            scroll_offset: engine.scroll_offset(),
            max_lines: engine.max_lines(),
            visible_lines,
            can_undo: engine.can_undo(),
            can_redo: engine.can_redo(),
            frames: engine.frame(),
        }
    }

    fn render_plain(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.visible_lines.iter().enumerate() {
            out.push_str(&format!("{:>4} | {}\n", self.scroll_offset + i + 1, line));
        }
        out.push_str(&format!(
            "cursor {}:{} (offset {})\n",
            self.line + 1,
            self.column + 1,
            self.cursor
        ));
        if let Some((start, end)) = self.selection {
            out.push_str(&format!("selection {}..{} {:?}\n", start, end, self.selected_text));
        }
        out.push_str(&format!(
            "scroll {} of {} visible, undo {}, redo {}\n",
            self.scroll_offset, self.max_lines, self.can_undo, self.can_redo
        ));
        out
    }
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

fn metrics(args: &CliArgs) -> anyhow::Result<Box<dyn TextMetrics>> {
    match &args.font {
        Some(path) => Ok(Box::new(FontMetrics::from_file(path, args.font_size)?)),
        None => Ok(Box::new(MonospaceMetrics::new(args.char_width, args.line_height))),
    }
}

fn clipboard(args: &CliArgs) -> anyhow::Result<Box<dyn Clipboard>> {
    if args.system_clipboard {
        let clipboard = SystemClipboard::new().context("Failed to open system clipboard")?;
        return Ok(Box::new(clipboard));
    }
    Ok(Box::new(MemoryClipboard::new()))
}

impl CliArgs {
    /// Replay the script and print the final state
    pub fn run(self) -> anyhow::Result<()> {
        let steps = parse_script(&read_script(&self.script)?)?;
        let text = match &self.text {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => String::new(),
        };

        let metrics = metrics(&self)?;
        let mut clipboard = clipboard(&self)?;

        let mut engine = TextEditEngine::with_text(
            &text.replace("\r\n", "\n"),
            EngineConfig::load(),
            metrics.line_height(),
        );
        engine.resize(self.width, self.height);
        engine.set_focused(true);
        engine.ctrl_home();

        let mut runner = ScriptRunner::new(metrics.as_ref(), clipboard.as_mut());
        runner.run(&mut engine, &steps);
        tracing::info!(steps = steps.len(), frames = runner.frames(), "script replayed");

        let dump = StateDump::capture(&mut engine);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&dump)?);
        } else {
            print!("{}", dump.render_plain());
        }
        Ok(())
    }
}

//! Replay scripts: a line-oriented description of frames fed to the engine.
//!
//! ```text
//! # comments and blank lines are skipped
//! type hello world
//! key ctrl+shift+left
//! hold down 40
//! press 12 40
//! press 12 40 shift
//! drag 60 40
//! release
//! wheel -1
//! tick 5
//! resize 400 200
//! undo
//! ```

use anyhow::{bail, Context};

use crate::editable::{TextEditEngine, TextEditMsg};
use crate::input::{parse_chord, FrameInput, Key, Modifiers};
use crate::platform::{Clipboard, TextMetrics};

/// One script line
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Characters typed in a single frame
    Type(String),
    /// Press and release a key chord
    Key(Modifiers, Key),
    /// Hold a key chord for a number of frames, then release it
    Hold(Modifiers, Key, u32),
    Press { x: f64, y: f64, shift: bool },
    Drag { x: f64, y: f64 },
    Release,
    /// Wheel movement in lines, positive scrolls toward the top
    Wheel(f64),
    /// Empty frames
    Tick(u32),
    Resize { width: f64, height: f64 },
    /// A command applied directly, outside of frame input
    Command(TextEditMsg),
}

/// Parse a whole script, reporting the first bad line
pub fn parse_script(source: &str) -> anyhow::Result<Vec<Step>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| parse_step(line).with_context(|| format!("line {}: {}", i + 1, line.trim())))
        .collect()
}

/// Parse a single non-comment line
pub fn parse_step(line: &str) -> anyhow::Result<Step> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let step = match word {
        "type" => Step::Type(rest.to_string()),
        "key" => {
            let (mods, key) = parse_chord(arg(&args, 0)?).map_err(anyhow::Error::msg)?;
            Step::Key(mods, key)
        }
        "hold" => {
            let (mods, key) = parse_chord(arg(&args, 0)?).map_err(anyhow::Error::msg)?;
            Step::Hold(mods, key, number(&args, 1)?)
        }
        "press" => Step::Press {
            x: number(&args, 0)?,
            y: number(&args, 1)?,
            shift: match args.get(2) {
                None => false,
                Some(&"shift") => true,
                Some(other) => bail!("expected 'shift', got '{}'", other),
            },
        },
        "drag" => Step::Drag {
            x: number(&args, 0)?,
            y: number(&args, 1)?,
        },
        "release" => Step::Release,
        "wheel" => Step::Wheel(number(&args, 0)?),
        "tick" => Step::Tick(number(&args, 0)?),
        "resize" => Step::Resize {
            width: number(&args, 0)?,
            height: number(&args, 1)?,
        },
        "undo" => Step::Command(TextEditMsg::Undo),
        "redo" => Step::Command(TextEditMsg::Redo),
        "copy" => Step::Command(TextEditMsg::Copy),
        "cut" => Step::Command(TextEditMsg::Cut),
        "paste" => Step::Command(TextEditMsg::Paste),
        "select-all" => Step::Command(TextEditMsg::SelectAll),
        other => bail!("unknown step '{}'", other),
    };
    Ok(step)
}

fn arg<'a>(args: &[&'a str], index: usize) -> anyhow::Result<&'a str> {
    args.get(index)
        .copied()
        .with_context(|| format!("missing argument {}", index + 1))
}

fn number<T>(args: &[&str], index: usize) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = arg(args, index)?;
    raw.parse()
        .with_context(|| format!("invalid number '{}'", raw))
}

/// Drives an engine through script steps, one host frame at a time.
///
/// Pointer position and button state carry over between steps, so `tick`
/// after `drag` keeps the button held.
pub struct ScriptRunner<'a> {
    metrics: &'a dyn TextMetrics,
    clipboard: &'a mut dyn Clipboard,
    pointer: (f64, f64),
    held: bool,
    frames: u64,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(metrics: &'a dyn TextMetrics, clipboard: &'a mut dyn Clipboard) -> Self {
        Self {
            metrics,
            clipboard,
            pointer: (0.0, 0.0),
            held: false,
            frames: 0,
        }
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn run(&mut self, engine: &mut TextEditEngine, steps: &[Step]) {
        for step in steps {
            self.step(engine, step);
        }
    }

    pub fn step(&mut self, engine: &mut TextEditEngine, step: &Step) {
        tracing::debug!(?step, "script step");
        match step {
            Step::Type(text) => {
                let input = self.base().typed(text);
                self.frame(engine, input);
            }
            Step::Key(mods, key) => self.hold_key(engine, *mods, *key, 1),
            Step::Hold(mods, key, frames) => self.hold_key(engine, *mods, *key, *frames),
            Step::Press { x, y, shift } => {
                self.pointer = (*x, *y);
                self.held = true;
                let mods = if *shift {
                    Modifiers::SHIFT
                } else {
                    Modifiers::NONE
                };
                let input = self.base().press().with_modifiers(mods);
                self.frame(engine, input);
            }
            Step::Drag { x, y } => {
                self.pointer = (*x, *y);
                let input = self.base();
                self.frame(engine, input);
            }
            Step::Release => {
                self.held = false;
                let input = self.base().release();
                self.frame(engine, input);
            }
            Step::Wheel(lines) => {
                let input = self.base().wheel(*lines);
                self.frame(engine, input);
            }
            Step::Tick(frames) => {
                for _ in 0..*frames {
                    let input = self.base();
                    self.frame(engine, input);
                }
            }
            Step::Resize { width, height } => engine.resize(*width, *height),
            Step::Command(msg) => {
                if let Err(e) = engine.apply(msg.clone(), &mut *self.clipboard) {
                    tracing::warn!("Clipboard operation failed: {}", e);
                }
            }
        }
    }

    fn hold_key(&mut self, engine: &mut TextEditEngine, mods: Modifiers, key: Key, frames: u32) {
        for _ in 0..frames.max(1) {
            let input = self.base().key(key).with_modifiers(mods);
            self.frame(engine, input);
        }
        // Let go so the next press starts a fresh repeat cycle
        let input = self.base();
        self.frame(engine, input);
    }

    fn base(&self) -> FrameInput {
        let input = FrameInput::new().at(self.pointer.0, self.pointer.1);
        if self.held {
            input.hold()
        } else {
            input
        }
    }

    fn frame(&mut self, engine: &mut TextEditEngine, input: FrameInput) {
        engine.update(&input, self.metrics, &mut *self.clipboard);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::MoveTarget;

    #[test]
    fn test_parse_script_skips_comments() {
        let steps = parse_script("# setup\n\ntype hi there\nkey ctrl+left\nundo\n").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Type("hi there".to_string()),
                Step::Key(Modifiers::CTRL, Key::Left),
                Step::Command(TextEditMsg::Undo),
            ]
        );
    }

    #[test]
    fn test_parse_pointer_steps() {
        assert_eq!(
            parse_step("press 12 40 shift").unwrap(),
            Step::Press {
                x: 12.0,
                y: 40.0,
                shift: true
            }
        );
        assert_eq!(parse_step("wheel -1").unwrap(), Step::Wheel(-1.0));
        assert_eq!(parse_step("hold down 40").unwrap(), Step::Hold(Modifiers::NONE, Key::Down, 40));
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = parse_script("type ok\nfly 1 2\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        assert!(parse_step("press 1").is_err());
        assert!(parse_step("tick many").is_err());
    }

    #[test]
    fn test_command_steps_map_to_messages() {
        assert_eq!(
            parse_step("select-all").unwrap(),
            Step::Command(TextEditMsg::SelectAll)
        );
        assert_ne!(
            parse_step("redo").unwrap(),
            Step::Command(TextEditMsg::Move(MoveTarget::Left))
        );
    }
}

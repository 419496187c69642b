//! Scripted event replay against a headless board.
//!
//! A script is a line-based list of host events, one per line:
//!
//! ```text
//! # Lines starting with '#' are comments; blank lines are ignored.
//! # Mount over a 400x300 container at the screen origin:
//! init 400 300
//! resize 640 480
//! # The container moved on screen, size unchanged:
//! origin 10 20
//! # Toolbar toggle: paint | erase | inactive
//! mode paint
//! # Hex, palette name, or palette index (e.g. "color 2"):
//! color #e53e3e
//! width 8
//! # Mouse events are in screen coordinates:
//! down 10 10
//! move 50 50
//! up
//! leave
//! touch-down 5 5
//! touch-move 9 9
//! touch-end
//! clear
//! ```

use crate::draw::Color;
use crate::host::ResizeObserver;
use crate::input::{DrawingBoard, PointerEvent, ToolMode};
use crate::util::{self, Bounds};
use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use std::str::FromStr;

/// Color argument of a `color` command.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorChoice {
    Value(Color),
    PaletteIndex(usize),
}

/// One scripted host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Init { width: f64, height: f64 },
    Resize { width: f64, height: f64 },
    Origin { left: f64, top: f64 },
    Mode(ToolMode),
    Color(ColorChoice),
    Width(i64),
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    TouchDown { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
    Clear,
}

/// Counters collected while replaying a script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied
    pub commands: usize,
    /// Pointer-downs that started a stroke
    pub strokes: usize,
    /// Events for which the host would have suppressed default handling
    pub prevented: usize,
}

/// Parses a full script. Errors name the offending line.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command =
            parse_line(line).with_context(|| format!("line {}: '{}'", index + 1, line))?;
        commands.push(command);
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let command = match name {
        "init" => {
            let (width, height) = two_numbers(&args)?;
            Command::Init { width, height }
        }
        "resize" => {
            let (width, height) = two_numbers(&args)?;
            Command::Resize { width, height }
        }
        "origin" => {
            let (left, top) = two_numbers(&args)?;
            Command::Origin { left, top }
        }
        "mode" => {
            Command::Mode(ToolMode::from_str(one_arg(&args)?)?)
        }
        "color" => Command::Color(parse_color_choice(one_arg(&args)?)?),
        "width" => {
            let value = one_arg(&args)?;
            let width = value
                .parse::<i64>()
                .with_context(|| format!("invalid width '{}'", value))?;
            Command::Width(width)
        }
        "down" => {
            let (x, y) = two_numbers(&args)?;
            Command::Down { x, y }
        }
        "move" => {
            let (x, y) = two_numbers(&args)?;
            Command::Move { x, y }
        }
        "touch-down" => {
            let (x, y) = two_numbers(&args)?;
            Command::TouchDown { x, y }
        }
        "touch-move" => {
            let (x, y) = two_numbers(&args)?;
            Command::TouchMove { x, y }
        }
        "up" => no_args(&args, Command::Up)?,
        "leave" => no_args(&args, Command::Leave)?,
        "touch-end" => no_args(&args, Command::TouchEnd)?,
        "clear" => no_args(&args, Command::Clear)?,
        other => bail!("unknown command '{}'", other),
    };
    Ok(command)
}

fn parse_color_choice(value: &str) -> Result<ColorChoice> {
    if let Ok(index) = value.parse::<usize>() {
        return Ok(ColorChoice::PaletteIndex(index));
    }
    if value.starts_with('#') {
        return Color::from_hex(value)
            .map(ColorChoice::Value)
            .map_err(Into::into);
    }
    util::name_to_color(value)
        .map(ColorChoice::Value)
        .ok_or_else(|| anyhow!("unknown color '{}'", value))
}

fn one_arg<'a>(args: &[&'a str]) -> Result<&'a str> {
    match args {
        [value] => Ok(*value),
        _ => bail!("expected 1 argument, found {}", args.len()),
    }
}

fn two_numbers(args: &[&str]) -> Result<(f64, f64)> {
    match args {
        [a, b] => Ok((parse_number(a)?, parse_number(b)?)),
        _ => bail!("expected 2 numbers, found {} arguments", args.len()),
    }
}

fn parse_number(value: &str) -> Result<f64> {
    let number = value
        .parse::<f64>()
        .with_context(|| format!("invalid number '{}'", value))?;
    if !number.is_finite() {
        bail!("number '{}' is not finite", value);
    }
    Ok(number)
}

fn no_args(args: &[&str], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        bail!("expected no arguments, found {}", args.len())
    }
}

/// Applies `commands` to `board` in order.
pub fn run(board: &mut DrawingBoard, commands: &[Command]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for command in commands {
        debug!("Replaying {:?}", command);
        summary.commands += 1;
        match command {
            Command::Init { width, height } => board.initialize(&Bounds::sized(*width, *height)),
            Command::Resize { width, height } => {
                let (left, top) = board
                    .bounds()
                    .map(|bounds| (bounds.left, bounds.top))
                    .unwrap_or_default();
                board.on_resize(Bounds::new(left, top, *width, *height));
            }
            Command::Origin { left, top } => board.reposition(*left, *top),
            Command::Mode(mode) => {
                board.set_mode(*mode);
            }
            Command::Color(ColorChoice::Value(color)) => board.set_color(*color),
            Command::Color(ColorChoice::PaletteIndex(index)) => {
                if !board.select_palette_color(*index) {
                    log::warn!("Palette has no color at index {}", index);
                }
            }
            Command::Width(width) => {
                board.set_brush_width(*width);
            }
            Command::Down { x, y } => {
                let response = board.on_pointer_down(&PointerEvent::mouse(*x, *y));
                summary.record_down(board, response.prevent_default);
            }
            Command::TouchDown { x, y } => {
                let response = board.on_pointer_down(&PointerEvent::touch(*x, *y));
                summary.record_down(board, response.prevent_default);
            }
            Command::Move { x, y } => {
                let response = board.on_pointer_move(&PointerEvent::mouse(*x, *y));
                summary.record_prevented(response.prevent_default);
            }
            Command::TouchMove { x, y } => {
                let response = board.on_pointer_move(&PointerEvent::touch(*x, *y));
                summary.record_prevented(response.prevent_default);
            }
            Command::Up | Command::TouchEnd => board.on_pointer_up(),
            Command::Leave => board.on_pointer_leave(),
            Command::Clear => board.clear_surface(),
        }
    }
    summary
}

impl ReplaySummary {
    fn record_down(&mut self, board: &DrawingBoard, prevented: bool) {
        if board.stroke_session().is_some() {
            self.strokes += 1;
        }
        self.record_prevented(prevented);
    }

    fn record_prevented(&mut self, prevented: bool) {
        if prevented {
            self.prevented += 1;
        }
    }
}

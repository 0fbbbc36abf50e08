//! The world task: the only owner of the engine.
//!
//! Ticks come from a `tokio::time::interval`; operator commands arrive over
//! an `mpsc` channel and are applied between ticks, so a tick always runs to
//! completion before anything else touches the engine.

use std::io::Write;

use ltc_core::Tick;
use ltc_output::{CsvWriter, SnapshotRecorder};
use ltc_sim::{Engine, SimObserver, Snapshot, TickReport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, warn};

use crate::render::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Pause,
    Resume,
    /// Force one tick now (still gated by pause).
    Check,
    Reset,
    /// Print the current snapshot as JSON.
    Dump,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "toggle"            => Some(Command::TogglePause),
            "pause"                   => Some(Command::Pause),
            "resume" | "play"         => Some(Command::Resume),
            "c" | "check"             => Some(Command::Check),
            "r" | "reset"             => Some(Command::Reset),
            "d" | "dump"              => Some(Command::Dump),
            "q" | "quit" | "exit"     => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Forward stdin lines as commands until stdin closes or the world task exits.
pub async fn read_commands(tx: mpsc::Sender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Command::parse(&line) {
                Some(cmd) => {
                    if tx.send(cmd).await.is_err() {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => warn!(input = %line.trim(), "unknown command"),
            },
            Ok(None) => break,
            Err(error) => {
                error!(%error, "failed to read stdin");
                break;
            }
        }
    }
}

/// Optional CSV recording.
pub struct Recording(pub Option<SnapshotRecorder<CsvWriter>>);

impl Recording {
    fn report_error(&mut self) {
        if let Some(error) = self.0.as_mut().and_then(|r| r.take_error()) {
            error!(%error, "output failed");
        }
    }
}

impl SimObserver for Recording {
    fn on_tick_end(&mut self, report: &TickReport) {
        if let Some(r) = self.0.as_mut() {
            r.on_tick_end(report);
        }
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if let Some(r) = self.0.as_mut() {
            r.on_snapshot(snapshot);
        }
    }

    fn on_reset(&mut self, resets: u64) {
        if let Some(r) = self.0.as_mut() {
            r.on_reset(resets);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(r) = self.0.as_mut() {
            r.on_sim_end(final_tick);
        }
    }
}

fn draw_to<W: Write>(out: &mut W, engine: &Engine) -> std::io::Result<()> {
    let snapshot = engine.snapshot();
    let frame = Dashboard { snapshot: &snapshot, clock: &engine.clock };
    // Clear screen, cursor home.
    write!(out, "\x1b[2J\x1b[H{frame}")?;
    out.flush()
}

fn draw(engine: &Engine) {
    if let Err(error) = draw_to(&mut std::io::stdout().lock(), engine) {
        warn!(%error, "failed to draw dashboard");
    }
}

/// One recorded tick, whether from the ticker or a manual check.
fn advance(engine: &mut Engine, recording: &mut Recording, render: bool) -> TickReport {
    let report = engine.tick_with(recording);
    recording.report_error();
    if render {
        draw(engine);
    }
    report
}

fn dump(engine: &Engine) {
    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(error) => error!(%error, "failed to serialize snapshot"),
    }
}

/// Drive `engine` until a quit command, or until stdin has closed and every
/// truck has departed.
pub async fn world_task(
    mut engine:   Engine,
    mut recording: Recording,
    mut commands: mpsc::Receiver<Command>,
    render:       bool,
) {
    let mut ticker = interval(engine.clock.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                advance(&mut engine, &mut recording, render);
                if !stdin_open && engine.is_idle() {
                    info!(tick = engine.clock.current_tick.0, "all trucks departed");
                    break;
                }
            }
            cmd = commands.recv(), if stdin_open => match cmd {
                Some(Command::Quit) => break,
                Some(Command::TogglePause) => {
                    engine.toggle_pause();
                }
                Some(Command::Pause) => engine.set_paused(true),
                Some(Command::Resume) => engine.set_paused(false),
                Some(Command::Check) => {
                    advance(&mut engine, &mut recording, render);
                }
                Some(Command::Reset) => {
                    engine.reset();
                    recording.on_reset(engine.resets());
                    if render {
                        draw(&engine);
                    }
                }
                Some(Command::Dump) => dump(&engine),
                None => stdin_open = false,
            },
        }
    }

    recording.on_sim_end(engine.clock.current_tick);
    recording.report_error();
    info!(tick = engine.clock.current_tick.0, resets = engine.resets(), "dashboard stopped");
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use ltc_core::{SimConfig, Tick};
    use ltc_sim::EngineBuilder;

    use super::{Command, Recording, advance, draw_to};

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn draw_clears_screen_then_renders() {
        let engine = EngineBuilder::new(SimConfig::default()).build().unwrap();
        let mut out = Vec::new();
        draw_to(&mut out, &engine).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[2J\x1b[H"));
        assert!(text.contains("Buffer Zone Status"));
    }

    #[test]
    fn draw_surfaces_write_failures() {
        let engine = EngineBuilder::new(SimConfig::default()).build().unwrap();
        assert!(draw_to(&mut Broken, &engine).is_err());
    }

    #[test]
    fn manual_check_advances_one_tick() {
        let mut engine = EngineBuilder::new(SimConfig::default()).build().unwrap();
        let mut recording = Recording(None);
        let report = advance(&mut engine, &mut recording, false);
        assert!(!report.paused);
        assert_eq!(engine.clock.current_tick, Tick(1));

        engine.set_paused(true);
        assert!(advance(&mut engine, &mut recording, false).paused);
        assert_eq!(engine.clock.current_tick, Tick(1));
    }

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Command::parse("p"), Some(Command::TogglePause));
        assert_eq!(Command::parse(" Pause "), Some(Command::Pause));
        assert_eq!(Command::parse("resume"), Some(Command::Resume));
        assert_eq!(Command::parse("c"), Some(Command::Check));
        assert_eq!(Command::parse("RESET"), Some(Command::Reset));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
    }
}

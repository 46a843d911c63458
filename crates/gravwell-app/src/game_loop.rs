//! Game loop: drives the simulation engine one frame at a time.
//!
//! Single-threaded. Each frame polls the input source, queues its commands,
//! ticks the engine and hands the snapshot to the caller. In realtime mode
//! frames are paced to the nominal rate and fed the measured frame time;
//! otherwise every frame consumes the nominal duration as fast as possible.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use gravwell_core::commands::PlayerCommand;
use gravwell_core::constants::{NOMINAL_FRAME_DT, NOMINAL_FRAME_RATE};
use gravwell_core::events::SimEvent;
use gravwell_core::state::FrameSnapshot;
use gravwell_sim::SimulationEngine;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / NOMINAL_FRAME_RATE as u64);

/// Anything that produces player commands once per frame.
pub trait InputSource {
    /// Commands for the coming frame, given the previous frame's snapshot.
    fn poll(&mut self, last: Option<&FrameSnapshot>) -> Vec<PlayerCommand>;
}

/// Commands sent to a loop from another thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Input drained from a channel. Reports shutdown once the sender asks for
/// it or hangs up.
pub struct ChannelInput {
    rx: mpsc::Receiver<GameLoopCommand>,
    shutdown: bool,
}

impl ChannelInput {
    pub fn new(rx: mpsc::Receiver<GameLoopCommand>) -> Self {
        Self {
            rx,
            shutdown: false,
        }
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self, _last: Option<&FrameSnapshot>) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => commands.push(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    self.shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        commands
    }
}

/// How the loop runs.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub frames: u64,
    pub realtime: bool,
}

/// What happened over a run.
#[derive(Debug, Default)]
pub struct LoopSummary {
    pub frames: u64,
    pub shots: u32,
    pub captures: u32,
    pub last_snapshot: Option<FrameSnapshot>,
}

impl LoopSummary {
    fn record(&mut self, snapshot: &FrameSnapshot) {
        self.frames += 1;
        for event in &snapshot.events {
            match event {
                SimEvent::ShotFired { .. } | SimEvent::ShotMissed => self.shots += 1,
                SimEvent::SpecterCaptured { .. } => self.captures += 1,
                _ => {}
            }
        }
    }
}

/// Run `options.frames` frames, or until `stop` returns true.
pub fn run_game_loop<I: InputSource>(
    engine: &mut SimulationEngine,
    input: &mut I,
    options: LoopOptions,
    mut stop: impl FnMut(&I) -> bool,
) -> LoopSummary {
    let mut summary = LoopSummary::default();
    let mut next_frame_time = Instant::now();
    let mut last_frame_time = next_frame_time;

    while summary.frames < options.frames {
        // 1. Gather input for this frame
        let commands = input.poll(summary.last_snapshot.as_ref());
        if stop(input) {
            break;
        }
        engine.queue_commands(commands);

        // 2. Advance one frame
        let dt_secs = if options.realtime {
            let now = Instant::now();
            let dt = now.duration_since(last_frame_time).as_secs_f32();
            last_frame_time = now;
            if summary.frames == 0 {
                NOMINAL_FRAME_DT
            } else {
                dt
            }
        } else {
            NOMINAL_FRAME_DT
        };
        let snapshot = engine.tick(dt_secs);

        // 3. Report
        for event in &snapshot.events {
            log::debug!("frame {}: {:?}", snapshot.time.frame, event);
        }
        summary.record(&snapshot);
        summary.last_snapshot = Some(snapshot);

        // 4. Sleep until the next frame
        if options.realtime {
            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > FRAME_DURATION * 2 {
                // Too far behind; reset rather than spiral
                next_frame_time = now;
            }
        }
    }

    summary
}

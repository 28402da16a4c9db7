//! Game session: lifecycle, timers and drawing around the simulation
//!
//! The session owns the only copy of the game state. Two triggers drive it:
//! a display-frame callback that ticks and redraws, and a spawn interval.
//! Both handles are stored next to the state and cancelled whenever the
//! match leaves `InProgress` or the session goes away.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::platform::{FrameHandle, IntervalHandle, ManualScheduler, Scheduler};
use crate::renderer::{RenderError, Surface, build_scene};
use crate::sim::{GameEvent, GameState, MatchState, spawn_ball, tick};
use crate::ui::HudView;

pub struct GameSession<S: Scheduler> {
    state: GameState,
    config: GameConfig,
    rng: Pcg32,
    scheduler: S,
    surface: Option<Box<dyn Surface>>,
    frame: Option<FrameHandle>,
    spawn_timer: Option<IntervalHandle>,
    frames_drawn: u64,
}

impl<S: Scheduler> GameSession<S> {
    pub fn new(config: GameConfig, seed: u64, scheduler: S) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            scheduler,
            surface: None,
            frame: None,
            spawn_timer: None,
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn hud(&self) -> HudView {
        HudView::from_state(&self.state)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Replace the spawn RNG
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Attach the drawing surface. A match already in progress starts its
    /// loop now.
    pub fn attach_surface(&mut self, surface: Box<dyn Surface>) {
        self.surface = Some(surface);
        if self.state.is_in_progress() && !self.has_pending_callbacks() {
            self.schedule();
        }
    }

    /// Frame or spawn callback still outstanding
    pub fn has_pending_callbacks(&self) -> bool {
        self.frame.is_some() || self.spawn_timer.is_some()
    }

    /// Start (or restart) a match
    pub fn start(&mut self) {
        self.cancel_timers();
        self.state.start(&self.config);
        log::info!("Match started");
        self.schedule();
    }

    /// Back to the pre-game screen
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.state.reset(&self.config);
        log::info!("Match reset");
    }

    /// Pointer moved to `x`, relative to the field's left edge
    pub fn on_pointer_move(&mut self, x: f32) {
        self.state.move_goalkeeper(x, &self.config);
    }

    /// Display-frame callback: tick, redraw, reschedule while in progress
    pub fn on_frame(&mut self) -> Vec<GameEvent> {
        // Stale callback from a cancelled schedule
        if self.frame.take().is_none() {
            return Vec::new();
        }
        if !self.state.is_in_progress() {
            self.cancel_timers();
            return Vec::new();
        }

        let events = tick(&mut self.state, &self.config);
        self.draw();

        if self.state.is_in_progress() {
            self.frame = self.scheduler.request_frame();
            if self.frame.is_none() {
                log::warn!("Frame callback unavailable; game loop stopped");
                self.cancel_timers();
            }
        } else {
            self.cancel_timers();
        }
        events
    }

    /// Spawn interval callback. Returns the new ball's ID.
    pub fn on_spawn_timer(&mut self) -> Option<u32> {
        if self.spawn_timer.is_none() {
            return None;
        }
        if !self.state.is_in_progress() {
            self.cancel_timers();
            return None;
        }
        spawn_ball(&mut self.state, &self.config, &mut self.rng)
    }

    /// Cancel everything outstanding. The session stays usable.
    pub fn shutdown(&mut self) {
        self.cancel_timers();
    }

    fn schedule(&mut self) {
        if self.surface.is_none() {
            log::warn!("No drawable surface; game loop not started");
            return;
        }
        self.frame = self.scheduler.request_frame();
        self.spawn_timer = self.scheduler.start_interval(self.config.spawn_interval_ms);
        if self.frame.is_none() {
            log::warn!("Frame callback unavailable; game loop not started");
            self.cancel_timers();
        }
    }

    fn cancel_timers(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(handle) = self.spawn_timer.take() {
            self.scheduler.clear_interval(handle);
        }
    }

    fn draw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let vertices = build_scene(&self.state, &self.config);
        match surface.present(&vertices) {
            Ok(()) => self.frames_drawn += 1,
            Err(RenderError::SurfaceLost) => surface.recover(),
            Err(RenderError::OutOfMemory) => log::error!("Out of memory!"),
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl<S: Scheduler> Drop for GameSession<S> {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

impl GameSession<ManualScheduler> {
    /// Move simulated time forward by one frame of `frame_ms`: fire any spawn
    /// ticks that came due, then the pending frame callback.
    pub fn advance(&mut self, frame_ms: f64) -> Vec<GameEvent> {
        let due = self.scheduler.advance(frame_ms);
        for handle in due {
            if self.spawn_timer == Some(handle) {
                self.on_spawn_timer();
            }
        }
        if self.scheduler.take_frame().is_some() {
            self.on_frame()
        } else {
            Vec::new()
        }
    }

    /// Play with a keeper that always steps under the lowest ball, until the
    /// match ends or `max_frames` pass. Returns the final score.
    pub fn autoplay(&mut self, frame_ms: f64, max_frames: u32) -> u32 {
        for _ in 0..max_frames {
            let lowest = self
                .state
                .balls
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|b| b.pos.x + b.vel.x);
            if let Some(target) = lowest {
                self.on_pointer_move(target);
            }
            self.advance(frame_ms);
            if self.state.phase != MatchState::InProgress {
                break;
            }
        }
        self.state.score
    }
}

//! WebAssembly bindings for the MIPS pipeline visualizer.
//!
//! Exposes a `PipelineViewer` to a browser UI. The page owns the timer and calls `tick`
//! at its own cadence; every call returns the new snapshot as JSON so the page can redraw
//! without further round trips.

use mipsviz_core::common::{ClockError, InputError, RegisterNaming};
use mipsviz_core::config::Config;
use mipsviz_core::pipeline::PipelineClock;
use mipsviz_core::sim::parse_program;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Failures surfaced to JavaScript as `Error` objects.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Program text was rejected.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The clock refused the operation.
    #[error(transparent)]
    Clock(#[from] ClockError),
    /// Snapshot serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Browser-facing pipeline clock.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct PipelineViewer {
    clock: PipelineClock,
    config: Config,
}

impl PipelineViewer {
    /// Parses `text` and starts a new run.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Input`] for malformed text, [`ViewerError::Clock`] if a run is
    /// already in progress.
    pub fn start_text(&mut self, text: &str) -> Result<String, ViewerError> {
        let program = parse_program(text)?;
        self.clock.start(program)?;
        self.snapshot_json()
    }

    /// Advances one cycle and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Clock`] if no program is loaded.
    pub fn advance(&mut self) -> Result<String, ViewerError> {
        let _ = self.clock.tick()?;
        self.snapshot_json()
    }

    /// Current snapshot as JSON.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Json`] if serialization fails.
    pub fn snapshot_json(&self) -> Result<String, ViewerError> {
        Ok(self
            .clock
            .snapshot(self.config.display.register_names)
            .to_json()?)
    }

    /// The wrapped clock.
    pub const fn clock(&self) -> &PipelineClock {
        &self.clock
    }
}

#[wasm_bindgen]
impl PipelineViewer {
    /// Creates an idle viewer with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `text` (one hex word per line) and starts at cycle 1.
    ///
    /// # Errors
    ///
    /// Rejects malformed programs and starting while a run is in progress.
    pub fn start(&mut self, text: &str) -> Result<String, JsError> {
        Ok(self.start_text(text)?)
    }

    /// Advances one cycle. Ignored while paused or finished.
    ///
    /// # Errors
    ///
    /// Rejects ticks while idle.
    pub fn tick(&mut self) -> Result<String, JsError> {
        Ok(self.advance()?)
    }

    /// Suspends the run.
    ///
    /// # Errors
    ///
    /// Rejects pausing unless running.
    pub fn pause(&mut self) -> Result<(), JsError> {
        Ok(self.clock.pause()?)
    }

    /// Continues a paused run.
    ///
    /// # Errors
    ///
    /// Rejects resuming unless paused.
    pub fn resume(&mut self) -> Result<(), JsError> {
        Ok(self.clock.resume()?)
    }

    /// Discards the run and returns to idle.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Current snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(self.snapshot_json()?)
    }

    /// Switches between `$3` and `$v1` register names.
    #[wasm_bindgen(js_name = setAbiNames)]
    pub fn set_abi_names(&mut self, abi: bool) {
        self.config.display.register_names = if abi {
            RegisterNaming::Abi
        } else {
            RegisterNaming::Numeric
        };
    }

    /// Suggested milliseconds between ticks.
    #[wasm_bindgen(getter, js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> f64 {
        self.config.clock.tick_interval_ms as f64
    }

    /// Current cycle; zero while idle.
    #[wasm_bindgen(getter, js_name = currentCycle)]
    pub fn current_cycle(&self) -> f64 {
        self.clock.current_cycle() as f64
    }

    /// Completion cycle so far; zero while idle.
    #[wasm_bindgen(getter, js_name = maxCycles)]
    pub fn max_cycles(&self) -> f64 {
        self.clock.max_cycles() as f64
    }

    /// `true` while ticks advance the clock.
    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// `true` once the last instruction has retired.
    #[wasm_bindgen(getter, js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}

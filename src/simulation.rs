//! Simulation controller: Go / Pause / Step / Reset over one owned lattice.
//!
//! All state lives in [`Simulation`]. Every command and frame callback runs to
//! completion synchronously, so a Pause or Reset takes effect before the next
//! callback and no generation is ever partially applied.

use std::time::Duration;

use crate::automaton::{
    ClusterSeeder, Coord, GenerationHistory, Lattice, Snapshot, StepEngine,
};
use crate::clock::GenerationClock;
use crate::config::{EngineConfig, SeedInput, SeedParams};
use crate::error::EngineError;
use crate::state::{Command, ControlAvailability, Lifecycle, StatusReport};

pub struct Simulation {
    lattice: Lattice,
    history: GenerationHistory,
    lifecycle: Lifecycle,
    params: SeedParams,
    /// The cluster last previewed on the lattice.
    preview: Vec<Coord>,
    /// Preview cells that were dead before the preview lit them. Only these
    /// are reverted when the preview moves.
    preview_lit: Vec<Coord>,
    clock: GenerationClock,
    engine: StepEngine,
    seeder: ClusterSeeder,
}

impl Simulation {
    /// Build an idle simulation showing the preview cluster for the configured seed.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let seeder = match config.rng_seed {
            Some(rng_seed) => ClusterSeeder::new(rng_seed),
            None => ClusterSeeder::from_entropy(),
        };

        let mut sim = Simulation {
            lattice: Lattice::new(),
            history: GenerationHistory::new(),
            lifecycle: Lifecycle::Idle,
            params: SeedParams::from_input(&config.seed),
            preview: Vec::new(),
            preview_lit: Vec::new(),
            clock: GenerationClock::new(config.clock),
            engine: StepEngine::new(config.worker_threads)?,
            seeder,
        };
        sim.show_preview();
        Ok(sim)
    }

    /// Default config with a fixed RNG seed.
    pub fn seeded(rng_seed: u64) -> Result<Self, EngineError> {
        Self::new(&EngineConfig::seeded(rng_seed))
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Generations committed in the current run.
    pub fn generation(&self) -> usize {
        self.history.len()
    }

    pub fn params(&self) -> SeedParams {
        self.params
    }

    /// Cells of the cluster currently previewed on the lattice, if any.
    pub fn preview(&self) -> &[Coord] {
        &self.preview
    }

    pub fn controls(&self) -> ControlAvailability {
        ControlAvailability::new(self.lifecycle, self.generation())
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            lifecycle: self.lifecycle,
            generation: self.generation(),
            live_cells: self.lattice.live_count(),
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Go => self.go(),
            Command::Pause => self.pause(),
            Command::StepForward => self.step_forward(),
            Command::StepBack => self.step_back(),
            Command::Reset => self.reset(),
        }
    }

    /// Start a run, resume a paused one, or start over after the cap. No-op while running.
    pub fn go(&mut self) {
        match self.lifecycle {
            Lifecycle::Running => {}
            _ if self.history.is_full() => {
                self.lattice.clear();
                self.history.clear();
                self.forget_preview();
                self.start_run();
            }
            Lifecycle::Paused => {
                self.lifecycle = Lifecycle::Running;
                log::info!("run resumed at generation {}", self.generation());
            }
            Lifecycle::Idle | Lifecycle::Frozen => self.start_run(),
        }
    }

    /// Stop the clock. No-op unless running.
    pub fn pause(&mut self) {
        if !self.lifecycle.is_running() {
            return;
        }
        self.clock.reset();
        self.lifecycle = Lifecycle::Paused;
        log::info!("run paused at generation {}", self.generation());
    }

    /// Advance exactly one generation. No-op while running.
    pub fn step_forward(&mut self) {
        if self.lifecycle.is_running() {
            return;
        }
        self.advance();
    }

    /// Restore the lattice to the newest snapshot. No-op while running or with no history.
    pub fn step_back(&mut self) {
        if self.lifecycle.is_running() {
            return;
        }
        let Some(snapshot) = self.history.pop() else {
            return;
        };
        self.lattice = snapshot.to_lattice();
        self.forget_preview();
        if self.lifecycle == Lifecycle::Frozen {
            self.lifecycle = Lifecycle::Paused;
        }
        log::debug!("rewound to generation {}", self.generation());
    }

    /// Drop the run and show a freshly grown cluster for the current parameters.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.history.clear();
        self.lattice.clear();
        self.forget_preview();
        self.show_preview();
        self.lifecycle = Lifecycle::Idle;
        log::info!("reset; previewing {} cells", self.preview.len());
    }

    /// Frame callback. Returns the number of generations committed.
    pub fn on_frame(&mut self, dt: Duration) -> u32 {
        if !self.lifecycle.is_running() {
            return 0;
        }

        let due = self.clock.on_frame(dt);
        let mut advanced = 0;
        for _ in 0..due {
            self.advance();
            advanced += 1;
            if self.history.is_full() {
                self.clock.reset();
                self.lifecycle = Lifecycle::Frozen;
                log::info!("run frozen at generation {}", self.generation());
                break;
            }
        }
        advanced
    }

    /// Update seed parameters from raw host input.
    pub fn set_seed_input(&mut self, input: &SeedInput) {
        self.set_params(SeedParams::from_input(input));
    }

    /// Update seed parameters. Outside a run, the preview follows the change.
    pub fn set_params(&mut self, params: SeedParams) {
        self.params = params.sanitized();
        if !self.lifecycle.is_running() {
            self.show_preview();
        }
    }

    fn start_run(&mut self) {
        let cluster = self.seeder.generate(self.params.seed, self.params.cluster_size);
        self.replace_preview(cluster);
        let seeded = std::mem::take(&mut self.preview);
        self.preview_lit.clear();

        self.history.clear();
        self.clock.reset();
        self.lifecycle = Lifecycle::Running;
        log::info!(
            "run started from {} cells at {:?}",
            seeded.len(),
            self.params.seed
        );
    }

    fn advance(&mut self) {
        self.history.push(Snapshot::capture(&self.lattice));
        self.engine.step(&mut self.lattice);
        self.forget_preview();

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "generation {} committed, {} live cells",
                self.generation(),
                self.lattice.live_count()
            );
        }
    }

    fn show_preview(&mut self) {
        let cluster = self.seeder.generate(self.params.seed, self.params.cluster_size);
        log::trace!("preview {} cells at {:?}", cluster.len(), self.params.seed);
        self.replace_preview(cluster);
    }

    /// The lattice no longer shows a preview; keep every cell as it is.
    fn forget_preview(&mut self) {
        self.preview.clear();
        self.preview_lit.clear();
    }

    /// Revert cells the old preview lit that `cluster` does not cover, then
    /// light `cluster`. Cells that were already alive are left alone.
    fn replace_preview(&mut self, cluster: Vec<Coord>) {
        let mut lit = Vec::with_capacity(cluster.len());
        for &old in &self.preview_lit {
            if cluster.contains(&old) {
                lit.push(old);
            } else {
                self.lattice.set_at(old, false);
            }
        }
        for &cell in &cluster {
            if !self.lattice.get_at(cell) {
                self.lattice.set_at(cell, true);
                lit.push(cell);
            }
        }
        self.preview = cluster;
        self.preview_lit = lit;
    }
}

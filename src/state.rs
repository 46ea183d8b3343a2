//! Lifecycle state and what the controller reports about it.

use std::fmt;

use crate::automaton::MAX_GENERATIONS;

/// Where a simulation is in its run.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Seeded (or previewing) but not started.
    Idle = 0,
    /// Advancing on the generation clock.
    Running = 1,
    /// Stopped mid-run; may resume.
    Paused = 2,
    /// Stopped at the generation cap; the next Go starts over.
    Frozen = 3,
}

impl Lifecycle {
    pub fn is_running(self) -> bool {
        self == Lifecycle::Running
    }
}

/// Commands accepted by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Go,
    Pause,
    StepForward,
    StepBack,
    Reset,
}

/// Which commands currently have an effect, for enabling host controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlAvailability {
    pub go: bool,
    pub pause: bool,
    pub step_forward: bool,
    pub step_back: bool,
    pub reset: bool,
}

impl ControlAvailability {
    pub fn new(lifecycle: Lifecycle, generation: usize) -> Self {
        let running = lifecycle.is_running();
        ControlAvailability {
            go: !running,
            pause: running,
            step_forward: !running,
            step_back: !running && generation > 0,
            reset: running || generation > 0,
        }
    }

    pub fn allows(&self, command: Command) -> bool {
        match command {
            Command::Go => self.go,
            Command::Pause => self.pause,
            Command::StepForward => self.step_forward,
            Command::StepBack => self.step_back,
            Command::Reset => self.reset,
        }
    }
}

/// Point-in-time status for a lifecycle display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub lifecycle: Lifecycle,
    pub generation: usize,
    pub live_cells: usize,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lifecycle {
            Lifecycle::Idle if self.generation == 0 => write!(f, "Reset. Set seed and press Go."),
            Lifecycle::Idle => write!(f, "Stepped to generation {}.", self.generation),
            Lifecycle::Running => write!(f, "Running (generation {})", self.generation),
            Lifecycle::Paused => write!(f, "Paused at generation {}.", self.generation),
            Lifecycle::Frozen => write!(f, "Frozen at generation {}.", MAX_GENERATIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_while_running() {
        let controls = ControlAvailability::new(Lifecycle::Running, 12);
        assert!(!controls.go);
        assert!(controls.pause);
        assert!(!controls.step_forward);
        assert!(!controls.step_back);
        assert!(controls.reset);
    }

    #[test]
    fn availability_fresh_idle() {
        let controls = ControlAvailability::new(Lifecycle::Idle, 0);
        assert!(controls.allows(Command::Go));
        assert!(!controls.allows(Command::Pause));
        assert!(controls.allows(Command::StepForward));
        assert!(!controls.allows(Command::StepBack));
        assert!(!controls.allows(Command::Reset));
    }

    #[test]
    fn availability_paused_with_history() {
        let controls = ControlAvailability::new(Lifecycle::Paused, 3);
        assert!(controls.go && controls.step_forward && controls.step_back && controls.reset);
        assert!(!controls.pause);
    }

    #[test]
    fn status_text() {
        let report = |lifecycle, generation| StatusReport {
            lifecycle,
            generation,
            live_cells: 0,
        };
        assert_eq!(report(Lifecycle::Running, 7).to_string(), "Running (generation 7)");
        assert_eq!(report(Lifecycle::Frozen, 80).to_string(), "Frozen at generation 80.");
        assert_eq!(report(Lifecycle::Idle, 0).to_string(), "Reset. Set seed and press Go.");
        assert_eq!(report(Lifecycle::Paused, 4).to_string(), "Paused at generation 4.");
    }
}

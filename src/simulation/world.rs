//! Simulation runner that ties everything together
//!
//! Owns the clock and the track coordinator, spawns one actor thread per
//! train plus the clock ticker, and collects the ordered event log once
//! every train has finished.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::info;

use super::clock::{ClockHandle, SimClock};
use super::events::TrainEvent;
use super::track::TrackCoordinator;
use super::train::run_train;
use super::types::{Train, DEFAULT_TICK_INTERVAL};

/// Runtime configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Real-time duration of one simulated tick
    pub tick_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Every train event in occurrence order
    pub events: Vec<TrainEvent>,
    /// Number of trains that ran to completion
    pub trains_run: usize,
}

/// A single-track crossing simulation for one roster of trains
pub struct Simulation {
    roster: Vec<Train>,
    config: SimConfig,
}

impl Simulation {
    pub fn new(roster: Vec<Train>) -> Self {
        Self::with_config(roster, SimConfig::default())
    }

    pub fn with_config(roster: Vec<Train>, config: SimConfig) -> Self {
        Self { roster, config }
    }

    /// Run the roster to completion.
    ///
    /// Every train runs to the end of its life cycle; there is no external
    /// cancellation. The clock ticker is torn down last, after all train
    /// threads have been joined. An invariant violation in any actor aborts
    /// the run with the actor's diagnostic.
    pub fn run(self) -> Result<SimulationReport> {
        let trains_run = self.roster.len();
        let clock = SimClock::new();
        let ticker = ClockHandle::start(clock.clone(), self.config.tick_interval);
        let coordinator = Arc::new(TrackCoordinator::new());

        info!(
            "starting simulation: {} trains, tick interval {:?}",
            trains_run, self.config.tick_interval
        );

        let mut handles = Vec::with_capacity(trains_run);
        for train in self.roster {
            let clock = clock.clone();
            let coordinator = Arc::clone(&coordinator);
            let poll_interval = self.config.tick_interval;
            let handle = thread::Builder::new()
                .name(format!("train-{}", train.id))
                .spawn(move || run_train(train, clock, coordinator, poll_interval))
                .context("failed to spawn train actor thread")?;
            handles.push(handle);
        }

        let mut first_error: Option<anyhow::Error> = None;
        for handle in handles {
            let outcome = match handle.join() {
                Ok(result) => result,
                Err(_) => Err(anyhow!("train actor thread panicked")),
            };
            if let Err(error) = outcome {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
        ticker.stop();

        if let Some(error) = first_error {
            return Err(error.context("simulation aborted"));
        }

        let events = coordinator.events();
        info!(
            "simulation complete: {} trains, {} events, final tick {}",
            trains_run,
            events.len(),
            clock.now()
        );
        Ok(SimulationReport { events, trains_run })
    }
}

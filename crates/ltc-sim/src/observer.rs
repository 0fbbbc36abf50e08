//! Simulation observer trait for progress reporting and data collection.

use ltc_core::Tick;

use crate::{Snapshot, TickReport};

/// Callbacks invoked by [`Engine::run_ticks`][crate::Engine::run_ticks] and
/// [`Engine::run_until_idle`][crate::Engine::run_until_idle] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: departure printer
///
/// ```rust,ignore
/// struct Departures;
///
/// impl SimObserver for Departures {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         for event in &report.events {
///             if matches!(event, TruckEvent::Departed { .. }) {
///                 println!("{}: {event}", report.tick);
///             }
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick is processed, paused ticks included.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// effective ticks) with the post-tick state.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called after the engine rebuilt its layout.  `resets` counts resets
    /// so far, this one included.
    fn on_reset(&mut self, _resets: u64) {}

    /// Called once when a run loop returns.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! The `Engine` struct and its tick.

use ltc_core::{SimClock, SimConfig, SimRng, TruckId, WaitingAreaId};
use ltc_fleet::{DockQueue, Fleet, RedirectTarget, Truck, TruckStatus, approach, has_arrived};
use ltc_zone::{WaitingAreas, Zone, ZoneError, ZoneLayout};
use tracing::{debug, info};

use crate::setup::InitialState;
use crate::{SimError, SimObserver, SimResult, Snapshot, TickReport, TruckEvent, TruckView};

// ── Yard ──────────────────────────────────────────────────────────────────────

/// The resources trucks contend for.
///
/// Split from the fleet so a truck can be borrowed mutably while its
/// waiting area, queue entry and dock are updated.
struct Yard {
    waiting_areas:   WaitingAreas,
    queue:           DockQueue,
    docks_available: u32,
    max_docks:       u32,
}

impl Yard {
    /// Put `truck` into `Unloading`.
    ///
    /// A truck that was never granted a dock claims one here.  With none
    /// free the truck is left untouched and `false` is returned.
    fn begin_unloading(&mut self, truck: &mut Truck, unload_ticks: u32, events: &mut Vec<TruckEvent>) -> bool {
        if !truck.holds_dock {
            if self.docks_available == 0 {
                events.push(TruckEvent::DockBusy { truck: truck.id });
                return false;
            }
            self.docks_available -= 1;
            truck.holds_dock = true;
        }
        truck.status         = TruckStatus::Unloading;
        truck.unload_timer   = unload_ticks;
        truck.redirect_to    = RedirectTarget::WAREHOUSE;
        truck.queue_position = None;
        self.queue.remove(truck.id);
        self.waiting_areas.release(truck.id);
        events.push(TruckEvent::BeganUnloading { truck: truck.id });
        true
    }

    /// Retire `truck` and hand back everything it held.
    fn depart(&mut self, truck: &mut Truck, events: &mut Vec<TruckEvent>) {
        truck.status         = TruckStatus::Departed;
        truck.unload_timer   = 0;
        truck.queue_position = None;
        if truck.holds_dock {
            truck.holds_dock = false;
            self.docks_available = (self.docks_available + 1).min(self.max_docks);
        }
        self.queue.remove(truck.id);
        self.waiting_areas.release(truck.id);
        events.push(TruckEvent::Departed { truck: truck.id });
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Owns every truck, the waiting areas, the dock queue and the dock counter.
/// Renderers never see this state directly; they read a [`Snapshot`].
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    /// Configuration the engine was built with.  `reset` re-reads it.
    pub config: SimConfig,

    /// Counts effective (unpaused) ticks since the last reset.
    pub clock: SimClock,

    /// Zone rings derived from `config`.
    pub layout: ZoneLayout,

    fleet:  Fleet,
    yard:   Yard,
    paused: bool,
    rng:    SimRng,
    resets: u64,
}

impl Engine {
    pub(crate) fn from_state(config: SimConfig, state: InitialState, rng: SimRng, paused: bool) -> Self {
        let max_docks = config.max_docks;
        Self {
            clock:  SimClock::new(config.tick_interval_ms),
            layout: ZoneLayout::from_config(&config),
            fleet:  state.fleet,
            yard:   Yard {
                waiting_areas:   state.waiting_areas,
                queue:           state.queue,
                docks_available: max_docks,
                max_docks,
            },
            paused,
            rng,
            resets: 0,
            config,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.fleet.get(id)
    }

    pub fn waiting_areas(&self) -> &WaitingAreas {
        &self.yard.waiting_areas
    }

    pub fn queue(&self) -> &DockQueue {
        &self.yard.queue
    }

    pub fn docks_available(&self) -> u32 {
        self.yard.docks_available
    }

    pub fn max_docks(&self) -> u32 {
        self.yard.max_docks
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of resets since the engine was built.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// `true` once every truck has departed.
    pub fn is_idle(&self) -> bool {
        self.fleet.all_departed()
    }

    /// Read-only view of the post-tick state.
    pub fn snapshot(&self) -> Snapshot {
        let areas = &self.yard.waiting_areas;
        Snapshot {
            tick:            self.clock.current_tick,
            paused:          self.paused,
            trucks:          self
                .fleet
                .active()
                .map(|t| TruckView {
                    id:             t.id,
                    coordinates:    t.coordinates,
                    zone:           t.zone,
                    status:         t.status,
                    redirect_to:    t.redirect_to,
                    queue_position: t.queue_position,
                    waiting_area:   areas.held_by(t.id),
                    unload_timer:   t.unload_timer,
                })
                .collect(),
            docks_available: self.yard.docks_available,
            max_docks:       self.yard.max_docks,
            waiting_areas:   areas.iter().collect(),
            queue:           self.yard.queue.as_slice().to_vec(),
        }
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Gate the tick.  While paused, [`tick`](Self::tick) changes nothing.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, tick = self.clock.current_tick.0, "pause toggled");
        }
        self.paused = paused;
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Discard all entity state and lay out a fresh random run.
    ///
    /// The pause flag survives.  Each reset draws its own child RNG, so
    /// successive layouts differ but the sequence is fixed by the seed.
    pub fn reset(&mut self) {
        self.resets += 1;
        let mut rng = self.rng.child(self.resets);
        let state = InitialState::random(&self.config, &mut rng);
        self.fleet = state.fleet;
        self.yard.waiting_areas = state.waiting_areas;
        self.yard.queue = state.queue;
        self.yard.docks_available = self.yard.max_docks;
        self.clock.reset();
        info!(
            resets = self.resets,
            trucks = self.fleet.len(),
            waiting_areas = self.yard.waiting_areas.len(),
            "simulation reset"
        );
    }

    /// Give `id` the best free waiting area and route it there.
    ///
    /// `Ok(None)` means every area is taken, which is not an error.
    pub fn allocate_waiting_area(&mut self, id: TruckId) -> SimResult<Option<WaitingAreaId>> {
        let truck = self.fleet.get_mut(id).ok_or(SimError::TruckNotFound(id))?;
        match truck.status {
            TruckStatus::Departed => return Err(SimError::TruckDeparted(id)),
            TruckStatus::EnRoute => {}
            status => return Err(SimError::NotRoutable { truck: id, status }),
        }
        if let Some(area) = self.yard.waiting_areas.held_by(id) {
            return Err(ZoneError::AlreadyHolding { truck: id, area }.into());
        }
        let area = self
            .yard
            .waiting_areas
            .allocate(id, truck.coordinates, truck.incoming_direction);
        if area.is_some() {
            truck.redirect_to = RedirectTarget::WaitingArea;
        }
        Ok(area)
    }

    /// Return `id`'s waiting area to the pool.
    ///
    /// A truck that was headed for (or parked at) the area goes back to
    /// `Checking...` and will be reassigned once it is in the Buffer Zone.
    pub fn release_waiting_area(&mut self, id: TruckId) -> SimResult<Option<WaitingAreaId>> {
        let truck = self.fleet.get_mut(id).ok_or(SimError::TruckNotFound(id))?;
        let released = self.yard.waiting_areas.release(id);
        if released.is_some() && truck.redirect_to == RedirectTarget::WaitingArea {
            truck.redirect_to = RedirectTarget::Checking;
            if truck.status == TruckStatus::Waiting {
                truck.status = TruckStatus::EnRoute;
            }
        }
        Ok(released)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    ///
    /// While paused the returned report has `paused == true`, nothing is
    /// mutated and the clock does not move.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        if self.paused {
            return TickReport {
                tick: now,
                paused: true,
                docks_available: self.yard.docks_available,
                ..TickReport::default()
            };
        }

        let ids = self.fleet.active_ids();
        let mut events = Vec::new();
        for &id in &ids {
            self.step(id, &mut events);
        }
        for event in &events {
            debug!(tick = now.0, %event, "truck event");
        }
        self.clock.advance();

        TickReport {
            tick:            now,
            paused:          false,
            processed:       ids.len(),
            events,
            docks_available: self.yard.docks_available,
        }
    }

    /// Process one truck.  See the crate docs for the seven steps.
    fn step(&mut self, id: TruckId, events: &mut Vec<TruckEvent>) {
        let Some(truck) = self.fleet.get_mut(id) else {
            return;
        };
        let yard = &mut self.yard;
        let unload_ticks = self.config.unload_ticks;

        // ① queue position
        truck.queue_position = yard.queue.position(id);

        // ② zone
        let zone = self.layout.classify(truck.coordinates);
        if zone != truck.zone {
            events.push(TruckEvent::ZoneChanged { truck: id, from: truck.zone, to: zone });
            truck.zone = zone;
        }

        // ③ waiting area
        if id != TruckId::FIRST
            && zone == Zone::Buffer
            && truck.redirect_to != RedirectTarget::WAREHOUSE
            && yard.waiting_areas.held_by(id).is_none()
        {
            if let Some(area) = yard
                .waiting_areas
                .allocate(id, truck.coordinates, truck.incoming_direction)
            {
                truck.redirect_to = RedirectTarget::WaitingArea;
                truck.status = TruckStatus::EnRoute;
                events.push(TruckEvent::AssignedWaitingArea { truck: id, area });
            }
        }

        // ④ dock admission
        if truck.queue_position == Some(0)
            && yard.docks_available > 0
            && truck.status == TruckStatus::Waiting
        {
            yard.waiting_areas.release(id);
            yard.docks_available -= 1;
            truck.holds_dock  = true;
            truck.redirect_to = RedirectTarget::WAREHOUSE;
            truck.status      = TruckStatus::HeadingToDock;
            events.push(TruckEvent::AdmittedToDock { truck: id });
        }

        // ⑤ warehouse entry
        let mut armed = false;
        let mut blocked = false;
        if zone == Zone::Warehouse && truck.status != TruckStatus::Unloading {
            armed = yard.begin_unloading(truck, unload_ticks, events);
            // Trucks bound for a waiting area may cross the yard without a dock.
            blocked = !armed && truck.redirect_to != RedirectTarget::WaitingArea;
        }

        // ⑥ countdown
        if truck.status == TruckStatus::Unloading && !armed {
            truck.unload_timer = truck.unload_timer.saturating_sub(1);
            if truck.unload_timer == 0 {
                yard.depart(truck, events);
                return;
            }
        }

        // ⑦ movement
        if blocked {
            return;
        }
        let held = yard.waiting_areas.held_by(id);
        let held_point = held.and_then(|a| yard.waiting_areas.point(a));
        if truck.status.is_parked() {
            if let Some(point) = held_point {
                truck.coordinates = point;
            }
            return;
        }
        let target = match (truck.redirect_to, held_point) {
            (RedirectTarget::WaitingArea, Some(point)) => point,
            _ => self.layout.center,
        };
        truck.coordinates = approach(truck.coordinates, target, self.config.approach_rate);
        if !has_arrived(truck.coordinates, target, self.config.arrival_epsilon) {
            return;
        }
        match (truck.redirect_to, held) {
            (RedirectTarget::WaitingArea, Some(area)) => {
                truck.status = TruckStatus::Waiting;
                events.push(TruckEvent::ArrivedAtWaitingArea { truck: id, area });
            }
            (RedirectTarget::Zone(Zone::Warehouse), _) => {
                yard.begin_unloading(truck, unload_ticks, events);
            }
            _ => {}
        }
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run exactly `n` ticks, paused ones included.
    ///
    /// Returns the number of effective ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut effective = 0;
        for _ in 0..n {
            if !self.tick_with(observer).paused {
                effective += 1;
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        effective
    }

    /// Tick until every truck has departed or `limit` ticks have been run.
    ///
    /// Returns the number of ticks run.
    pub fn run_until_idle<O: SimObserver>(&mut self, limit: u64, observer: &mut O) -> u64 {
        let mut ran = 0;
        while ran < limit && !self.is_idle() {
            self.tick_with(observer);
            ran += 1;
        }
        observer.on_sim_end(self.clock.current_tick);
        ran
    }

    /// One [`tick`](Self::tick) with observer hooks around it.
    ///
    /// For drivers that own their own loop; `on_sim_end` is not called.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        observer.on_tick_start(self.clock.current_tick);
        let report = self.tick();
        observer.on_tick_end(&report);
        let interval = self.config.output_interval_ticks;
        if !report.paused && interval > 0 && self.clock.current_tick.0.is_multiple_of(interval) {
            observer.on_snapshot(&self.snapshot());
        }
        report
    }
}

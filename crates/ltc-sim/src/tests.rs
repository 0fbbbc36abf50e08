//! Integration tests for ltc-sim.

use std::collections::HashMap;

use ltc_core::{Coordinate, LtcError, SimConfig, Tick, TruckId, WaitingAreaId};
use ltc_fleet::{RedirectTarget, Truck, TruckStatus};
use ltc_zone::Zone;

use crate::{Engine, EngineBuilder, NoopObserver, SimError, SimObserver, Snapshot, TickReport, TruckEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(trucks: usize) -> SimConfig {
    SimConfig {
        truck_count: trucks,
        ..SimConfig::default()
    }
}

/// A point offset from the default warehouse center.
fn near(d_lat: f64, d_lon: f64) -> Coordinate {
    let c = SimConfig::default().warehouse_center;
    Coordinate::new(c.lat + d_lat, c.lon + d_lon)
}

fn id(n: u32) -> TruckId {
    TruckId(n)
}

/// Truck 1 far out in the Approach Zone, trucks 2 and 3 inside the Buffer
/// Zone, and a single waiting area between them.
fn contested_engine() -> Engine {
    let trucks = vec![
        Truck::heading_to_dock(id(1), near(0.009, 0.0), 0.0),
        Truck::en_route(id(2), near(0.004, 0.0), 0.0),
        Truck::en_route(id(3), near(0.0, 0.004), 0.0),
    ];
    EngineBuilder::new(config(3))
        .trucks(trucks)
        .waiting_area_points(vec![near(0.003, 0.0)])
        .build()
        .unwrap()
}

fn status(engine: &Engine, n: u32) -> TruckStatus {
    engine.truck(id(n)).unwrap().status
}

// ── EngineBuilder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_random_layout_from_config() {
        let engine = EngineBuilder::new(config(4)).build().unwrap();
        assert_eq!(engine.fleet().len(), 4);
        assert_eq!(engine.waiting_areas().len(), 4);
        assert_eq!(engine.queue().as_slice(), &[id(1), id(2), id(3), id(4)]);
        assert_eq!(engine.docks_available(), 1);
        assert_eq!(engine.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn first_truck_starts_heading_to_dock() {
        let engine = EngineBuilder::new(config(3)).build().unwrap();
        let first = engine.truck(id(1)).unwrap();
        assert_eq!(first.status, TruckStatus::HeadingToDock);
        assert_eq!(first.zone, Zone::Approach);
        assert_eq!(first.redirect_to, RedirectTarget::WAREHOUSE);
        for n in 2..=3 {
            let t = engine.truck(id(n)).unwrap();
            assert_eq!(t.status, TruckStatus::EnRoute);
            assert_eq!(t.zone, Zone::Outside);
            assert_eq!(t.redirect_to, RedirectTarget::Checking);
        }
    }

    #[test]
    fn zero_trucks_still_gets_one_waiting_area() {
        let engine = EngineBuilder::new(config(0)).build().unwrap();
        assert!(engine.fleet().is_empty());
        assert_eq!(engine.waiting_areas().len(), 1);
        assert!(engine.is_idle());
    }

    #[test]
    fn explicit_trucks_override_truck_count() {
        let trucks = vec![Truck::en_route(id(9), near(0.006, 0.0), 0.0); 2];
        let engine = EngineBuilder::new(config(7)).trucks(trucks).build().unwrap();
        assert_eq!(engine.config.truck_count, 2);
        // Ids are renumbered densely.
        assert_eq!(engine.truck(id(2)).unwrap().id, id(2));
    }

    #[test]
    fn invalid_config_errors() {
        let bad = SimConfig {
            max_docks: 0,
            ..SimConfig::default()
        };
        let result = EngineBuilder::new(bad).build();
        assert!(matches!(result, Err(SimError::Core(LtcError::Config(_)))));
    }

    #[test]
    fn non_finite_waiting_point_errors() {
        let result = EngineBuilder::new(config(1))
            .waiting_area_points(vec![Coordinate::new(f64::NAN, 0.0)])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = EngineBuilder::new(config(6)).seed(11).build().unwrap();
        let b = EngineBuilder::new(config(6)).seed(11).build().unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn different_seed_different_layout() {
        let a = EngineBuilder::new(config(6)).seed(1).build().unwrap();
        let b = EngineBuilder::new(config(6)).seed(2).build().unwrap();
        assert_ne!(a.snapshot().trucks, b.snapshot().trucks);
    }
}

// ── Single-truck unloading ────────────────────────────────────────────────────

#[cfg(test)]
mod unloading_tests {
    use super::*;

    fn lone_truck_at_center() -> Engine {
        EngineBuilder::new(config(1))
            .trucks(vec![Truck::heading_to_dock(id(1), near(0.0, 0.0), 0.0)])
            .build()
            .unwrap()
    }

    #[test]
    fn first_tick_enters_warehouse_and_unloads() {
        let mut engine = lone_truck_at_center();
        let report = engine.tick();

        let truck = engine.truck(id(1)).unwrap();
        assert_eq!(truck.zone, Zone::Warehouse);
        assert_eq!(truck.status, TruckStatus::Unloading);
        assert_eq!(truck.unload_timer, 5);
        assert!(truck.holds_dock);
        assert_eq!(engine.docks_available(), 0);
        assert!(engine.queue().is_empty());
        assert!(report.events.contains(&TruckEvent::BeganUnloading { truck: id(1) }));
    }

    #[test]
    fn departs_after_exactly_five_more_ticks() {
        let mut engine = lone_truck_at_center();
        engine.tick();
        for expected in (1..=4).rev() {
            engine.tick();
            assert_eq!(status(&engine, 1), TruckStatus::Unloading);
            assert_eq!(engine.truck(id(1)).unwrap().unload_timer, expected);
        }
        let report = engine.tick();
        assert_eq!(status(&engine, 1), TruckStatus::Departed);
        assert_eq!(report.departures(), 1);
        assert_eq!(engine.docks_available(), 1);
        assert!(engine.is_idle());
        assert_eq!(engine.clock.current_tick, Tick(6));
    }

    #[test]
    fn unrouted_truck_at_center_also_unloads() {
        let mut engine = EngineBuilder::new(config(1))
            .trucks(vec![Truck::en_route(id(1), near(0.0, 0.0), 0.0)])
            .build()
            .unwrap();
        engine.tick();
        assert_eq!(status(&engine, 1), TruckStatus::Unloading);
        assert_eq!(engine.docks_available(), 0);
    }

    #[test]
    fn departed_truck_is_left_alone() {
        let mut engine = lone_truck_at_center();
        engine.run_ticks(6, &mut NoopObserver);
        let frozen = engine.truck(id(1)).unwrap().clone();
        let report = engine.tick();
        assert_eq!(report.processed, 0);
        assert_eq!(engine.truck(id(1)).unwrap(), &frozen);
        assert!(engine.snapshot().trucks.is_empty());
    }

    #[test]
    fn busy_dock_holds_second_truck_in_place() {
        let second = near(0.0005, 0.0);
        let mut engine = EngineBuilder::new(config(2))
            .trucks(vec![
                Truck::en_route(id(1), near(0.0, 0.0), 0.0),
                Truck::en_route(id(2), second, 0.0),
            ])
            .build()
            .unwrap();

        let report = engine.tick();
        assert!(report.events.contains(&TruckEvent::DockBusy { truck: id(2) }));
        assert_eq!(status(&engine, 1), TruckStatus::Unloading);
        assert_eq!(status(&engine, 2), TruckStatus::EnRoute);
        assert_eq!(engine.truck(id(2)).unwrap().coordinates, second);
        assert_eq!(engine.docks_available(), 0);

        // Truck 1 departs on tick 6 and truck 2 takes the dock in the same tick.
        engine.run_ticks(5, &mut NoopObserver);
        assert_eq!(status(&engine, 1), TruckStatus::Departed);
        assert_eq!(status(&engine, 2), TruckStatus::Unloading);
        assert_eq!(engine.docks_available(), 0);
    }
}

// ── Waiting areas ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_area_tests {
    use super::*;

    #[test]
    fn first_truck_in_order_wins_contested_area() {
        let mut engine = contested_engine();
        let report = engine.tick();

        let area = WaitingAreaId(0);
        assert!(engine.waiting_areas().is_occupied(area));
        assert_eq!(engine.waiting_areas().held_by(id(2)), Some(area));
        assert_eq!(engine.waiting_areas().holder(area), Some(id(2)));
        assert_eq!(engine.truck(id(2)).unwrap().redirect_to, RedirectTarget::WaitingArea);

        let loser = engine.truck(id(3)).unwrap();
        assert_eq!(engine.waiting_areas().held_by(id(3)), None);
        assert_eq!(loser.status, TruckStatus::EnRoute);
        assert_eq!(loser.redirect_to, RedirectTarget::Checking);

        let assigned: Vec<_> = report
            .events
            .iter()
            .filter(|e| matches!(e, TruckEvent::AssignedWaitingArea { .. }))
            .collect();
        assert_eq!(assigned, vec![&TruckEvent::AssignedWaitingArea { truck: id(2), area }]);
    }

    #[test]
    fn first_truck_never_takes_a_waiting_area() {
        let mut engine = EngineBuilder::new(config(1))
            .trucks(vec![Truck::en_route(id(1), near(0.004, 0.0), 0.0)])
            .build()
            .unwrap();
        engine.tick();
        assert_eq!(engine.waiting_areas().held_by(id(1)), None);
        assert_eq!(engine.truck(id(1)).unwrap().redirect_to, RedirectTarget::Checking);
    }

    #[test]
    fn release_then_reallocate_to_other_truck() {
        let mut engine = contested_engine();
        engine.tick();
        let area = WaitingAreaId(0);

        assert_eq!(engine.release_waiting_area(id(2)).unwrap(), Some(area));
        assert_eq!(engine.waiting_areas().held_by(id(2)), None);
        assert_eq!(engine.truck(id(2)).unwrap().redirect_to, RedirectTarget::Checking);

        assert_eq!(engine.allocate_waiting_area(id(3)).unwrap(), Some(area));
        assert_eq!(engine.waiting_areas().held_by(id(3)), Some(area));
        assert_eq!(engine.waiting_areas().held_by(id(2)), None);
        assert_eq!(engine.truck(id(3)).unwrap().redirect_to, RedirectTarget::WaitingArea);
        assert!(engine.waiting_areas().is_consistent());
    }

    #[test]
    fn allocation_with_no_free_area_is_not_an_error() {
        let mut engine = contested_engine();
        engine.tick();
        assert_eq!(engine.allocate_waiting_area(id(3)).unwrap(), None);
    }

    #[test]
    fn allocation_rejects_bad_requests() {
        let mut engine = contested_engine();
        engine.tick();
        assert!(matches!(
            engine.allocate_waiting_area(id(99)),
            Err(SimError::TruckNotFound(_))
        ));
        assert!(matches!(
            engine.allocate_waiting_area(id(0)),
            Err(SimError::TruckNotFound(_))
        ));
        assert!(matches!(
            engine.release_waiting_area(id(0)),
            Err(SimError::TruckNotFound(_))
        ));
        assert!(engine.truck(id(0)).is_none());
        assert!(matches!(
            engine.allocate_waiting_area(id(1)),
            Err(SimError::NotRoutable { .. })
        ));
        assert!(matches!(engine.allocate_waiting_area(id(2)), Err(SimError::Zone(_))));
    }

    #[test]
    fn truck_parks_and_is_admitted_when_dock_frees() {
        let area_point = near(0.003, 0.0);
        let mut engine = EngineBuilder::new(config(2))
            .trucks(vec![
                Truck::en_route(id(1), near(0.0, 0.0), 0.0),
                Truck::en_route(id(2), area_point, 0.0),
            ])
            .waiting_area_points(vec![area_point])
            .build()
            .unwrap();

        let report = engine.tick();
        assert!(report.events.contains(&TruckEvent::ArrivedAtWaitingArea {
            truck: id(2),
            area:  WaitingAreaId(0),
        }));
        assert_eq!(status(&engine, 2), TruckStatus::Waiting);

        // Dock is busy until truck 1 departs on tick 6.
        engine.run_ticks(4, &mut NoopObserver);
        assert_eq!(status(&engine, 2), TruckStatus::Waiting);
        assert_eq!(engine.truck(id(2)).unwrap().coordinates, area_point);

        let report = engine.tick();
        assert!(report.events.contains(&TruckEvent::AdmittedToDock { truck: id(2) }));
        let truck = engine.truck(id(2)).unwrap();
        assert_eq!(truck.status, TruckStatus::HeadingToDock);
        assert_eq!(truck.redirect_to, RedirectTarget::WAREHOUSE);
        assert!(truck.holds_dock);
        assert_eq!(engine.waiting_areas().free_count(), 1);
        assert_eq!(engine.docks_available(), 0);

        engine.run_until_idle(200, &mut NoopObserver);
        assert!(engine.is_idle());
        assert_eq!(engine.docks_available(), 1);
    }
}

// ── Whole-run invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    fn check_run(seed: u64) {
        let mut engine = EngineBuilder::new(SimConfig::default()).seed(seed).build().unwrap();
        let max = engine.max_docks() as usize;
        let unload_ticks = engine.config.unload_ticks;
        let mut departed: HashMap<TruckId, Truck> = HashMap::new();
        let mut previous: HashMap<TruckId, (TruckStatus, u32)> = HashMap::new();

        for _ in 0..5_000 {
            if engine.is_idle() {
                break;
            }
            engine.tick();

            let unloading = engine.fleet().count(TruckStatus::Unloading);
            assert!(engine.docks_available() as usize + unloading <= max);
            assert!(engine.waiting_areas().is_consistent());

            for truck in engine.fleet().iter() {
                if let Some(area) = engine.waiting_areas().held_by(truck.id) {
                    assert!(truck.is_active(), "{} holds {area} after departing", truck.id);
                }
                if let Some(frozen) = departed.get(&truck.id) {
                    assert_eq!(truck, frozen);
                    continue;
                }
                if let Some(&(prev_status, prev_timer)) = previous.get(&truck.id) {
                    match (prev_status, truck.status) {
                        (TruckStatus::Unloading, TruckStatus::Unloading) => {
                            assert_eq!(truck.unload_timer, prev_timer - 1)
                        }
                        (TruckStatus::Unloading, TruckStatus::Departed) => assert_eq!(prev_timer, 1),
                        (_, TruckStatus::Unloading) => assert_eq!(truck.unload_timer, unload_ticks),
                        _ => {}
                    }
                }
                previous.insert(truck.id, (truck.status, truck.unload_timer));
                if truck.status == TruckStatus::Departed {
                    departed.insert(truck.id, truck.clone());
                }
            }
        }
        assert!(engine.is_idle(), "seed {seed} did not finish");
        assert_eq!(engine.docks_available(), engine.max_docks());
        assert!(engine.queue().is_empty());
        assert_eq!(engine.waiting_areas().free_count(), engine.waiting_areas().len());
    }

    #[test]
    fn default_seed_holds_invariants_to_completion() {
        check_run(42);
    }

    #[test]
    fn other_seeds_hold_invariants_to_completion() {
        for seed in 1..=5 {
            check_run(seed);
        }
    }

    #[test]
    fn two_docks_hold_invariants() {
        let mut engine = EngineBuilder::new(SimConfig {
            max_docks: 2,
            ..SimConfig::default()
        })
        .build()
        .unwrap();
        for _ in 0..2_000 {
            engine.tick();
            let unloading = engine.fleet().count(TruckStatus::Unloading) as u32;
            assert!(engine.docks_available() + unloading <= 2);
        }
        assert!(engine.is_idle());
    }
}

// ── Pause and reset ───────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    #[test]
    fn paused_tick_changes_nothing() {
        let mut engine = EngineBuilder::new(config(5)).build().unwrap();
        engine.run_ticks(10, &mut NoopObserver);
        engine.set_paused(true);
        let before = engine.snapshot();

        let report = engine.tick();
        assert!(report.paused);
        assert!(report.events.is_empty());
        assert_eq!(report.processed, 0);
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.clock.current_tick, Tick(10));
    }

    #[test]
    fn toggle_pause_flips_flag() {
        let mut engine = EngineBuilder::new(config(2)).build().unwrap();
        assert!(engine.toggle_pause());
        assert!(engine.is_paused());
        assert!(!engine.toggle_pause());
        assert_eq!(engine.tick().tick, Tick::ZERO);
        assert_eq!(engine.clock.current_tick, Tick(1));
    }

    #[test]
    fn reset_then_tick_restores_initial_conditions() {
        let mut engine = EngineBuilder::new(config(6)).build().unwrap();
        engine.run_ticks(150, &mut NoopObserver);
        assert!(engine.fleet().iter().any(|t| !t.is_active()) || engine.queue().len() < 6);

        engine.reset();
        engine.tick();

        let expected: Vec<TruckId> = (1..=6).map(id).collect();
        assert_eq!(engine.queue().as_slice(), expected.as_slice());
        assert!(engine.fleet().iter().all(|t| t.is_active()));
        assert_eq!(engine.docks_available(), engine.max_docks());
        assert_eq!(engine.clock.current_tick, Tick(1));
        assert_eq!(engine.resets(), 1);
    }

    #[test]
    fn reset_relays_out_the_run() {
        let mut engine = EngineBuilder::new(config(6)).build().unwrap();
        let before = engine.snapshot();
        engine.reset();
        assert_ne!(engine.snapshot().trucks, before.trucks);
    }

    #[test]
    fn reset_is_reproducible_per_seed() {
        let mut a = EngineBuilder::new(config(6)).seed(5).build().unwrap();
        let mut b = EngineBuilder::new(config(6)).seed(5).build().unwrap();
        a.reset();
        b.reset();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn reset_keeps_pause() {
        let mut engine = EngineBuilder::new(config(3)).paused(true).build().unwrap();
        engine.reset();
        assert!(engine.is_paused());
        assert!(engine.tick().paused);
    }
}

// ── Snapshots and observers ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        paused:    usize,
        snapshots: Vec<Tick>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, report: &TickReport) {
            self.ends += 1;
            if report.paused {
                self.paused += 1;
            }
        }
        fn on_snapshot(&mut self, snapshot: &Snapshot) {
            self.snapshots.push(snapshot.tick);
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn hooks_fire_every_tick() {
        let mut engine = EngineBuilder::new(config(3)).build().unwrap();
        let mut obs = Counter::default();
        let effective = engine.run_ticks(4, &mut obs);
        assert_eq!(effective, 4);
        assert_eq!(obs.starts, 4);
        assert_eq!(obs.ends, 4);
        assert_eq!(obs.snapshots, vec![Tick(1), Tick(2), Tick(3), Tick(4)]);
        assert_eq!(obs.finished, Some(Tick(4)));
    }

    #[test]
    fn snapshot_interval_is_respected() {
        let mut engine = EngineBuilder::new(SimConfig {
            truck_count:           3,
            output_interval_ticks: 3,
            ..SimConfig::default()
        })
        .build()
        .unwrap();
        let mut obs = Counter::default();
        engine.run_ticks(7, &mut obs);
        assert_eq!(obs.snapshots, vec![Tick(3), Tick(6)]);
    }

    #[test]
    fn paused_ticks_produce_no_snapshots() {
        let mut engine = EngineBuilder::new(config(3)).paused(true).build().unwrap();
        let mut obs = Counter::default();
        assert_eq!(engine.run_ticks(3, &mut obs), 0);
        assert_eq!(obs.ends, 3);
        assert_eq!(obs.paused, 3);
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn run_until_idle_stops_when_all_departed() {
        let mut engine = EngineBuilder::new(config(1))
            .trucks(vec![Truck::heading_to_dock(id(1), near(0.0, 0.0), 0.0)])
            .build()
            .unwrap();
        let ran = engine.run_until_idle(100, &mut NoopObserver);
        assert_eq!(ran, 6);
        assert!(engine.is_idle());
    }

    #[test]
    fn snapshot_reports_queue_and_waiting_area() {
        let mut engine = contested_engine();
        engine.tick();
        let snap = engine.snapshot();
        assert_eq!(snap.trucks.len(), 3);
        assert_eq!(snap.queue, vec![id(1), id(2), id(3)]);
        let second = snap.truck(id(2)).unwrap();
        assert_eq!(second.queue_position, Some(1));
        assert_eq!(second.waiting_area, Some(WaitingAreaId(0)));
        assert!(snap.waiting_areas[0].occupied);
        assert_eq!(snap.docks_available, 1);
        assert_eq!(snap.max_docks, 1);
    }

    #[test]
    fn summary_counts_buffer_trucks() {
        let mut engine = contested_engine();
        engine.tick();
        let summary = engine.snapshot().summary();
        assert_eq!(summary.active, 3);
        assert_eq!(summary.in_buffer, 2);
        assert_eq!(summary.en_route_buffer, 2);
        assert_eq!(summary.waiting, 0);
        assert_eq!(summary.unloading, 0);
        assert_eq!(summary.docks_available, 1);
    }
}

//! Text rendition of the dashboard widgets.

use std::fmt;

use ltc_core::SimClock;
use ltc_fleet::TruckStatus;
use ltc_sim::Snapshot;
use ltc_zone::Zone;

/// Short zone badge used in the truck table.
fn zone_badge(zone: Zone) -> &'static str {
    match zone {
        Zone::Warehouse => "Warehouse",
        Zone::Buffer    => "Buffer",
        Zone::Approach  => "Approach",
        Zone::Outside   => "Outside",
    }
}

/// Everything drawn for one frame.
pub struct Dashboard<'a> {
    pub snapshot: &'a Snapshot,
    pub clock:    &'a SimClock,
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snapshot;
        let summary = snap.summary();
        let state = if snap.paused { "PAUSED" } else { "RUNNING" };

        writeln!(f, "Logistics Traffic Control   {}   [{state}]", self.clock)?;
        writeln!(f)?;

        // ── Status cards ──
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{:<16}",
            "Active Trucks", "Dock Status", "Buffer Zone", "Processing"
        )?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{:<16}",
            summary.active,
            format!("{}/{}", summary.docks_available, summary.max_docks),
            summary.in_buffer,
            summary.unloading,
        )?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{:<16}",
            "In system", "Available docks", "Trucks waiting", "Unloading"
        )?;
        writeln!(f)?;

        // ── Truck table ──
        writeln!(f, "Active Trucks ({})", snap.trucks.len())?;
        writeln!(f, "  {:<5} {:<12} {:<16} {:<16} {:>7}", "ID", "Current Zone", "Redirect To", "Status", "Queue #")?;
        for t in &snap.trucks {
            let queue = t
                .queue_position
                .map(|p| (p + 1).to_string())
                .unwrap_or_else(|| "-".to_owned());
            writeln!(
                f,
                "  {:<5} {:<12} {:<16} {:<16} {:>7}",
                format!("#{}", t.id.0),
                zone_badge(t.zone),
                t.redirect_to.label(),
                t.status.label(),
                queue,
            )?;
        }
        writeln!(f)?;

        // ── Buffer zone status ──
        writeln!(f, "Buffer Zone Status")?;
        if summary.in_buffer == 0 {
            writeln!(f, "  No trucks in buffer zone")?;
            writeln!(f, "  All clear for incoming traffic")?;
        } else {
            writeln!(f, "  Total in Buffer: {}", summary.in_buffer)?;
            let in_buffer = |status: TruckStatus| -> Vec<String> {
                snap.in_zone(Zone::Buffer)
                    .filter(|t| t.status == status)
                    .map(|t| t.id.to_string())
                    .collect()
            };
            let waiting = in_buffer(TruckStatus::Waiting);
            if !waiting.is_empty() {
                writeln!(f, "  Waiting ({}): {}  [In Queue]", waiting.len(), waiting.join(", "))?;
            }
            let moving = in_buffer(TruckStatus::EnRoute);
            if !moving.is_empty() {
                writeln!(f, "  En Route ({}): {}  [Moving]", moving.len(), moving.join(", "))?;
            }
        }
        for area in &snap.waiting_areas {
            let holder = snap.trucks.iter().find(|t| t.waiting_area == Some(area.id));
            match holder {
                Some(t) => writeln!(f, "  {}  Occupied by {}", area.id, t.id)?,
                None if area.occupied => writeln!(f, "  {}  Occupied", area.id)?,
                None => writeln!(f, "  {}  Available", area.id)?,
            }
        }
        writeln!(f)?;

        // ── Control panel ──
        let pause = if snap.paused { "Resume" } else { "Pause" };
        writeln!(
            f,
            "Controls: [c] Manual Check & Redirect  [p] {pause}  [r] Reset System  [d] Dump JSON  [q] Quit"
        )?;
        writeln!(f, "  • System auto-updates every {}ms", self.clock.tick_interval_ms)?;
        writeln!(f, "  • Trucks are redirected based on dock availability")?;
        writeln!(f, "  • FIFO queue system for fair processing")
    }
}

//! Plain data row types written by output backends.

/// One truck at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckSnapshotRow {
    /// Layout number: 0 for the first run, incremented by each reset.
    pub run:            u64,
    pub tick:           u64,
    pub truck_id:       u32,
    pub lat:            f64,
    pub lon:            f64,
    pub zone:           &'static str,
    pub status:         &'static str,
    pub redirect_to:    &'static str,
    /// Zero-based; `None` once the truck has left the queue.
    pub queue_position: Option<u32>,
    pub unload_timer:   u32,
}

/// Summary of one effective tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub run:              u64,
    pub tick:             u64,
    pub elapsed_ms:       u64,
    pub trucks_processed: u64,
    pub events:           u64,
    pub departures:       u64,
    pub docks_available:  u32,
}

//! Zone-subsystem error type.

use thiserror::Error;

use ltc_core::{TruckId, WaitingAreaId};

/// Errors produced by `ltc-zone`.
///
/// None of these occur during a normal tick: the engine only asks for the
/// best free area, and "none free" is an ordinary `None`.  They guard the
/// explicit ownership API against misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    #[error("{0} does not exist")]
    UnknownArea(WaitingAreaId),

    #[error("{0} is not tracked by the ownership table")]
    UnknownTruck(TruckId),

    #[error("{area} is already held by {holder}")]
    Occupied { area: WaitingAreaId, holder: TruckId },

    #[error("{truck} already holds {area}")]
    AlreadyHolding { truck: TruckId, area: WaitingAreaId },
}

pub type ZoneResult<T> = Result<T, ZoneError>;

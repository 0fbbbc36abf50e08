use ltc_core::{LtcError, TruckId};
use ltc_fleet::TruckStatus;
use ltc_zone::ZoneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] LtcError),

    #[error("waiting area error: {0}")]
    Zone(#[from] ZoneError),

    #[error("{0} not found")]
    TruckNotFound(TruckId),

    #[error("{0} has departed")]
    TruckDeparted(TruckId),

    #[error("{truck} cannot take a waiting area while {status}")]
    NotRoutable { truck: TruckId, status: TruckStatus },
}

pub type SimResult<T> = Result<T, SimError>;

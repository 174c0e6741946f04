//! Device location capability.

use std::future::Future;

use crate::types::{Coordinates, LocationError};

/// A source of the device's current position.
pub trait LocationSource: Send + Sync {
    /// Whether this platform can report a position at all.
    fn is_supported(&self) -> bool;

    /// Query the current position once.
    fn current_location(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Location taken from configuration rather than positioning hardware.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    coordinates: Option<Coordinates>,
    denied: bool,
}

impl ConfiguredLocation {
    pub fn new(coordinates: Option<Coordinates>, denied: bool) -> Self {
        Self {
            coordinates,
            denied,
        }
    }

    /// No position configured.
    pub fn unsupported() -> Self {
        Self::default()
    }
}

impl LocationSource for ConfiguredLocation {
    fn is_supported(&self) -> bool {
        self.coordinates.is_some()
    }

    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        if self.denied {
            return Err(LocationError::PermissionDenied);
        }
        self.coordinates.ok_or(LocationError::Unsupported)
    }
}

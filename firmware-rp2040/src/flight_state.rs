//! Shared flight-state store.
//!
//! The MSP bridge reads a copy whenever it answers a request. No estimator,
//! receiver or battery task is attached in this firmware, so the store keeps
//! the snapshot it was created with and requests are answered from that.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use msp_bridge::{
    Attitude, BatterySettings, BatteryState, GpsPosition, ManualControl, TelemetrySnapshot,
    TelemetrySource,
};

/// Latest flight state, behind a critical-section mutex.
pub struct FlightState {
    inner: Mutex<CriticalSectionRawMutex, Cell<TelemetrySnapshot>>,
}

impl FlightState {
    pub fn new(initial: TelemetrySnapshot) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Copy of the whole snapshot.
    pub fn get(&self) -> TelemetrySnapshot {
        self.inner.lock(Cell::get)
    }
}

impl TelemetrySource for FlightState {
    fn attitude(&self) -> Attitude {
        self.get().attitude
    }

    fn manual_control(&self) -> ManualControl {
        self.get().manual_control
    }

    fn battery_state(&self) -> Option<BatteryState> {
        self.get().battery_state
    }

    fn battery_settings(&self) -> Option<BatterySettings> {
        self.get().battery_settings
    }

    fn baro_available(&self) -> bool {
        self.get().baro_available
    }

    fn gps_position(&self) -> Option<GpsPosition> {
        self.get().gps_position
    }
}

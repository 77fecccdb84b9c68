//! MSP bridge firmware for RP2040.
//!
//! This crate provides the embedded side of the MSP bridge: a UART port
//! the bridge can own, and the flight-state store it reads from.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Opens the shared serial port at 115200 baud, 8N1
//! 2. Answers MSP requests from an OSD or telemetry radio
//! 3. Gives the port to the native telemetry link as soon as its frame
//!    signature appears on the line
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | Serial transmit (MSP responses) |
//! | UART1 RX | 9    | Serial receive (MSP requests) |
//!
//! # Architecture
//!
//! Two Embassy tasks share the port, one after the other:
//!
//! - **MSP Task**: Owns the port and runs [`MspBridge`] until a handoff
//! - **Telemetry Task**: Waits for the port on a
//!   [`Signal`](embassy_sync::signal::Signal) and owns it from then on. A
//!   refused start-up signals the port right away.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`msp-bridge`** (default): Admin state of the bridge; without it the port
//!   goes straight to the telemetry link

#![no_std]

// Ensure exactly one panic strategy
#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features");

pub use msp_bridge::{
    Handoff, ModuleState, MspBridge, Rejected, SerialChannel, StartError, TelemetrySnapshot,
    TelemetrySource,
};

pub mod flight_state;
pub mod uart;

pub use flight_state::FlightState;
pub use uart::UartChannel;

/// Admin state of the bridge, fixed at build time.
#[cfg(feature = "msp-bridge")]
pub const MODULE_STATE: ModuleState = ModuleState::Enabled;

/// Admin state of the bridge, fixed at build time.
#[cfg(not(feature = "msp-bridge"))]
pub const MODULE_STATE: ModuleState = ModuleState::Disabled;

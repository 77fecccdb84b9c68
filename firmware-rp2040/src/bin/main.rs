#![no_std]
#![no_main]

use defmt::{info, trace, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use msp_bridge::msp_proto::MSP_BAUDRATE;
use msp_bridge_rp2040::{
    FlightState, MspBridge, SerialChannel, TelemetrySnapshot, UartChannel, MODULE_STATE,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

type PortSignal = Signal<CriticalSectionRawMutex, UartChannel<'static>>;
type Bridge = MspBridge<UartChannel<'static>, &'static FlightState>;

/// Hands the shared port from the MSP task to the telemetry task, once.
static TELEMETRY_PORT: StaticCell<PortSignal> = StaticCell::new();

/// Flight state read by the bridge.
static FLIGHT_STATE: StaticCell<FlightState> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("MSP bridge firmware starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let port = TELEMETRY_PORT.init(Signal::new());
    let flight_state: &'static FlightState =
        FLIGHT_STATE.init(FlightState::new(TelemetrySnapshot::default()));

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = MSP_BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let channel = UartChannel::new(uart);

    match MspBridge::start(MODULE_STATE, Some(channel), flight_state) {
        Ok(bridge) => spawner.spawn(msp_task(bridge, port).unwrap()),
        Err(rejected) => {
            warn!("MSP bridge not started: {:?}", rejected.error);
            if let Some(channel) = rejected.channel {
                port.signal(channel);
            }
        }
    }
    spawner.spawn(telemetry_task(port).unwrap());

    info!("MSP bridge initialized, waiting for requests...");
}

/// MSP task - answers requests until the telemetry link shows up, then
/// publishes the port and ends.
#[embassy_executor::task]
async fn msp_task(bridge: Bridge, port: &'static PortSignal) {
    let handoff = bridge.run().await;
    port.signal(handoff.channel);
}

/// Telemetry task - owns the port from the handoff on.
#[embassy_executor::task]
async fn telemetry_task(port: &'static PortSignal) {
    let mut channel = port.wait().await;
    info!("Telemetry link owns the shared port");

    // Until the telemetry stack is attached here, incoming bytes are drained.
    loop {
        match channel.read_byte().await {
            Ok(byte) => trace!("telemetry rx {=u8:#04x}", byte),
            Err(e) => warn!("Telemetry port error: {:?}", e),
        }
    }
}

//! UART port implementing [`SerialChannel`].

use embassy_rp::uart::{Async, Error as UartError, Uart};
use msp_bridge::{ChannelError, SerialChannel};

/// UART-based channel owned by whichever task currently holds the port.
///
/// # Pins
///
/// Uses UART1 by default:
/// - GPIO 8: TX
/// - GPIO 9: RX
pub struct UartChannel<'d> {
    uart: Uart<'d, Async>,
}

impl<'d> UartChannel<'d> {
    /// Wrap a configured UART.
    pub fn new(uart: Uart<'d, Async>) -> Self {
        Self { uart }
    }
}

impl SerialChannel for UartChannel<'_> {
    async fn read_byte(&mut self) -> Result<u8, ChannelError> {
        let mut byte = [0u8; 1];
        self.uart.read(&mut byte).await.map_err(channel_error)?;
        Ok(byte[0])
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), ChannelError> {
        self.uart.write(bytes).await.map_err(channel_error)
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<(), ChannelError> {
        self.uart.set_baudrate(baud);
        Ok(())
    }
}

/// Map UART errors onto the channel's error type.
fn channel_error(e: UartError) -> ChannelError {
    match e {
        UartError::Framing => ChannelError::Framing,
        UartError::Overrun => ChannelError::Overrun,
        _ => ChannelError::Io,
    }
}

//! # Port Module
//!
//! This module provides the serial port side of the monitor: settings,
//! opening the device and the background task that reads whatever the
//! receiver has produced and forwards it as text chunks.

use log::{debug, info, warn};
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_serial::SerialPortBuilderExt;
pub use tokio_serial::{DataBits, FlowControl, Parity, SerialStream, StopBits};

use crate::error::{MonitorError, Result};

/// Baud rates commonly offered by serial hardware.
pub const COMMON_BAUD_RATES: &[u32] = &[
    4800, 9600, 19200, 38400, 57600, 115200, 230400, 460800, 500000, 576000, 921600, 1000000,
    1500000, 2000000,
];

/// Serial port settings for the UM982 link.
#[derive(Clone, Debug)]
pub struct PortSettings {
    pub port_name: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    pub timeout: Duration,
    /// How often the monitor polls the decoder and prints a report.
    pub poll_interval: Duration,
}

impl Default for PortSettings {
    fn default() -> Self {
        PortSettings {
            port_name: String::from("/dev/ttyACM0"),
            baud_rate: 921600,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
            timeout: Duration::from_micros(500),
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl PortSettings {
    /// Settings for a given device path and baud rate, 8N1 otherwise.
    #[must_use]
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        PortSettings {
            port_name: port_name.into(),
            baud_rate,
            ..PortSettings::default()
        }
    }

    /// Rejects settings the port or the loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.port_name.is_empty() {
            return Err(MonitorError::invalid_config("port name must not be empty"));
        }
        if self.baud_rate == 0 {
            return Err(MonitorError::invalid_config("baud rate must be non-zero"));
        }
        if self.poll_interval.is_zero() {
            return Err(MonitorError::invalid_config(
                "poll interval must be non-zero",
            ));
        }
        if !COMMON_BAUD_RATES.contains(&self.baud_rate) {
            warn!("Unusual baud rate: {}", self.baud_rate);
        }
        Ok(())
    }
}

/// Data flowing from the reader task to the monitor loop.
#[derive(Clone, Debug)]
pub enum PortEvent {
    /// Text read from the serial port, lossily decoded as UTF-8.
    Read(String),
    /// The reader task stopped on a read error.
    Disconnected(String),
}

/// Opens the serial port described by `settings`.
pub async fn open_port(settings: &PortSettings) -> Result<SerialStream> {
    match tokio_serial::new(settings.port_name.clone(), settings.baud_rate)
        .data_bits(settings.data_bits)
        .parity(settings.parity)
        .stop_bits(settings.stop_bits)
        .flow_control(settings.flow_control)
        .timeout(settings.timeout)
        .open_native_async()
    {
        Ok(stream) => {
            info!(
                "Opened serial port {} at {} baud",
                settings.port_name, settings.baud_rate
            );
            Ok(stream)
        }
        Err(e) => Err(MonitorError::port_open(
            settings.port_name.clone(),
            e.to_string(),
        )),
    }
}

/// Spawns the task that owns the stream and forwards everything it reads.
///
/// The task ends when the port stops being readable or the receiving side
/// of the channel is dropped.
pub fn spawn_reader(mut stream: SerialStream, tx: mpsc::Sender<PortEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Read port");
        let mut buffer: [u8; 1024] = [0; 1024];
        loop {
            match stream.read(&mut buffer[..]).await {
                Ok(0) => continue,
                Ok(n) => {
                    debug!("Read {} bytes", n);
                    let text = String::from_utf8_lossy(&buffer[..n]).to_string();
                    if tx.send(PortEvent::Read(text)).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Serial read failed: {}", e);
                    let _ = tx.send(PortEvent::Disconnected(e.to_string())).await;
                    break;
                }
            }
        }
    })
}

//! # Monitor Module
//!
//! This module ties the pieces together: a reader task feeding text chunks
//! over a channel, a decoder consuming them, and a fixed-interval loop that
//! prints one report per tick.

use log::{info, warn};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::decode::SolutionDecoder;
use crate::error::{MonitorError, Result};
use crate::port::{open_port, spawn_reader, PortEvent, PortSettings};
use crate::report;

/// Capacity of the reader-to-loop channel.
const CHANNEL_CAPACITY: usize = 100;

/// The UM982 driver loop.
///
/// Owns the decoder; the serial stream is owned by the reader task spawned
/// in [`run`](Monitor::run).
pub struct Monitor<D: SolutionDecoder> {
    settings: PortSettings,
    decoder: D,
}

impl<D: SolutionDecoder> Monitor<D> {
    /// Creates a monitor after validating the settings.
    pub fn new(settings: PortSettings, decoder: D) -> Result<Self> {
        settings.validate()?;
        Ok(Monitor { settings, decoder })
    }

    /// Current decoder state.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Opens the port and polls forever.
    ///
    /// Returns only on a fatal error: the port could not be opened, the
    /// link went away, or the reader task died.
    pub async fn run(mut self) -> Result<()> {
        let stream = open_port(&self.settings).await?;
        let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
        let reader = spawn_reader(stream, tx);

        let mut ticker = tokio::time::interval(self.settings.poll_interval);
        let result = loop {
            ticker.tick().await;
            match self.poll_once(&mut rx) {
                Ok(block) => println!("{}", block),
                Err(e) => break Err(e),
            }
        };

        reader.abort();
        info!("Monitor stopped");
        result
    }

    /// One iteration: drain everything the reader has produced, feed it to
    /// the decoder in arrival order, then render a report.
    ///
    /// A report is produced even when nothing arrived; decode success is
    /// never validated before reporting.
    pub fn poll_once(&mut self, rx: &mut mpsc::Receiver<PortEvent>) -> Result<String> {
        loop {
            match rx.try_recv() {
                Ok(PortEvent::Read(text)) => self.decoder.decode(&text),
                Ok(PortEvent::Disconnected(reason)) => {
                    warn!("Serial link lost: {}", reason);
                    return Err(MonitorError::port_read(reason));
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(MonitorError::channel("reader task is gone"));
                }
            }
        }
        Ok(report::render(self.decoder.solution()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Solution;

    /// Decoder that records every chunk it was fed.
    #[derive(Default)]
    struct ScriptedDecoder {
        seen: Vec<String>,
        solution: Solution,
    }

    impl SolutionDecoder for ScriptedDecoder {
        fn decode(&mut self, text: &str) {
            self.seen.push(text.to_string());
        }

        fn solution(&self) -> &Solution {
            &self.solution
        }
    }

    fn monitor_with(solution: Solution) -> Monitor<ScriptedDecoder> {
        let decoder = ScriptedDecoder {
            seen: vec![],
            solution,
        };
        Monitor::new(PortSettings::default(), decoder).unwrap()
    }

    #[tokio::test]
    async fn test_poll_drains_chunks_in_order() {
        let mut monitor = monitor_with(Solution::default());
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(PortEvent::Read("#BESTNAVA".into())).await.unwrap();
        tx.send(PortEvent::Read(",97,GPS;".into())).await.unwrap();

        monitor.poll_once(&mut rx).unwrap();
        assert_eq!(monitor.decoder().seen, vec!["#BESTNAVA", ",97,GPS;"]);
    }

    #[tokio::test]
    async fn test_poll_reports_without_input() {
        let mut monitor = monitor_with(Solution::default());
        let (_tx, mut rx) = mpsc::channel::<PortEvent>(8);

        let block = monitor.poll_once(&mut rx).unwrap();
        assert!(block.contains("Latitude and Longitude is: n/a, n/a"));
        assert!(monitor.decoder().seen.is_empty());
    }

    #[tokio::test]
    async fn test_poll_reports_decoder_fields() {
        let solution = Solution {
            bestpos_lat: Some(31.2304),
            heading: Some(90.0),
            ..Solution::default()
        };
        let mut monitor = monitor_with(solution);
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(PortEvent::Read("$GNGGA".into())).await.unwrap();

        let block = monitor.poll_once(&mut rx).unwrap();
        assert!(block.contains("31.2304"));
        assert!(block.contains("heading is: 90"));
    }

    #[tokio::test]
    async fn test_disconnect_event_is_fatal() {
        let mut monitor = monitor_with(Solution::default());
        let (tx, mut rx) = mpsc::channel(8);
        tx.send(PortEvent::Read("partial".into())).await.unwrap();
        tx.send(PortEvent::Disconnected("device unplugged".into()))
            .await
            .unwrap();

        let err = monitor.poll_once(&mut rx).unwrap_err();
        assert!(matches!(err, MonitorError::PortRead(_)));
        // the chunk before the disconnect still reached the decoder
        assert_eq!(monitor.decoder().seen, vec!["partial"]);
    }

    #[tokio::test]
    async fn test_closed_channel_is_fatal() {
        let mut monitor = monitor_with(Solution::default());
        let (tx, mut rx) = mpsc::channel::<PortEvent>(8);
        drop(tx);

        let err = monitor.poll_once(&mut rx).unwrap_err();
        assert!(matches!(err, MonitorError::Channel(_)));
    }

    #[tokio::test]
    async fn test_invalid_settings_are_rejected() {
        let settings = PortSettings::new("/dev/ttyACM0", 0);
        let result = Monitor::new(settings, ScriptedDecoder::default());
        assert!(result.is_err());
    }
}

use clap::Parser;
use log::info;
use std::time::Duration;

use um982_monitor::prelude::*;

/// Serial driver loop for the Unicore UM982 GNSS receiver.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Serial device the receiver is attached to.
    #[arg(long, default_value = "/dev/ttyACM0")]
    port: String,

    /// Baud rate of the serial link.
    #[arg(long, default_value_t = 921600)]
    baud: u32,

    /// Poll interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = PortSettings::new(cli.port, cli.baud);
    settings.poll_interval = Duration::from_millis(cli.interval_ms);

    // A real UM982 protocol decoder plugs in here.
    let monitor = Monitor::new(settings, NullDecoder::new())?;

    tokio::select! {
        result = monitor.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    }
}

use std::error::Error;

use btcore_uuid::{BluetoothUuidExt, BtUuid};
use tracing::{info, metadata::LevelFilter, warn};

fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        warn!("usage: parse <uuid>...");
        return Ok(());
    }

    for arg in &args {
        let uuid = match arg.parse::<BtUuid>() {
            Ok(uuid) => uuid,
            Err(err) => {
                warn!("{arg}: {err}");
                continue;
            }
        };

        if uuid.is_empty() {
            info!("{uuid}: empty");
        } else if uuid.is_u16_uuid() {
            info!("{uuid}: 16-bit 0x{:04x}", uuid.to_uuid16()?);
        } else if let Ok(short) = uuid.to_uuid32() {
            info!("{uuid}: 32-bit 0x{short:08x}");
        } else {
            info!("{uuid}: 128-bit");
        }
    }

    Ok(())
}

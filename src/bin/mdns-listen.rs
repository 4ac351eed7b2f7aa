//! Prints the Multicast DNS messages seen on the local network.
//!
//! Usage: `mdns-listen [INTERFACE] [--resolve-compression]`
//!
//! Joins the Multicast DNS group on the given interface, either its name
//! or one of its IPv4 addresses, or on one chosen by the operating system
//! if none is given, and
//! prints every message received in dig style until interrupted. Use the
//! RUST_LOG environment variable to see messages that fail to decode.
use std::net::Ipv4Addr;
use std::ops::ControlFlow;
use std::process::ExitCode;
use std::{env, io};

use mdns_decode::logging::init_logging;
use mdns_decode::net::{Config, Listener};
use mdns_decode::Decoder;
use tracing::{error, info};

fn usage() -> ExitCode {
    eprintln!("Usage: mdns-listen [INTERFACE] [--resolve-compression]");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let mut config = Config::new();
    let mut decoder = Decoder::new();
    for arg in env::args().skip(1) {
        if arg == "--resolve-compression" {
            decoder = decoder.resolve_compression(true);
        } else if arg == "-h" || arg == "--help" {
            return usage();
        } else {
            match arg.parse::<Ipv4Addr>() {
                Ok(addr) => config.set_interface(addr),
                Err(_) => {
                    if let Err(err) = config.set_interface_name(&arg) {
                        eprintln!("Invalid interface '{}': {}", arg, err);
                        return usage();
                    }
                }
            }
        }
    }
    config.set_decoder(decoder);

    let listener = match Listener::bind(config) {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to set up listener: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "listening on {}:{}",
        listener.config().group(),
        listener.config().port()
    );

    let res: io::Result<()> = tokio::select! {
        res = listener.run(|msg| {
            println!("{}", msg.display_dig_style());
            ControlFlow::Continue(())
        }) => res,
        _ = tokio::signal::ctrl_c() => Ok(()),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("receiving failed: {}", err);
            eprintln!("Receiving failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

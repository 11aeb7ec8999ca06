//! samplerctl CLI
//!
//! Command-line client for a LinuxSampler LSCP server.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use samplerctl::{Config, LscpClient, ParamValue};

/// samplerctl CLI
#[derive(Parser, Debug)]
#[command(name = "samplerctl-cli")]
#[command(about = "CLI for the LinuxSampler Control Protocol")]
#[command(version)]
struct Args {
    /// Server host name or address
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server TCP port
    #[arg(short, long, default_value = "8888")]
    port: u16,

    /// Socket timeout in seconds
    #[arg(short, long, default_value = "5")]
    timeout: u64,

    /// Treat WRN responses as errors
    #[arg(short = 'W', long)]
    warnings_as_errors: bool,

    /// Enable debug logging of wire traffic
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a raw protocol line and print the reply
    Raw {
        /// The protocol line to send, e.g. "GET CHANNELS"
        query: String,

        /// Expect a multi-line reply (terminated by a lone '.')
        #[arg(short, long)]
        multiline: bool,
    },

    /// Print general server information
    ServerInfo,

    /// Print the number of sampler channels
    Channels,

    /// List all sampler channel indices
    ListChannels,

    /// Add a sampler channel and print its index
    AddChannel,

    /// Remove a sampler channel
    RemoveChannel {
        /// Index of the channel to remove
        channel: u32,
    },

    /// List available sampler engines
    Engines,

    /// Print detailed information about an engine
    EngineInfo {
        /// Engine name (from `engines`)
        engine: String,
    },

    /// List available audio output drivers
    AudioDrivers,

    /// List available MIDI input drivers
    MidiDrivers,

    /// Reset the whole sampler instance
    Reset,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.debug {
        "info,samplerctl=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .timeout(Duration::from_secs(args.timeout))
        .warnings_as_errors(args.warnings_as_errors)
        .build();

    let mut client = LscpClient::new(config);

    if let Err(e) = run(&mut client, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &mut LscpClient, command: Commands) -> samplerctl::Result<()> {
    match command {
        Commands::Raw { query, multiline } => match client.query(&query, multiline)? {
            samplerctl::Outcome::Success { index: Some(i) } => println!("OK[{i}]"),
            samplerctl::Outcome::Success { index: None } => println!("OK"),
            samplerctl::Outcome::Warning { code, message, .. } => {
                println!("WRN {code}: {message}")
            }
            samplerctl::Outcome::Payload { lines } => {
                for line in lines {
                    println!("{line}");
                }
            }
        },
        Commands::ServerInfo => print_params(client.get_server_info()?),
        Commands::Channels => println!("{}", client.get_channels()?),
        Commands::ListChannels => {
            for channel in client.list_channels()? {
                println!("{channel}");
            }
        }
        Commands::AddChannel => println!("{}", client.add_channel()?),
        Commands::RemoveChannel { channel } => {
            client.remove_channel(channel)?;
            println!("removed channel {channel}");
        }
        Commands::Engines => {
            for engine in client.list_available_engines()? {
                println!("{engine}");
            }
        }
        Commands::EngineInfo { engine } => print_params(client.get_engine_info(&engine)?),
        Commands::AudioDrivers => {
            for driver in client.list_available_audio_output_drivers()? {
                println!("{driver}");
            }
        }
        Commands::MidiDrivers => {
            for driver in client.list_available_midi_input_drivers()? {
                println!("{driver}");
            }
        }
        Commands::Reset => {
            client.reset()?;
            println!("sampler reset");
        }
    }

    Ok(())
}

/// Print a decoded parameter block, one `name = value` pair per line
fn print_params(params: samplerctl::ParamMap) {
    for (name, value) in params.iter() {
        match value {
            ParamValue::Str(s) => println!("{name} = '{s}'"),
            other => println!("{name} = {other}"),
        }
    }
}

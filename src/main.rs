//! serial-chat - terminal chat over a serial port
//!
//! Lines typed on stdin are sent with the current send type; received chunks are shown with
//! the current receive type. Lines starting with `:` are shell commands:
//!
//! - `:recv <Tag>` / `:send <Tag>`: change the receive or send type
//! - `:auto on|off`: toggle the auto-response
//! - `:auto-text <text>`: set the auto-response text
//! - `:types`: list the type tags
//! - `:quit`: exit
//!
//! # Configuration
//!
//! Settings come from `--config <file>` (TOML, see `serial_chat::config`) with command-line
//! flags taking priority. `RUST_LOG` controls diagnostics; `--debug` is a shortcut for
//! `RUST_LOG=debug`.

use anyhow::{bail, Result};
use clap::Parser;
use serial_chat::config::ChatConfig;
use serial_chat::port::{available_port_names, PortSink, SerialLink};
use serial_chat::session::{Event, LogLine, LogSink, Mode, Session};
use serial_chat::DataType;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing_subscriber::EnvFilter;

/// Chat with a device over a serial port
#[derive(Parser, Debug)]
#[command(name = "serial-chat")]
#[command(version, about, long_about = None)]
struct Args {
    /// List available serial ports and exit
    #[arg(short, long)]
    list: bool,

    /// Serial port to open
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long)]
    baud: Option<u32>,

    /// Type used to display received data
    #[arg(long, value_name = "TAG")]
    receive_type: Option<DataType>,

    /// Type used to encode sent messages
    #[arg(long, value_name = "TAG")]
    send_type: Option<DataType>,

    /// Reply with this message whenever data arrives
    #[arg(long, value_name = "TEXT")]
    auto_response: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, PartialEq)]
enum ShellCommand {
    Send(String),
    ReceiveType(DataType),
    SendType(DataType),
    Auto(Mode),
    AutoText(String),
    Types,
    Quit,
}

fn parse_command(line: &str) -> Result<ShellCommand> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(ShellCommand::Send(line.to_string()));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    Ok(match name {
        "recv" => ShellCommand::ReceiveType(arg.parse()?),
        "send" => ShellCommand::SendType(arg.parse()?),
        "auto" => match arg {
            "on" => ShellCommand::Auto(Mode::AutoResponse),
            "off" => ShellCommand::Auto(Mode::Manual),
            other => bail!("expected 'on' or 'off', got '{}'", other),
        },
        "auto-text" => ShellCommand::AutoText(arg.to_string()),
        "types" => ShellCommand::Types,
        "quit" | "q" => ShellCommand::Quit,
        other => bail!("unknown command ':{}'", other),
    })
}

struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn append_line(&mut self, line: LogLine) {
        println!("{}", line);
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn load_config(args: &Args) -> Result<ChatConfig> {
    let mut config = match &args.config {
        Some(path) => ChatConfig::load(path)?,
        None => ChatConfig::default(),
    };

    if let Some(port) = &args.port {
        config.port.name = port.clone();
    }
    if let Some(baud) = args.baud {
        config.port.baud_rate = baud;
    }
    if let Some(ty) = args.receive_type {
        config.session.receive_type = ty;
    }
    if let Some(ty) = args.send_type {
        config.session.send_type = ty;
    }
    if let Some(text) = &args.auto_response {
        config.session.auto_response = text.clone();
        config.session.mode = Mode::AutoResponse;
    }
    Ok(config)
}

/// Feeds one port read into the session. Returns `false` once the port has failed.
fn deliver<P: PortSink, L: LogSink>(
    session: &mut Session<P, L>,
    read: serial_chat::Result<Vec<u8>>,
) -> bool {
    match read {
        Ok(chunk) => {
            if let Err(e) = session.handle(Event::DataAvailable(chunk)) {
                eprintln!("Auto-response failed: {}", e);
            }
            true
        }
        Err(e) => {
            eprintln!("Read failed: {}", e);
            tracing::warn!(error = %e, "closing session after port read error");
            false
        }
    }
}

fn run(config: ChatConfig) -> Result<()> {
    let link = SerialLink::open(&config.port)?;
    println!(
        "Connected to {} (receive {}, send {}). Type :quit to exit.",
        link.name(),
        config.session.receive_type,
        config.session.send_type
    );

    let mut session = Session::new(link, ConsoleLog, config.session);
    let input = spawn_stdin_reader();

    loop {
        match input.try_recv() {
            Ok(line) => match parse_command(&line) {
                Ok(ShellCommand::Send(text)) => {
                    if let Err(e) = session.handle(Event::SendRequested(text)) {
                        eprintln!("Send failed: {}", e);
                    }
                }
                Ok(ShellCommand::ReceiveType(ty)) => session.set_receive_type(ty),
                Ok(ShellCommand::SendType(ty)) => session.set_send_type(ty),
                Ok(ShellCommand::Auto(mode)) => session.set_mode(mode),
                Ok(ShellCommand::AutoText(text)) => session.set_auto_response(&text),
                Ok(ShellCommand::Types) => {
                    for ty in DataType::ALL {
                        println!("  {}", ty);
                    }
                }
                Ok(ShellCommand::Quit) => break,
                Err(e) => eprintln!("{}", e),
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        // Blocks for at most the port read timeout
        let read = session.port_mut().read_available();
        if !deliver(&mut session, read) {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.list {
        for name in available_port_names()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = load_config(&args)?;
    if config.port.name.is_empty() {
        bail!("no serial port given; use --port or list ports with --list");
    }
    run(config)
}

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use events::{Event, Payload};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket closed")]
    WsClosed,
    #[error("event decode failed: {0}")]
    Decode(#[from] events::CodecError),
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sketchroom-cli", about = "Sketchroom headless room client")]
struct Cli {
    #[arg(long, env = "SKETCHROOM_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "SKETCHROOM_ROOM")]
    room: String,

    #[arg(long, env = "SKETCHROOM_USERNAME", default_value = "cli")]
    username: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one chat message to the room and exit.
    Send { message: String },
    /// Print room events until interrupted.
    Tail,
    /// Send each input line as a chat message.
    Stream {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut stream = connect(&cli.base_url, &cli.room).await?;
    match cli.command {
        Command::Send { ref message } => run_send(&mut stream, &cli, message).await,
        Command::Tail => run_tail(&mut stream, &cli.room).await,
        Command::Stream { ref input } => run_stream(&mut stream, &cli, input).await,
    }
}

async fn connect(base_url: &str, room: &str) -> Result<WsStream, CliError> {
    let url = ws_url(base_url, room)?;
    let (stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    Ok(stream)
}

async fn run_send(stream: &mut WsStream, cli: &Cli, message: &str) -> Result<(), CliError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        eprintln!("skipping empty message");
        return Ok(());
    }

    send_chat(stream, cli, trimmed).await?;
    eprintln!("sent 1 message to room {}", cli.room);
    Ok(())
}

async fn run_tail(stream: &mut WsStream, room: &str) -> Result<(), CliError> {
    loop {
        let event = recv_next(stream).await?;
        if event.room_id != room && !event.room_id.is_empty() {
            continue;
        }

        let from = event.from.as_deref().unwrap_or("anonymous");
        match &event.payload {
            Payload::Chat { message } => {
                println!("[{}] {from}: {message}", event.ts);
            }
            Payload::DrawingStart { stroke_id, .. } => {
                println!("[{}] {from} started stroke {stroke_id}", event.ts);
            }
            // Individual points are too noisy to print.
            Payload::Drawing { .. } => {}
            Payload::DrawingEnd { stroke_id } => {
                println!("[{}] {from} finished stroke {stroke_id}", event.ts);
            }
        }
    }
}

async fn run_stream(stream: &mut WsStream, cli: &Cli, input: &str) -> Result<(), CliError> {
    let mut reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    let mut sent = 0_usize;
    let mut skipped = 0_usize;
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            skipped = skipped.saturating_add(1);
            continue;
        }

        send_chat(stream, cli, trimmed).await?;
        sent = sent.saturating_add(1);
    }

    eprintln!(
        "stream complete: room={} sent={sent} skipped={skipped}",
        cli.room
    );
    Ok(())
}

async fn send_chat(stream: &mut WsStream, cli: &Cli, message: &str) -> Result<(), CliError> {
    let event = chat_event(&cli.room, &cli.username, message);
    stream
        .send(Message::Binary(events::encode_event(&event).into()))
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    Ok(())
}

async fn recv_next(stream: &mut WsStream) -> Result<Event, CliError> {
    loop {
        let Some(message) = stream.next().await else {
            return Err(CliError::WsClosed);
        };
        match message.map_err(|error| CliError::WsConnect(Box::new(error)))? {
            Message::Binary(bytes) => {
                return events::decode_event(&bytes).map_err(CliError::from);
            }
            Message::Close(_) => return Err(CliError::WsClosed),
            _ => {}
        }
    }
}

fn chat_event(room: &str, username: &str, message: &str) -> Event {
    Event {
        id: Uuid::new_v4().to_string(),
        ts: now_ms(),
        room_id: room.to_owned(),
        from: Some(username.to_owned()),
        payload: Payload::Chat {
            message: message.to_owned(),
        },
    }
}

fn ws_url(base_url: &str, room: &str) -> Result<String, CliError> {
    let trimmed = base_url.trim_end_matches('/');
    if let Some(rest) = trimmed.strip_prefix("http://") {
        return Ok(format!("ws://{rest}/ws/{room}"));
    }
    if let Some(rest) = trimmed.strip_prefix("https://") {
        return Ok(format!("wss://{rest}/ws/{room}"));
    }
    if trimmed.starts_with("ws://") || trimmed.starts_with("wss://") {
        return Ok(format!("{trimmed}/ws/{room}"));
    }

    Err(CliError::InvalidBaseUrl(base_url.to_owned()))
}

fn now_ms() -> i64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

//! Line-delimited JSON transport over stdin/stdout.
//!
//! The UI process is spawned by a privileged parent which owns the device
//! and updater plumbing. Frames travel one JSON object per line:
//!
//! - stdin: plain envelopes for the `"msg"` inbound channel
//! - stdout: envelopes wrapped with the outbound channel name, so the
//!   parent can demultiplex `"usb"` requests from self-addressed `"msg"`
//!   sends

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;

use crate::ipc::channel::{ChannelReceiver, ChannelSender};
use crate::ipc::envelope::Envelope;

/// An outbound envelope tagged with its channel name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub channel: String,
    #[serde(flatten)]
    pub envelope: Envelope,
}

/// Serialize one outbound frame to a line.
pub fn encode_frame(channel: &str, envelope: &Envelope) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Frame {
        channel: channel.to_string(),
        envelope: envelope.clone(),
    })
}

/// Parse one inbound line into an envelope.
pub fn decode_line(line: &str) -> Result<Envelope, serde_json::Error> {
    serde_json::from_str(line)
}

/// Pump stdin lines into the inbound channel until EOF.
///
/// Unparseable lines are logged and skipped; the stream stays up.
pub fn spawn_stdin_reader(inbound: ChannelSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match decode_line(line) {
                        Ok(envelope) => inbound.send(envelope),
                        Err(e) => {
                            tracing::warn!(error = %e, "Skipping unparseable inbound line");
                        }
                    }
                }
                Ok(None) => {
                    tracing::info!("stdin closed, inbound transport stopping");
                    break;
                }
                Err(e) => {
                    tracing::error!(error = %e, "stdin read failed, inbound transport stopping");
                    break;
                }
            }
        }
    })
}

/// Drain both outbound channels to stdout, one framed line per envelope.
pub fn spawn_stdout_writer(
    mut usb: ChannelReceiver,
    mut msg: ChannelReceiver,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut out = tokio::io::stdout();
        loop {
            let (channel, envelope) = tokio::select! {
                env = usb.recv() => match env {
                    Some(env) => (usb.name(), env),
                    None => break,
                },
                env = msg.recv() => match env {
                    Some(env) => (msg.name(), env),
                    None => break,
                },
            };

            let line = match encode_frame(channel, &envelope) {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode outbound frame");
                    continue;
                }
            };

            if out.write_all(line.as_bytes()).await.is_err()
                || out.write_all(b"\n").await.is_err()
                || out.flush().await.is_err()
            {
                tracing::error!("stdout write failed, outbound transport stopping");
                break;
            }
        }
    })
}

/// ----- EVENT LOG MODULE -----
/// This module owns the append-only event log. It spawns the writer
/// thread, hands back a sink for the dispatcher to record through, and
/// stamps each line with the wall-clock time before it hits the file.

use std::fs::File;
use std::io::Write;
use std::thread::{spawn, JoinHandle};

use chrono::Local;
use crossbeam_channel::{unbounded, Sender};

/// Injected capability for recording dispatch events. The dispatcher
/// formats the event text; timestamps and persistence belong to
/// whoever holds the other end.
pub trait EventSink {
    fn record(&mut self, message: &str);
}

/// Forwards events to whichever thread holds the receiving end. Tests
/// keep the receiver themselves to capture events in memory.
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: Sender<String>) -> Self {
        ChannelSink { tx: tx }
    }
}

impl EventSink for ChannelSink {
    fn record(&mut self, message: &str) {
        self.tx.send(String::from(message)).unwrap();
    }
}

/// Starts the event log writer thread and returns the sink feeding it.
/// The log file is recreated on every launch. Failures to create or
/// write the file are reported and skipped; dispatching never depends
/// on them. The thread exits once every sink is dropped.
pub fn init(file_path: String) -> (ChannelSink, JoinHandle<()>) {
    let (event_tx, event_rx) = unbounded::<String>();

    let handle = spawn(move || {
        let mut file = match File::create(&file_path) {
            Ok(file) => file,
            Err(_) => {
                println!("could not create event log {}, events will be dropped...", file_path);
                for _ in event_rx.iter() {}
                return
            },
        };
        for message in event_rx.iter() {
            let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
            if writeln!(file, "{}", line).is_err() {
                println!("could not write to event log, skipping...");
            }
        }
    });

    (ChannelSink::new(event_tx), handle)
}

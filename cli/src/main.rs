use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use light_img_core::{BatchOptimizer, ProgressObserver};

mod cli;
mod io;

use cli::Cli;

/// Observer events marshaled from the worker thread back to the invoking
/// thread, which owns the terminal.
enum Event {
    Progress(u8),
    Log(String),
    Done,
}

struct ChannelObserver {
    tx: mpsc::Sender<Event>,
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&mut self, percent: u8) {
        let _ = self.tx.send(Event::Progress(percent));
    }

    fn on_log(&mut self, message: &str) {
        let _ = self.tx.send(Event::Log(message.to_string()));
    }

    fn on_done(&mut self) {
        let _ = self.tx.send(Event::Done);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let files = io::collect_inputs(&cli.inputs, cli.recursive)
        .context("Failed to collect input files")?;

    if files.is_empty() {
        println!("No supported files found.");
        return Ok(());
    }

    println!("Found {} file(s) to process.", files.len());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let config = cli.to_config();
    let (tx, rx) = mpsc::channel();

    // The batch runs sequentially on a dedicated thread; events arrive over
    // the channel in emit order.
    let worker = thread::spawn(move || {
        let optimizer = BatchOptimizer::new(config);
        let mut observer = ChannelObserver { tx };
        optimizer.process(&files, &mut observer);
    });

    for event in rx {
        match event {
            Event::Log(message) => pb.println(message),
            Event::Progress(percent) => pb.set_position(u64::from(percent)),
            Event::Done => break,
        }
    }

    worker
        .join()
        .map_err(|_| anyhow!("worker thread panicked"))?;

    pb.finish_with_message("Done!");

    Ok(())
}

//! CLI logic for the Ministream topology tool.
//!
//! This module contains the core CLI logic for the Ministream topology tool:
//! one-shot rendering of a snapshot file to SVG, and a watch mode that keeps
//! polling the snapshot and re-rendering on each refresh.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, thread, time::Duration};

use log::{info, warn};

use ministream::{MinistreamError, TopologyView};
use ministream_api::{FileSource, Poller};

/// Run the Ministream CLI application
///
/// In one-shot mode this reads the snapshot file, reconciles it against the
/// bootstrap graph, and writes the resulting SVG to the output file. In
/// watch mode it keeps polling and re-rendering until interrupted (or until
/// `--cycles` refreshes have been applied).
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MinistreamError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot decoding errors
/// - Reconciliation errors (one-shot mode; watch mode logs and keeps going)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), MinistreamError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing topology snapshot"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let mut view = TopologyView::new(app_config);
    let mut source = FileSource::new(&args.input);

    if args.watch {
        return run_watch(args, &mut view, source);
    }

    // One-shot: fetch, reconcile, render, write
    view.refresh(&mut source)?;
    let svg = view.render_svg()?;
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Polls the snapshot source and re-renders on each refresh.
///
/// A failed fetch or a rejected snapshot keeps the previously rendered
/// topology on disk; the error is logged and the loop continues. Stopping
/// the poller is the cancellation path.
fn run_watch(
    args: &Args,
    view: &mut TopologyView,
    source: FileSource,
) -> Result<(), MinistreamError> {
    let mut remaining = args.cycles;
    if remaining == Some(0) {
        return Ok(());
    }

    let interval = view.config().poll().interval();
    let interval_secs = interval.as_secs();
    info!(interval_secs; "Watching topology snapshot");

    let mut handle = Poller::spawn(source, interval);

    loop {
        if let Some(result) = handle.take_latest() {
            match result {
                Ok(snapshot) => match view.apply(&snapshot) {
                    Ok(()) => {
                        let svg = view.render_svg()?;
                        fs::write(&args.output, svg)?;
                        info!(output_file = args.output; "Topology refreshed");
                    }
                    Err(err) => warn!(
                        err = err.to_string();
                        "Snapshot rejected, keeping previous topology"
                    ),
                },
                Err(err) => warn!(
                    err = err.to_string();
                    "Snapshot fetch failed, keeping previous topology"
                ),
            }

            if let Some(cycles) = remaining.as_mut() {
                *cycles -= 1;
                if *cycles == 0 {
                    break;
                }
            }
        }

        thread::sleep(Duration::from_millis(25));
    }

    handle.stop();
    Ok(())
}

#![allow(unused_imports)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{anyhow, bail, ensure, Context, Result};
use tracing::{debug, error, info, trace, warn};

use octo_panel::{
    config::AppConfig,
    conn_manager::{
        conn_octoprint::OctoClientLocal,
        worker_message::{WorkerCmd, WorkerMsg},
        StatusWorker,
    },
    logging, ui,
};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let _log_guard = logging::init_logs()?;

    let config = AppConfig::load().context("loading config")?;
    let client = OctoClientLocal::new(&config.octoprint, Some(config.request_timeout()))?;
    info!("polling OctoPrint at {}", client.base_url());

    let (cmd_tx, cmd_rx) = tokio::sync::mpsc::unbounded_channel::<WorkerCmd>();
    let (msg_tx, msg_rx) = tokio::sync::mpsc::unbounded_channel::<WorkerMsg>();
    let (kill_tx, kill_rx) = tokio::sync::oneshot::channel::<()>();

    debug!("spawning tokio runtime");
    let rt = tokio::runtime::Runtime::new().context("building tokio runtime")?;
    let interval = config.poll_interval();
    let worker_thread = std::thread::spawn(move || {
        rt.block_on(async move {
            let mut worker = StatusWorker::new(client, msg_tx, cmd_rx, kill_rx, Some(interval));
            debug!("starting status worker");
            if let Err(e) = worker.run().await {
                error!("error in status worker: {:?}", e);
            }
        });
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 480.0])
            .with_min_inner_size([480.0, 320.0])
            .with_fullscreen(config.fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        "OctoPrint Panel",
        native_options,
        Box::new(move |cc| {
            ui::icons::install_fonts(&cc.egui_ctx);
            Ok(Box::new(ui::app::App::new(config, cmd_tx, msg_rx, kill_tx)))
        }),
    )
    .map_err(|e| anyhow!("eframe error: {}", e))?;

    if worker_thread.join().is_err() {
        error!("status worker panicked");
    }
    info!("exiting");

    Ok(())
}

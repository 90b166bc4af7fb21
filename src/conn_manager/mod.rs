pub mod conn_octoprint;
pub mod worker_message;

use anyhow::{anyhow, bail, ensure, Context, Result};
use tracing::{debug, error, info, trace, warn};

use conn_octoprint::{octo_commands::OctoCmd, OctoClientLocal};
use worker_message::{WorkerCmd, WorkerMsg};

/// Polls printer and job state on a fixed interval and runs job commands
/// sent by the UI. Every request is made from this one loop, so commands
/// and polls never overlap.
pub struct StatusWorker {
    client: OctoClientLocal,
    tx: tokio::sync::mpsc::UnboundedSender<WorkerMsg>,
    cmd_rx: tokio::sync::mpsc::UnboundedReceiver<WorkerCmd>,
    kill_rx: tokio::sync::oneshot::Receiver<()>,
    update_timer: tokio::time::Interval,
}

/// new
impl StatusWorker {
    pub fn new(
        client: OctoClientLocal,
        tx: tokio::sync::mpsc::UnboundedSender<WorkerMsg>,
        cmd_rx: tokio::sync::mpsc::UnboundedReceiver<WorkerCmd>,
        kill_rx: tokio::sync::oneshot::Receiver<()>,
        interval: Option<std::time::Duration>,
    ) -> Self {
        let mut update_timer = if let Some(interval) = interval {
            tokio::time::interval(interval)
        } else {
            tokio::time::interval(std::time::Duration::from_secs(5))
        };
        update_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        Self {
            client,
            tx,
            cmd_rx,
            kill_rx,
            update_timer,
        }
    }
}

/// run
impl StatusWorker {
    /// Returns once the kill signal fires or the UI hangs up.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.update_timer.tick() => {
                    if !self.update().await {
                        info!("UI channel closed, exiting");
                        return Ok(());
                    }
                }
                _ = &mut self.kill_rx => {
                    info!("kill_rx fired, exiting");
                    return Ok(());
                }
                cmd = self.cmd_rx.recv() => {
                    let Some(cmd) = cmd else {
                        info!("cmd channel closed, exiting");
                        return Ok(());
                    };
                    if !self.handle_cmd(cmd).await {
                        info!("UI channel closed, exiting");
                        return Ok(());
                    }
                }
            }
        }
    }

    async fn handle_cmd(&mut self, cmd: WorkerCmd) -> bool {
        match cmd {
            WorkerCmd::Command(cmd) => {
                self.send_command(cmd).await;
                self.update_state().await
            }
            WorkerCmd::Refresh => {
                self.update_timer.reset();
                self.update().await
            }
        }
    }
}

/// updates
impl StatusWorker {
    /// One poll tick. Returns false if the UI is gone.
    pub async fn update(&self) -> bool {
        self.update_state().await && self.update_job().await
    }

    pub async fn update_state(&self) -> bool {
        match self.client.get_printer_state().await {
            Ok(state) => self.send(WorkerMsg::StatusUpdate(state)),
            Err(e) => {
                error!("error getting printer state: {:?}", e);
                true
            }
        }
    }

    pub async fn update_job(&self) -> bool {
        match self.client.get_job_info().await {
            Ok(job) => self.send(WorkerMsg::JobUpdate(job)),
            Err(e) => {
                error!("error getting job info: {:?}", e);
                true
            }
        }
    }

    async fn send_command(&self, cmd: OctoCmd) {
        warn!("{}", cmd.describe());
        if let Err(e) = self.client.send_command(&cmd).await {
            error!("error sending command {:?}: {:?}", cmd, e);
        }
    }

    fn send(&self, msg: WorkerMsg) -> bool {
        self.tx.send(msg).is_ok()
    }
}

use anyhow::{anyhow, bail, ensure, Context, Result};
use tracing::{debug, error, info, trace, warn};

use crate::{
    config::AppConfig,
    conn_manager::{
        conn_octoprint::octo_commands::OctoCmd,
        worker_message::{WorkerCmd, WorkerMsg},
    },
    status::StatusView,
};

use super::icons;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Menu,
    Status,
}

pub struct App {
    pub config: AppConfig,

    pub current_panel: Panel,
    pub history: Vec<Panel>,

    pub status: StatusView,

    cmd_tx: tokio::sync::mpsc::UnboundedSender<WorkerCmd>,
    msg_rx: tokio::sync::mpsc::UnboundedReceiver<WorkerMsg>,
    kill_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl App {
    pub fn new(
        config: AppConfig,
        cmd_tx: tokio::sync::mpsc::UnboundedSender<WorkerCmd>,
        msg_rx: tokio::sync::mpsc::UnboundedReceiver<WorkerMsg>,
        kill_tx: tokio::sync::oneshot::Sender<()>,
    ) -> Self {
        Self {
            config,
            current_panel: Panel::default(),
            history: vec![],
            status: StatusView::default(),
            cmd_tx,
            msg_rx,
            kill_tx: Some(kill_tx),
        }
    }
}

/// channels
impl App {
    pub fn read_channels(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            trace!("got msg: {:?}", msg);
            self.status.update(msg);
        }
    }

    pub fn send_cmd(&self, cmd: OctoCmd) {
        self.send_worker_cmd(WorkerCmd::Command(cmd));
    }

    fn send_worker_cmd(&self, cmd: WorkerCmd) {
        if let Err(e) = self.cmd_tx.send(cmd) {
            error!("failed to send command to worker: {:?}", e);
        }
    }
}

/// navigation
impl App {
    pub fn navigate(&mut self, panel: Panel) {
        if panel == self.current_panel {
            return;
        }
        self.history.push(self.current_panel);
        self.current_panel = panel;

        if panel == Panel::Status {
            self.send_worker_cmd(WorkerCmd::Refresh);
        }
    }

    pub fn go_back(&mut self) {
        if let Some(prev) = self.history.pop() {
            self.current_panel = prev;
        } else {
            debug!("history empty, staying on {:?}", self.current_panel);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(kill_tx) = self.kill_tx.take() {
            let _ = kill_tx.send(());
        }
    }
}

/// MARK: App
impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.read_channels();

        if cfg!(debug_assertions) && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Menu => self.show_menu(ui),
            Panel::Status => self.show_status(ui),
        });

        /// worker messages arrive outside of input events
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl App {
    fn show_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.);
            ui.heading(format!("Printer: {}", self.status.state.to_text()));
            ui.add_space(20.);

            let button = egui::Button::new(icons::icon_status_with_size(64.))
                .min_size(egui::Vec2::splat(96.));
            if ui.add(button).on_hover_text("Status").clicked() {
                self.navigate(Panel::Status);
            }
        });
    }
}

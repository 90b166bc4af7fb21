pub mod format;

use crate::conn_manager::{
    conn_octoprint::octo_types::{
        job::JobResponse,
        printer_status::{Flags, PrinterStatus, Tool},
    },
    worker_message::WorkerMsg,
};

use format::FILENAME_LONG;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrinterState {
    Printing,
    Paused,
    Ready,
    #[default]
    Unknown,
}

impl PrinterState {
    pub fn to_text(&self) -> &'static str {
        match self {
            PrinterState::Printing => "Printing",
            PrinterState::Paused => "Paused",
            PrinterState::Ready => "Ready",
            PrinterState::Unknown => "Unknown",
        }
    }
}

impl From<&Flags> for PrinterState {
    /// first match wins: printing, paused, ready
    fn from(flags: &Flags) -> Self {
        if flags.printing {
            PrinterState::Printing
        } else if flags.paused {
            PrinterState::Paused
        } else if flags.ready {
            PrinterState::Ready
        } else {
            PrinterState::Unknown
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PauseIcon {
    #[default]
    Pause,
    Resume,
}

/// Which job buttons can be pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub print: bool,
    pub pause: bool,
    pub stop: bool,
    pub pause_icon: PauseIcon,
}

impl From<PrinterState> for ControlState {
    fn from(state: PrinterState) -> Self {
        let (print, pause, stop) = match state {
            PrinterState::Printing | PrinterState::Paused => (false, true, true),
            PrinterState::Ready => (true, false, false),
            PrinterState::Unknown => (false, false, false),
        };
        let pause_icon = if state == PrinterState::Paused {
            PauseIcon::Resume
        } else {
            PauseIcon::Pause
        };
        Self {
            print,
            pause,
            stop,
            pause_icon,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TemperatureReading {
    pub actual: f32,
    pub target: Option<f32>,
}

impl TemperatureReading {
    pub fn to_text(&self) -> String {
        format::temperature_text(self.actual, self.target)
    }
}

impl From<&Tool> for TemperatureReading {
    fn from(tool: &Tool) -> Self {
        Self {
            actual: tool.actual,
            target: tool.target,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobProgress {
    /// 0 - 100
    pub completion: f64,
    pub elapsed: chrono::Duration,
    pub left: chrono::Duration,
    pub last_print_time: chrono::Duration,
    pub file_name: Option<String>,
    pub operational: bool,
}

impl From<&JobResponse> for JobProgress {
    fn from(job: &JobResponse) -> Self {
        Self {
            completion: job.progress.completion.unwrap_or_default(),
            elapsed: format::seconds(job.progress.print_time),
            left: format::seconds(job.progress.print_time_left),
            last_print_time: format::seconds(job.job.last_print_time),
            file_name: job.job.file.name.clone().filter(|n| !n.is_empty()),
            operational: job.is_operational(),
        }
    }
}

impl JobProgress {
    pub fn time_text(&self) -> String {
        if self.operational {
            return "Printer is ready".to_string();
        }
        format::time_text(
            self.completion,
            self.elapsed,
            self.left,
            self.last_print_time,
        )
    }

    pub fn fraction(&self) -> f32 {
        (self.completion / 100.0).clamp(0.0, 1.0) as f32
    }
}

/// Everything the status screen shows. Each poll result replaces the
/// matching part wholesale.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatusView {
    pub state: PrinterState,
    pub controls: ControlState,
    pub bed: String,
    pub tool0: String,
    /// already shortened, `None` when no file is selected
    pub file: Option<String>,
    pub time_text: String,
    pub progress: f32,
}

impl StatusView {
    pub fn update(&mut self, msg: WorkerMsg) {
        match msg {
            WorkerMsg::StatusUpdate(status) => self.apply_printer(&status),
            WorkerMsg::JobUpdate(job) => self.apply_job(&job),
        }
    }

    pub fn apply_printer(&mut self, status: &PrinterStatus) {
        self.state = PrinterState::from(&status.state.flags);
        self.controls = ControlState::from(self.state);

        /// labels keep their last value if a probe is missing
        if let Some(bed) = status.temperature.bed.as_ref() {
            self.bed = TemperatureReading::from(bed).to_text();
        }
        if let Some(tool0) = status.temperature.tool(0) {
            self.tool0 = TemperatureReading::from(tool0).to_text();
        }
    }

    pub fn apply_job(&mut self, job: &JobResponse) {
        let progress = JobProgress::from(job);
        let (max, keep) = FILENAME_LONG;

        self.file = progress
            .file_name
            .as_deref()
            .map(|name| format::filename_ellipsis(name, max, keep));
        self.progress = progress.fraction();
        self.time_text = progress.time_text();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conn_manager::conn_octoprint::octo_types::{job, printer_status};

    fn flags(printing: bool, paused: bool, ready: bool) -> Flags {
        Flags {
            operational: true,
            printing,
            paused,
            ready,
            ..Default::default()
        }
    }

    #[test]
    fn flag_priority() {
        assert_eq!(PrinterState::from(&flags(true, true, true)), PrinterState::Printing);
        assert_eq!(PrinterState::from(&flags(false, true, true)), PrinterState::Paused);
        assert_eq!(PrinterState::from(&flags(false, false, true)), PrinterState::Ready);
        assert_eq!(PrinterState::from(&flags(false, false, false)), PrinterState::Unknown);
    }

    #[test]
    fn controls_printing() {
        let c = ControlState::from(PrinterState::Printing);
        assert!(!c.print);
        assert!(c.pause);
        assert!(c.stop);
        assert_eq!(c.pause_icon, PauseIcon::Pause);
    }

    #[test]
    fn controls_paused() {
        let c = ControlState::from(PrinterState::Paused);
        assert!(!c.print);
        assert!(c.pause);
        assert!(c.stop);
        assert_eq!(c.pause_icon, PauseIcon::Resume);
    }

    #[test]
    fn controls_ready() {
        let c = ControlState::from(PrinterState::Ready);
        assert!(c.print);
        assert!(!c.pause);
        assert!(!c.stop);
        assert_eq!(c.pause_icon, PauseIcon::Pause);
    }

    #[test]
    fn controls_unknown() {
        assert_eq!(
            ControlState::from(PrinterState::Unknown),
            ControlState {
                print: false,
                pause: false,
                stop: false,
                pause_icon: PauseIcon::Pause,
            }
        );
    }

    #[test]
    fn resume_icon_resets_after_pause() {
        let mut view = StatusView::default();
        let mut status = PrinterStatus::default();

        status.state.flags = flags(false, true, true);
        view.apply_printer(&status);
        assert_eq!(view.controls.pause_icon, PauseIcon::Resume);

        status.state.flags = flags(true, false, true);
        view.apply_printer(&status);
        assert_eq!(view.controls.pause_icon, PauseIcon::Pause);
    }

    #[test]
    fn printer_temperatures() {
        let mut view = StatusView::default();
        let status = PrinterStatus {
            temperature: printer_status::Temperature {
                tools: vec![
                    (
                        0,
                        Tool {
                            actual: 199.6,
                            target: Some(210.0),
                            offset: None,
                        },
                    ),
                    (
                        1,
                        Tool {
                            actual: 20.0,
                            target: None,
                            offset: None,
                        },
                    ),
                ],
                bed: Some(Tool {
                    actual: 55.4,
                    target: Some(60.0),
                    offset: None,
                }),
            },
            ..Default::default()
        };

        view.apply_printer(&status);
        assert_eq!(view.tool0, "200°C ⇒ 210°C");
        assert_eq!(view.bed, "55°C ⇒ 60°C");

        view.apply_printer(&PrinterStatus::default());
        assert_eq!(view.tool0, "200°C ⇒ 210°C");
        assert_eq!(view.state, PrinterState::Unknown);
    }

    fn job_response(name: Option<&str>, completion: f64, elapsed: f64, left: f64, state: &str) -> JobResponse {
        JobResponse {
            job: job::Job {
                file: job::File {
                    name: name.map(str::to_string),
                    ..Default::default()
                },
                last_print_time: Some(3725.2),
                ..Default::default()
            },
            progress: job::Progress {
                completion: Some(completion),
                print_time: Some(elapsed),
                print_time_left: Some(left),
                ..Default::default()
            },
            state: state.to_string(),
        }
    }

    #[test]
    fn job_in_progress() {
        let mut view = StatusView::default();
        view.apply_job(&job_response(Some("benchy.gcode"), 25.0, 600.0, 1800.0, "Printing"));

        assert_eq!(view.file.as_deref(), Some("benchy.gcode"));
        assert_eq!(view.progress, 0.25);
        assert_eq!(view.time_text, "Elapsed: 10m0s / Left: 30m0s");
    }

    #[test]
    fn job_completed_and_long_name() {
        let mut view = StatusView::default();
        let name = "a_really_long_file_name_for_a_print_job.gcode";
        view.apply_job(&job_response(Some(name), 100.0, 3725.0, 0.0, "Finishing"));

        let file = view.file.unwrap();
        assert_eq!(file.chars().count(), 33);
        assert!(file.ends_with(format::ELLIPSIS));
        assert_eq!(view.progress, 1.0);
        assert_eq!(view.time_text, "Completed in 1h2m5s");
    }

    #[test]
    fn job_operational_and_no_file() {
        let mut view = StatusView::default();
        view.apply_job(&job_response(Some(""), 0.0, 0.0, 0.0, job::STATE_OPERATIONAL));

        assert_eq!(view.file, None);
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.time_text, "Printer is ready");

        view.apply_job(&JobResponse::default());
        assert_eq!(view.time_text, "Warming up ...");
    }

    #[test]
    fn update_dispatches_messages() {
        let mut view = StatusView::default();
        let mut status = PrinterStatus::default();
        status.state.flags = flags(false, false, true);

        view.update(WorkerMsg::StatusUpdate(status));
        view.update(WorkerMsg::JobUpdate(job_response(None, 50.0, 60.0, 0.0, "Printing")));

        assert!(view.controls.print);
        assert_eq!(view.time_text, "Elapsed: 1m0s");
    }
}

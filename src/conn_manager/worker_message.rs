use super::conn_octoprint::{
    octo_commands::OctoCmd,
    octo_types::{job::JobResponse, printer_status::PrinterStatus},
};

/// messages from the worker to the UI
#[derive(Debug, Clone)]
pub enum WorkerMsg {
    StatusUpdate(PrinterStatus),
    JobUpdate(JobResponse),
}

/// messages from the UI to the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCmd {
    Command(OctoCmd),
    /// poll now, outside the regular interval
    Refresh,
}

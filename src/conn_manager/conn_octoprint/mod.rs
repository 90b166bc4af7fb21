pub mod octo_commands;
pub mod octo_types;

use anyhow::{anyhow, bail, ensure, Context, Result};
use tracing::{debug, error, info, trace, warn};

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::printer_config::PrinterConfigOcto;

use octo_commands::OctoCmd;
use octo_types::{job::JobResponse, printer_status::PrinterStatus};

pub struct OctoClientLocal {
    client: reqwest::Client,
    base_url: url::Url,
    api_key: String,
}

/// new
impl OctoClientLocal {
    pub const URL_PRINTER: &'static str = "api/printer";
    pub const URL_JOB: &'static str = "api/job";

    pub fn new(printer_cfg: &PrinterConfigOcto, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = printer_cfg
            .base_url()
            .with_context(|| format!("invalid OctoPrint host: {}", printer_cfg.host))?;

        Ok(Self {
            client,
            base_url,
            api_key: printer_cfg.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }
}

/// get_response
impl OctoClientLocal {
    pub async fn get_response<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.base_url.join(path)?;

        let res = self
            .client
            .get(url.clone())
            .query(query)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !res.status().is_success() {
            warn!("status {:#?}", res.status());
            bail!("Failed to get response, url = {}", url);
        }

        Ok(res.json().await?)
    }
}

/// get info
impl OctoClientLocal {
    pub async fn get_printer_state(&self) -> Result<PrinterStatus> {
        let v: PrinterStatus = self
            .get_response(Self::URL_PRINTER, &[("exclude", "sd")])
            .await
            .context("printer state")?;
        trace!("printer state: {:?}", v.state);
        Ok(v)
    }

    pub async fn get_job_info(&self) -> Result<JobResponse> {
        let v: JobResponse = self
            .get_response(Self::URL_JOB, &[])
            .await
            .context("job info")?;
        trace!("job info: {:?}", v);
        Ok(v)
    }
}

/// send commands
impl OctoClientLocal {
    pub async fn send_command(&self, cmd: &OctoCmd) -> Result<()> {
        let url = self.base_url.join(cmd.url())?;

        let body = cmd.to_json();

        debug!("sending command: {}", body);

        let res = self
            .client
            .post(url.clone())
            .header("X-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            warn!("status {:#?}", res.status());
            bail!("Command rejected, url = {}, status = {}", url, res.status());
        }

        Ok(())
    }
}

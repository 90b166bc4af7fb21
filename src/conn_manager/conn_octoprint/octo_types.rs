pub mod printer_status {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// `GET api/printer`, queried with `exclude=sd`
    #[derive(Debug, Default, Clone, PartialEq, Deserialize)]
    pub struct PrinterStatus {
        #[serde(default, deserialize_with = "deserialize_temperature")]
        pub temperature: Temperature,
        #[serde(default)]
        pub state: State,
    }

    #[derive(Default, Debug, Clone, PartialEq)]
    pub struct Temperature {
        pub tools: Vec<(usize, Tool)>,
        pub bed: Option<Tool>,
    }

    impl Temperature {
        pub fn tool(&self, id: usize) -> Option<&Tool> {
            self.tools.iter().find(|(i, _)| *i == id).map(|(_, t)| t)
        }
    }

    /// OctoPrint keys probes by name (`bed`, `tool0`, `tool1`, ..) next to
    /// non-probe entries such as `history`, so go through `Value`
    fn deserialize_temperature<'de, D>(deserializer: D) -> Result<Temperature, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut out = Temperature::default();

        let map: Option<HashMap<String, Value>> = Option::deserialize(deserializer)?;
        let Some(map) = map else {
            return Ok(out);
        };

        for (key, value) in map {
            if key == "bed" {
                out.bed = Some(Tool::deserialize(value).map_err(serde::de::Error::custom)?);
            } else if let Some(id) = key.strip_prefix("tool") {
                let Ok(id) = id.parse::<usize>() else {
                    tracing::trace!("skipping temperature key: {}", key);
                    continue;
                };
                let tool = Tool::deserialize(value).map_err(serde::de::Error::custom)?;
                out.tools.push((id, tool));
            }
        }
        out.tools.sort_by_key(|tool| tool.0);

        Ok(out)
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Tool {
        /// null while a probe is disconnected
        #[serde(default, deserialize_with = "null_as_zero")]
        pub actual: f32,
        pub target: Option<f32>,
        #[serde(default)]
        pub offset: Option<f32>,
    }

    fn null_as_zero<'de, D>(deserializer: D) -> Result<f32, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct State {
        #[serde(default)]
        pub text: String,
        #[serde(default)]
        pub flags: Flags,
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Flags {
        pub operational: bool,
        pub paused: bool,
        pub printing: bool,
        pub cancelling: bool,
        pub pausing: bool,
        #[serde(rename = "sdReady")]
        pub sd_ready: bool,
        pub error: bool,
        pub ready: bool,
        #[serde(rename = "closedOrError")]
        pub closed_or_error: bool,
    }
}

pub mod job {
    use serde::{Deserialize, Serialize};

    /// connection state text reported while the printer is connected and idle
    pub const STATE_OPERATIONAL: &str = "Operational";

    /// `GET api/job`
    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct JobResponse {
        pub job: Job,
        pub progress: Progress,
        pub state: String,
    }

    impl JobResponse {
        pub fn is_operational(&self) -> bool {
            self.state == STATE_OPERATIONAL
        }
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Job {
        pub file: File,
        #[serde(rename = "estimatedPrintTime")]
        pub estimated_print_time: Option<f64>,
        #[serde(rename = "lastPrintTime")]
        pub last_print_time: Option<f64>,
        pub user: Option<String>,
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct File {
        pub name: Option<String>,
        pub display: Option<String>,
        pub origin: Option<String>,
        pub size: Option<i64>,
        pub date: Option<i64>,
    }

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Progress {
        pub completion: Option<f64>,
        pub filepos: Option<i64>,
        #[serde(rename = "printTime")]
        pub print_time: Option<f64>,
        #[serde(rename = "printTimeLeft")]
        pub print_time_left: Option<f64>,
        #[serde(rename = "printTimeLeftOrigin")]
        pub print_time_left_origin: Option<String>,
    }
}

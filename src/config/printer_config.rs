use serde::{Deserialize, Serialize};

pub const DEFAULT_OCTO_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfigOcto {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(alias = "token")]
    pub api_key: String,
}

fn default_port() -> u16 {
    DEFAULT_OCTO_PORT
}

impl Default for PrinterConfigOcto {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_OCTO_PORT,
            api_key: String::new(),
        }
    }
}

impl PrinterConfigOcto {
    pub fn new(host: String, port: u16, api_key: String) -> Self {
        Self {
            host,
            port,
            api_key,
        }
    }

    pub fn base_url(&self) -> anyhow::Result<url::Url> {
        let url = url::Url::parse(&format!("http://{}:{}/", self.host, self.port))?;
        Ok(url)
    }
}

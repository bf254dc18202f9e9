use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use vantage_common::config::Config;
use vantage_common::latency::ProbeResult;
use vantage_common::location::VantagePoint;

use super::{LatencyProbe, ProbeError, parse_summary};

/// Probes through the vantage point's HTTP measurement endpoint.
///
/// Sends `GET <endpoint>?cmd=ping&host=<host>` and reads the ping summary
/// from the text body. The configured timeout bounds each request.
pub struct HttpProbe {
    client: Client,
    cfg: Config,
}

impl HttpProbe {
    pub fn new(cfg: &Config) -> Result<Self, ProbeError> {
        let client = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            client,
            cfg: cfg.clone(),
        })
    }
}

#[async_trait]
impl LatencyProbe for HttpProbe {
    async fn probe(
        &self,
        vantage_point: &VantagePoint,
        host: &str,
    ) -> Result<ProbeResult, ProbeError> {
        let url: String = self.cfg.endpoint_for(vantage_point.remote_id);
        debug!("GET {url} (host={host})");

        let body: String = self
            .client
            .get(&url)
            .query(&[("cmd", "ping"), ("host", host)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let summary = parse_summary(&body)?;
        Ok(ProbeResult::new(vantage_point.display_name, summary))
    }
}

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/estacionamento-web");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
                // Server is up but the database is not; fail with the
                // real reason instead of waiting out the deadline
                if resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    let body = resp.text().await.unwrap_or_default();
                    anyhow::bail!(
                        "server on {} is up but degraded: {}",
                        self.base_url,
                        body
                    );
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// CRUD tests need a live Postgres; self-skip when none is configured
pub fn database_configured() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Client with redirects disabled so 303 responses stay observable
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

/// Find the row id for the `<tr id="{prefix}-N">` whose cells contain
/// `marker` in a rendered list page
#[allow(dead_code)]
pub fn find_row_id(body: &str, prefix: &str, marker: &str) -> Option<i64> {
    let anchor = format!("<tr id=\"{}-", prefix);
    let mut rest = body;
    while let Some(start) = rest.find(&anchor) {
        let after = &rest[start + anchor.len()..];
        let id_end = after.find('"')?;

        let row = match after.find("</tr>") {
            Some(end) => &after[..end],
            None => after,
        };
        // Skip rows with an unparseable id rather than giving up; a
        // malformed row must not mask later matches
        if let Ok(id) = after[..id_end].parse::<i64>() {
            if row.contains(marker) {
                return Some(id);
            }
        }
        rest = after;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::find_row_id;

    #[test]
    fn find_row_id_picks_matching_row() {
        let body = "<tr id=\"cliente-3\"><td>3</td><td>Ana</td></tr>\
                    <tr id=\"cliente-7\"><td>7</td><td>Bruno</td></tr>";
        assert_eq!(find_row_id(body, "cliente", "Bruno"), Some(7));
        assert_eq!(find_row_id(body, "cliente", "Carla"), None);
    }

    #[test]
    fn find_row_id_skips_malformed_rows() {
        let body = "<tr id=\"cliente-abc\"><td>?</td><td>Lixo</td></tr>\
                    <tr id=\"cliente-9\"><td>9</td><td>Diego</td></tr>";
        assert_eq!(find_row_id(body, "cliente", "Diego"), Some(9));
    }
}

/// Marker values unique per test run so list pages can be scraped safely
#[allow(dead_code)]
pub fn unique_marker(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    format!("{}-{}-{}", label, std::process::id(), nanos)
}

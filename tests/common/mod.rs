#![allow(dead_code)]

use std::sync::{Once, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use landadmin_api::auth::{generate_jwt, Claims};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();
static SECRET: Once = Once::new();

pub const TEST_JWT_SECRET: &str = "landadmin-integration-secret";

/// The server and the token helpers share one process-wide config, so the
/// secret has to be in place before either reads it
pub fn configure_secret() {
    SECRET.call_once(|| {
        if std::env::var("JWT_SECRET").is_err() {
            std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
        }
    });
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        configure_secret();

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = std::net::TcpListener::bind(("127.0.0.1", port))
            .with_context(|| format!("failed to bind port {}", port))?;
        listener.set_nonblocking(true)?;

        // Each #[tokio::test] owns a short-lived runtime, so the shared server
        // gets a thread and runtime of its own
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build server runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("failed to adopt listener");
                axum::serve(listener, landadmin_api::routes::app())
                    .await
                    .expect("server");
            });
        });

        Ok(Self { port, base_url })
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
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn test server"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Bearer token for a user with the given role claim
pub fn token_for(role: &str) -> String {
    configure_secret();
    generate_jwt(&Claims::new("test-user", role)).expect("failed to sign test token")
}

/// Bearer token whose expiry is already in the past
pub fn expired_token_for(role: &str) -> String {
    configure_secret();
    let claims = Claims::with_expiry("test-user", role, chrono::Duration::hours(-2));
    generate_jwt(&claims).expect("failed to sign test token")
}

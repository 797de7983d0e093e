use anyhow::{Context, Result};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use uuid::Uuid;

pub struct TestServer {
    url: String,
    process: Option<Child>,
    db_path: PathBuf,
}

/// Landing-page passwords handed to the spawned server.
#[derive(Debug, Clone, Default)]
pub struct Passwords {
    pub guest: Option<String>,
    pub couple: Option<String>,
}

impl TestServer {
    /// Local mode, fresh seeded SQLite database, no password gate.
    pub async fn start() -> Result<Self> {
        Self::start_with(Passwords::default()).await
    }

    pub async fn start_with(passwords: Passwords) -> Result<Self> {
        let port = get_random_port()?;
        let test_id = Uuid::new_v4();
        let db_path = PathBuf::from(format!(".e2e-test-{}.db", test_id));

        let mut command = Command::new("cargo");
        command
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "local")
            .env("SQLITE_PATH", &db_path)
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .env_remove("GUEST_PASSWORD")
            .env_remove("COUPLE_PASSWORD")
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(guest) = &passwords.guest {
            command.env("GUEST_PASSWORD", guest);
        }
        if let Some(couple) = &passwords.couple {
            command.env("COUPLE_PASSWORD", couple);
        }
        let process = command.spawn().context("Failed to start server")?;

        let url = format!("http://localhost:{}", port);
        let server = Self {
            url,
            process: Some(process),
            db_path,
        };

        wait_for_server(&server.url).await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    let health = format!("{url}/api/health");
    // Up to 60 seconds: the first run compiles the server.
    for i in 0..600 {
        if let Ok(response) = reqwest::get(&health).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}

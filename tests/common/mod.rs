#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{header, Response, StatusCode};
use serde_json::{json, Value};

/// A server process on its own port and in-memory database, killed on drop
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with(&[]).await
    }

    /// Start with extra environment variables, e.g. `ADMIN_TOKEN`
    pub async fn start_with(envs: &[(&str, &str)]) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skillverify-api"));
        cmd.env("HOST", "127.0.0.1")
            .env("PORT", port.to_string())
            .env("DATABASE_URL", "sqlite::memory:")
            .env("APP_ENV", "development")
            .env("RUST_LOG", "skillverify_api=warn")
            .env_remove("ADMIN_TOKEN")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;
        let server = Self {
            port,
            base_url,
            child,
        };
        server.wait_ready(Duration::from_secs(15)).await?;
        Ok(server)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// The "name=token" pair from a Set-Cookie response header
pub fn session_cookie(res: &Response) -> Option<String> {
    let set_cookie = res.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    set_cookie.split(';').next().map(|pair| pair.trim().to_string())
}

pub async fn register(
    client: &reqwest::Client,
    server: &TestServer,
    email: &str,
    password: &str,
    name: &str,
) -> Result<Value> {
    let res = client
        .post(server.url("/api/register"))
        .json(&json!({ "email": email, "password": password, "name": name }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "registration failed with {}",
        res.status()
    );
    Ok(res.json::<Value>().await?)
}

/// Log in and return the session cookie to send back
pub async fn login(
    client: &reqwest::Client,
    server: &TestServer,
    email: &str,
    password: &str,
) -> Result<String> {
    let res = client
        .post(server.url("/api/login"))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed with {}", res.status());
    session_cookie(&res).context("login response carried no session cookie")
}

/// Register then log in, returning the user id and session cookie
pub async fn signed_in_user(
    client: &reqwest::Client,
    server: &TestServer,
    email: &str,
) -> Result<(i64, String)> {
    let body = register(client, server, email, "pw", "Test User").await?;
    let id = body["user"]["id"].as_i64().context("user id missing")?;
    let cookie = login(client, server, email, "pw").await?;
    Ok((id, cookie))
}

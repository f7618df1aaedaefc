//! Check server health.

use anyhow::Result;

pub fn status(server: &str) -> Result<()> {
    println!("Server:    {}", server);

    let client = reqwest::blocking::Client::new();
    let url = format!("{}/health", server.trim_end_matches('/'));
    match client.get(&url).send() {
        Ok(resp) if resp.status().is_success() => {
            println!("Status:    connected");
        }
        Ok(resp) => {
            println!("Status:    error ({})", resp.status());
        }
        Err(e) => {
            println!("Status:    disconnected ({})", e);
        }
    }
    Ok(())
}

pub mod emit;
pub mod seed;
pub mod status;

use anyhow::Result;

/// Shared PUT helper for the admin document API.
pub(crate) fn put_doc(
    server: &str,
    collection: &str,
    id: &str,
    doc: &serde_json::Value,
) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let url = format!(
        "{}/admin/v1/docs/{}/{}",
        server.trim_end_matches('/'),
        collection,
        id
    );

    let resp = client.put(&url).json(doc).send()?;
    let status = resp.status();
    if !status.is_success() {
        let body: serde_json::Value = resp.json().unwrap_or_default();
        let message = body["message"].as_str().unwrap_or("unknown error");
        anyhow::bail!("Error ({}): {}", status, message);
    }
    Ok(())
}

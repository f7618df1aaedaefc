//! Emit a synthetic like-creation event against the hook.

use anyhow::Result;

pub fn emit(server: &str, like_id: &str, post_id: &str, user_id: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let url = format!("{}/likes/v1/events", server.trim_end_matches('/'));

    let body = serde_json::json!({
        "likeId": like_id,
        "postId": post_id,
        "userId": user_id,
    });

    let resp = client.post(&url).json(&body).send()?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().unwrap_or_default();
        anyhow::bail!("Error ({}): {}", status, text);
    }

    println!("Event delivered for like {}.", like_id);
    println!("Check the server log for the notification outcome.");
    Ok(())
}

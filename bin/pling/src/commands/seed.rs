//! Seed documents into the daemon's store via the admin API.
//!
//! Documents carry the same wire-format field names the upstream app
//! writes (camelCase), plus a createdAt timestamp.

use anyhow::Result;

use super::put_doc;

pub fn user(server: &str, id: &str, username: Option<&str>, token: Option<&str>) -> Result<()> {
    let mut doc = serde_json::json!({
        "createdAt": pling_core::now_rfc3339(),
    });
    if let Some(name) = username {
        doc["username"] = name.into();
    }
    if let Some(token) = token {
        doc["fcmToken"] = token.into();
    }

    put_doc(server, "users", id, &doc)?;
    println!("user {} seeded.", id);
    Ok(())
}

pub fn post(server: &str, id: &str, owner: &str) -> Result<()> {
    let doc = serde_json::json!({
        "userId": owner,
        "createdAt": pling_core::now_rfc3339(),
    });

    put_doc(server, "post", id, &doc)?;
    println!("post {} seeded.", id);
    Ok(())
}

pub fn like(server: &str, id: &str, post: &str, user: &str) -> Result<()> {
    let doc = serde_json::json!({
        "postId": post,
        "userId": user,
        "createdAt": pling_core::now_rfc3339(),
    });

    put_doc(server, "likes", id, &doc)?;
    println!("like {} seeded.", id);
    Ok(())
}

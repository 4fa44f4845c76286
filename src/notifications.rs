//! OS notifications for the daily reminder.
//!
//! Uses `osascript` on macOS; other platforms only log.

pub const REMINDER_TITLE: &str = "Napi emlékeztető";
pub const REMINDER_BODY: &str = "Ne felejtsd el a mai leckédet!";

/// Show the daily reminder without blocking the event loop.
pub fn notify_daily_reminder() {
    tracing::info!("Sending daily reminder");

    tokio::spawn(async move {
        let _ = tokio::task::spawn_blocking(move || {
            send_notification(REMINDER_TITLE, REMINDER_BODY);
        })
        .await;
    });
}

/// Escape a string for an AppleScript string literal.
fn applescript_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(target_os = "macos")]
fn send_notification(title: &str, body: &str) {
    use std::process::Command;

    let script = format!(
        "display notification \"{}\" with title \"{}\" sound name \"Glass\"",
        applescript_escape(body),
        applescript_escape(title)
    );

    match Command::new("osascript").arg("-e").arg(&script).output() {
        Ok(output) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("osascript notification failed: {}", stderr.trim());
        }
        Err(e) => {
            tracing::warn!("Failed to spawn osascript: {}", e);
        }
        _ => {
            tracing::debug!("OS notification sent");
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn send_notification(title: &str, body: &str) {
    tracing::info!(
        title = %applescript_escape(title),
        body,
        "No notification backend on this platform"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applescript_escape() {
        assert_eq!(applescript_escape(r#"a "b" \c"#), r#"a \"b\" \\c"#);
    }
}

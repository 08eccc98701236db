//! Copy text through the platform clipboard tool.

use anyhow::Result;

/// Place `text` on the system clipboard.
///
/// # Errors
///
/// Fails when the platform has no supported clipboard tool or the tool
/// cannot be spawned.
pub(crate) fn copy(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _unused = text;
        anyhow::bail!("Clipboard not supported on this platform")
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to(command: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    use anyhow::Context;

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {command}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {command}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {command}"))?;
    if !status.success() {
        anyhow::bail!("{command} exited with {status}");
    }

    Ok(())
}

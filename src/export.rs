//! Image export.
//!
//! Delegates HTML rasterization to the external `wkhtmltoimage` binary.

use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Convert rendered HTML into an image file at `output_path`.
///
/// The document is streamed to `wkhtmltoimage` over stdin; the output
/// format follows the file extension of `output_path`. A missing binary or
/// a non-zero exit is fatal, and no partial output is cleaned up.
pub async fn write_image(html: &str, output_path: &Path) -> Result<()> {
    let mut child = Command::new("wkhtmltoimage")
        .args(["--quality", "100", "-"])
        .arg(output_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::renderer(format!("Failed to start wkhtmltoimage: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(html.as_bytes()).await?;
        // Dropping stdin closes the pipe so the renderer sees EOF
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| Error::renderer(format!("wkhtmltoimage did not finish: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::renderer(format!("wkhtmltoimage failed: {stderr}")));
    }

    debug!("Wrote schedule image to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    async fn renderer_available() -> bool {
        Command::new("wkhtmltoimage")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok()
    }

    #[tokio::test]
    async fn writes_an_image_file() {
        if !renderer_available().await {
            println!("Skipping export test: wkhtmltoimage not installed.");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("schedule.png");

        write_image("<html><body><p>hello</p></body></html>", &out)
            .await
            .unwrap();

        assert!(out.exists());
        assert!(out.metadata().unwrap().len() > 0);
    }
}

use crate::error::{QpError, QpResult};

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use entrait::*;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use std::future::Future;
use std::time::Duration;

/// Pixels per QR module in the rendered image.
pub const MODULE_SCALE: u32 = 8;

/// Turns a piece of text (a profile URL) into a QR code image, embedded as a
/// `data:` URL that can go straight into an `<img src>`.
#[entrait(mock_api=QrEncoderMock)]
pub trait QrEncoder {
    async fn encode_data_url(&self, content: String) -> QpResult<String>;
}

/// Render `content` at the highest error correction level and encode the
/// result as a base64 PNG data URL.
pub fn render_png_data_url(content: &str) -> anyhow::Result<String> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::H)
        .map_err(|e| anyhow::anyhow!("failed to encode QR code: {}", e))?;

    let pixels = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SCALE, MODULE_SCALE)
        .build();

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(pixels)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .context("failed to write QR code as PNG")?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

/// Run a rendering job on the blocking pool, giving up after `timeout`.
///
/// The job itself is not cancelled on timeout; its result is discarded.
pub async fn render_bounded<F>(timeout: Duration, render: F) -> QpResult<String>
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    bounded(timeout, tokio::task::spawn_blocking(render)).await
}

async fn bounded<T, F>(timeout: Duration, task: F) -> QpResult<T>
where
    F: Future<Output = Result<anyhow::Result<T>, tokio::task::JoinError>>,
{
    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => Ok(joined.context("panic when generating QR code")??),
        Err(_) => Err(QpError::CodeGenerationTimeout(timeout)),
    }
}

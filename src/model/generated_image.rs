use std::io::Cursor;

use image::ImageFormat;

use crate::engine::errors::InferenceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub width: u32,
    pub height: u32,
    /// Unmultiplied RGBA, row major. Used for the on-screen texture.
    pub rgba: Vec<u8>,
    /// PNG encoding of the same pixels. Used for downloads.
    pub png: Vec<u8>,
}

impl GeneratedImage {
    /// Decodes whatever format the provider sent and re-encodes it as PNG.
    pub fn decode(bytes: &[u8]) -> Result<Self, InferenceError> {
        let img = image::load_from_memory(bytes).map_err(|e| InferenceError::MalformedResponse {
            reason: format!("response is not a valid image: {e}"),
        })?;

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| InferenceError::MalformedResponse {
                reason: format!("failed to encode PNG: {e}"),
            })?;

        let rgba = img.to_rgba8();

        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
            png,
        })
    }
}

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(JPEG_MAGIC) {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(PNG_MAGIC) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// A photo of the tray that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayImage {
    data: Vec<u8>,
    format: ImageFormat,
}

impl TrayImage {
    /// Accepts non-empty JPEG or PNG data up to [`MAX_IMAGE_SIZE`] bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, CoreError> {
        if data.is_empty() {
            return Err(CoreError::InvalidImage("image is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::InvalidImage(format!(
                "image too large, max size is {MAX_IMAGE_SIZE} bytes"
            )));
        }

        let format = ImageFormat::detect(&data).ok_or_else(|| {
            CoreError::InvalidImage("only JPEG and PNG images are supported".to_string())
        })?;

        Ok(Self { data, format })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

//! upscaler-io - Image I/O for upscaler
//!
//! Decodes image files into a [`Grid`] and encodes grids back to files.
//! Only PNG is supported, behind the default `png-format` feature.
//!
//! The codec preserves channel order and numeric range; it performs no
//! color management.

mod error;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
#[cfg(feature = "png-format")]
pub use crate::png::{read_png, write_png};

use std::path::Path;
use upscaler_core::Grid;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
}

impl ImageFormat {
    /// Guess the format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("png") {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

fn format_for(path: &Path) -> IoResult<ImageFormat> {
    ImageFormat::from_path(path)
        .ok_or_else(|| IoError::UnsupportedFormat(format!("{}", path.display())))
}

/// Read an image from a file path.
///
/// The format is chosen from the file extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    match format_for(path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = std::fs::File::open(path)?;
            read_png(std::io::BufReader::new(file))
        }
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not enabled".to_string(),
        )),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = std::fs::File::create(path)?;
            write_png(grid, std::io::BufWriter::new(file))
        }
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            let _ = (grid, path);
            Err(IoError::UnsupportedFormat(
                "PNG support not enabled".to_string(),
            ))
        }
    }
}

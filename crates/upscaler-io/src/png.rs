//! PNG image format support
//!
//! Decoding normalizes every PNG to 8 bits per channel: palettes are
//! expanded to RGB(A), low bit depths are widened and 16-bit samples are
//! stripped to their high byte. Encoding writes 8-bit samples; BGR(A) grids
//! are stored in PNG's RGB(A) order.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use upscaler_core::{ChannelLayout, Grid};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            bit_depth
        )));
    }
    let layout = match color_type {
        ColorType::Grayscale => ChannelLayout::Gray,
        ColorType::GrayscaleAlpha => ChannelLayout::GrayAlpha,
        ColorType::Rgb => ChannelLayout::Rgb,
        ColorType::Rgba => ChannelLayout::Rgba,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG color type after expansion: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let row_bytes = width as usize * layout.channels();
    if output_info.line_size < row_bytes {
        return Err(IoError::InvalidData(format!(
            "PNG line of {} bytes is shorter than {} pixels",
            output_info.line_size, width
        )));
    }

    let data = &buf[..output_info.buffer_size()];
    let mut samples = Vec::with_capacity(row_bytes * height as usize);
    for line in data.chunks(output_info.line_size).take(height as usize) {
        samples.extend_from_slice(&line[..row_bytes]);
    }

    Ok(Grid::from_u8(width, height, layout, &samples)?)
}

/// Write a PNG image
///
/// Samples are rounded half to even and clamped to `0..=255`.
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    if grid.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode empty {}x{} grid",
            grid.width(),
            grid.height()
        )));
    }

    let (color_type, data) = match grid.layout() {
        ChannelLayout::Gray => (ColorType::Grayscale, grid.to_u8()),
        ChannelLayout::GrayAlpha => (ColorType::GrayscaleAlpha, grid.to_u8()),
        ChannelLayout::Rgb => (ColorType::Rgb, grid.to_u8()),
        ChannelLayout::Rgba => (ColorType::Rgba, grid.to_u8()),
        ChannelLayout::Bgr => (ColorType::Rgb, grid.swap_red_blue().to_u8()),
        ChannelLayout::Bgra => (ColorType::Rgba, grid.swap_red_blue().to_u8()),
    };

    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

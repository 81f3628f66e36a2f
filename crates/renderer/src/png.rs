//! PNG encoding for the finished pixel buffer.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: used when the image has ≤256 unique
//!   colors. The fixed density palette has six, so this is the normal path.
//! - **RGB PNG (color type 2)**: fallback for arbitrary imagery.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use plot_common::{PlotError, PlotResult, Rgb};
use tracing::debug;

use crate::buffer::PixelBuffer;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Serializes a finished pixel buffer to a file.
///
/// The pipeline's contract with a sink is "write width x height RGB triples,
/// row-major, top row first"; the file format is the sink's concern.
pub trait ImageSink {
    fn write(&self, buffer: &PixelBuffer, path: &Path) -> PlotResult<()>;
}

/// PNG file sink.
#[derive(Debug, Default)]
pub struct PngSink;

impl PngSink {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSink for PngSink {
    fn write(&self, buffer: &PixelBuffer, path: &Path) -> PlotResult<()> {
        let png = encode_png(&buffer.rgb_bytes(), buffer.width(), buffer.height())?;
        std::fs::write(path, &png).map_err(|source| PlotError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = png.len(), "PNG written");
        Ok(())
    }
}

/// Encode RGB pixel data as PNG with automatic format selection.
///
/// If the image has ≤256 unique colors an indexed PNG is produced (smaller,
/// faster to compress); otherwise it falls back to full RGB.
pub fn encode_png(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_png_indexed(width, height, &palette, &indices),
        None => encode_png_rgb(pixels, width, height),
    }
}

/// Pack an RGB triple into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Extract a palette and per-pixel indices, or None when the image has more
/// than 256 unique colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<Rgb>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<Rgb> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 3);

    for chunk in pixels.chunks_exact(3) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(Rgb::new(chunk[0], chunk[1], chunk[2]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode an indexed PNG (color type 3) from palette and indices.
fn encode_png_indexed(
    width: usize,
    height: usize,
    palette: &[Rgb],
    indices: &[u8],
) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth (8 bits per palette index)
    ihdr_data.push(3); // color type 3 = indexed
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // PLTE chunk (palette)
    let mut plte_data = Vec::with_capacity(palette.len() * 3);
    for color in palette {
        plte_data.push(color.r);
        plte_data.push(color.g);
        plte_data.push(color.b);
    }
    write_chunk(&mut png, b"PLTE", &plte_data);

    // IDAT chunk (image data)
    let idat_data = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode a full-color PNG (color type 2) from RGB pixel data.
fn encode_png_rgb(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    let mut png = Vec::new();

    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(2); // color type 2 = RGB
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_scanlines(pixels, width, height, 3)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Deflate image data for the IDAT chunk.
///
/// Each scanline is prefixed with filter type 0 (none); `bytes_per_pixel` is
/// 1 for indexed data and 3 for RGB.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> PlotResult<Vec<u8>> {
    let stride = width * bytes_per_pixel;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));

    for y in 0..height {
        uncompressed.push(0); // filter type: none
        let row_start = y * stride;
        uncompressed.extend_from_slice(&data[row_start..row_start + stride]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| PlotError::PngEncode(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| PlotError::PngEncode(format!("IDAT compression failed: {}", e)))
}

/// Write a PNG chunk: length, type, data, CRC.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn ihdr_dimensions(png: &[u8]) -> (u32, u32) {
        // Signature (8) + length (4) + "IHDR" (4), then width and height.
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn test_extract_palette_simple() {
        // red, green, blue, red: 3 unique colors
        let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 0, 0];

        let (palette, indices) = extract_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], indices[3]);
    }

    #[test]
    fn test_extract_palette_too_many_colors() {
        let mut pixels = Vec::new();
        for i in 0..300u32 {
            pixels.push((i % 256) as u8);
            pixels.push((i / 256) as u8);
            pixels.push(7);
        }
        assert!(extract_palette(&pixels).is_none());
    }

    #[test]
    fn test_encode_signature_and_dimensions() {
        let pixels = [0u8; 5 * 4 * 3];
        let png = encode_png(&pixels, 5, 4).unwrap();

        assert_eq!(&png[0..8], &PNG_SIGNATURE);
        assert_eq!(ihdr_dimensions(&png), (5, 4));
    }

    #[test]
    fn test_palette_image_uses_indexed_encoding() {
        // Two-color image stays within the palette limit.
        let pixels = [255, 0, 0, 0, 255, 0, 0, 255, 0, 255, 0, 0];
        let png = encode_png(&pixels, 2, 2).unwrap();

        // Color type byte lives at offset 25 in the IHDR data.
        assert_eq!(png[25], 3);
        // An indexed PNG carries a PLTE chunk.
        assert!(png.windows(4).any(|w| w == b"PLTE"));
    }

    #[test]
    fn test_rgb_fallback_for_many_colors() {
        let mut pixels = Vec::new();
        for i in 0..300u32 {
            pixels.push((i % 256) as u8);
            pixels.push((i / 2 % 256) as u8);
            pixels.push((i / 3 % 256) as u8);
        }
        let png = encode_png(&pixels, 300, 1).unwrap();

        assert_eq!(png[25], 2);
        assert!(!png.windows(4).any(|w| w == b"PLTE"));
    }

    #[test]
    fn test_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let buffer = PixelBuffer::new(8, 8);
        PngSink::new().write(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[0..8], &PNG_SIGNATURE);
        assert_eq!(ihdr_dimensions(&written), (8, 8));
    }

    #[test]
    fn test_sink_unwritable_path() {
        let buffer = PixelBuffer::new(2, 2);
        let result = PngSink::new().write(&buffer, Path::new("/no/such/dir/out.png"));
        assert!(matches!(result, Err(PlotError::OutputWrite { .. })));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let pixels = [10u8; 6 * 2 * 3];
        let first = encode_png(&pixels, 6, 2).unwrap();
        let second = encode_png(&pixels, 6, 2).unwrap();
        assert_eq!(first, second);
    }
}

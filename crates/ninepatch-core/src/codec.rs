//! PNG decoding/encoding and `data:` URI generation.

use ninepatch_types::{PatchError, PixelBuffer, Result};

/// MIME prefix of an embeddable PNG data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode PNG bytes into an RGBA8 buffer.
///
/// Palette and low-bit-depth images are expanded and 16-bit channels are
/// stripped to 8 bits; grayscale and RGB inputs gain an opaque alpha.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let raw = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => raw.to_vec(),
        png::ColorType::Rgb => raw
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => raw
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => raw.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(PatchError::UnsupportedFormat("indexed PNG was not expanded".into()));
        }
    };
    PixelBuffer::new(info.width, info.height, rgba)
}

/// Encode an RGBA8 buffer as PNG bytes.
pub fn encode_png(raster: &PixelBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(raster.as_bytes())?;
    }
    Ok(out)
}

/// Encode a raster as an embeddable `data:image/png;base64,...` URI.
pub fn data_uri(raster: &PixelBuffer) -> Result<String> {
    let png = encode_png(raster)?;
    Ok(format!("{DATA_URI_PREFIX}{}", base64_encode(&png)))
}

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard padded base64 for the payload of a data URI.
///
/// Each 3-byte group becomes four sextets; a short final group emits only
/// the sextets it fills and pads the rest with `=`.
fn base64_encode(png: &[u8]) -> String {
    let mut uri_payload = String::with_capacity(png.len().div_ceil(3) * 4);
    for group in png.chunks(3) {
        let mut bytes = [0u8; 3];
        bytes[..group.len()].copy_from_slice(group);
        let bits = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
        let filled = group.len() + 1;
        for i in 0..4 {
            if i < filled {
                let sextet = (bits >> (18 - 6 * i)) & 0x3F;
                uri_payload.push(ALPHABET[sextet as usize] as char);
            } else {
                uri_payload.push('=');
            }
        }
    }
    uri_payload
}

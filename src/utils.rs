use crate::error::{Error, Result};
use rand::Rng;
use tiny_skia::Pixmap;

const TOKEN_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const TOKEN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase alphanumeric token of `len` characters.
/// The first character is always a letter so the token is a valid XML ID.
pub fn random_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|i| {
            let pool = if i == 0 { TOKEN_LETTERS } else { TOKEN_CHARS };
            pool[rng.random_range(0..pool.len())] as char
        })
        .collect()
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Break markup onto separate lines at tag boundaries.
///
/// Inserts a newline between every `>` directly followed by `<`. Running it
/// twice gives the same result as running it once.
pub fn pretty_print_xml(xml: &str) -> String {
    xml.replace("><", ">\n<")
}

/// Encode a pixmap as PNG bytes
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap
        .encode_png()
        .map_err(|e| Error::Raster(format!("Failed to encode PNG: {e}")))
}

/// Pixel dimensions of PNG data
pub fn png_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    let pixmap = Pixmap::decode_png(data)
        .map_err(|e| Error::Raster(format!("Failed to decode PNG: {e}")))?;
    Ok((pixmap.width(), pixmap.height()))
}

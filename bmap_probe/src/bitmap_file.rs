use bmap_view::{BitmapError, BitmapView, ErrCode};
use std::fs;
use std::io::ErrorKind;

/// Bitmap bytes read from a file, optionally from inside a larger image.
#[derive(Debug)]
pub struct BitmapFile {
    bytes: Vec<u8>,
    bits: usize,
}

impl BitmapFile {
    /// Read the bitmap starting `offset` bytes into `path`.
    ///
    /// `bits` defaults to every bit after `offset`.
    pub fn load(path: &str, offset: usize, bits: Option<usize>) -> Result<Self, BitmapError> {
        let image = fs::read(path).map_err(|e| {
            let code = match e.kind() {
                ErrorKind::NotFound => ErrCode::ENOENT,
                _ => ErrCode::EIO,
            };
            BitmapError::with_message(code, format!("read \"{}\": {}", path, e))
        })?;
        if offset > image.len() {
            return Err(BitmapError::with_message(
                ErrCode::ERANGE,
                format!("offset {} past end of {}-byte file", offset, image.len()),
            ));
        }
        let bytes = image[offset..].to_vec();
        let bits = bits.unwrap_or(bytes.len() * 8);
        // Validate once so `view` can't panic later
        BitmapView::try_new(&bytes, bits)?;
        log::debug!("loaded {} bits from \"{}\"+{}", bits, path, offset);
        Ok(Self { bytes, bits })
    }

    pub fn view(&self) -> BitmapView<'_> {
        BitmapView::new(&self.bytes, self.bits)
    }
}

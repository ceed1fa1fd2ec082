//! Validated in-memory representation of a raw memory image

use std::fmt;

/// A raw memory image, fully buffered, whose length is known to be a
/// multiple of the word size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemImage(Vec<u8>);

impl MemImage {
  /// The word size in bytes; the only width supported
  pub const WORD_SIZE: usize = 4;

  /// Validates the byte length and takes ownership of the data
  ///
  /// # Examples
  ///
  /// ```
  /// use bin2meminit_lib::MemImage;
  ///
  /// let image = MemImage::from_bytes(vec![0x44, 0x33, 0x22, 0x11]).unwrap();
  /// assert_eq!(image.size_words(), 1);
  ///
  /// assert!(MemImage::from_bytes(vec![1, 2, 3]).is_err());
  /// ```
  pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ImageError> {
    if bytes.len() % Self::WORD_SIZE != 0 {
      return Err(ImageError::InvalidLength { len: bytes.len() });
    }
    Ok(Self(bytes))
  }

  /// Gets the total byte count
  pub fn size_bytes(&self) -> usize {
    self.0.len()
  }

  /// Gets the word count
  pub fn size_words(&self) -> usize {
    self.0.len() / Self::WORD_SIZE
  }

  /// Returns the bytes of the word at `index` in most-significant-first
  /// order
  ///
  /// The image stores little-endian words, so the byte at the highest
  /// stream offset of the group comes first.
  pub fn word(&self, index: usize) -> [u8; 4] {
    let base = index * Self::WORD_SIZE;
    [
      self.0[base + 3],
      self.0[base + 2],
      self.0[base + 1],
      self.0[base],
    ]
  }

  /// Iterates all words in index order, each in rendering byte order
  pub fn words(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
    (0..self.size_words()).map(|index| self.word(index))
  }
}

impl AsRef<[u8]> for MemImage {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

/// Defines the validation errors of a [MemImage]
#[derive(Debug, PartialEq, Eq)]
pub enum ImageError {
  /// The byte length is not a multiple of the word size
  InvalidLength {
    /// The offending byte length
    len: usize,
  },
}

impl fmt::Display for ImageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidLength { len } => f.write_fmt(format_args!(
        "invalid length ({len} bytes is not a multiple of 4)"
      )),
    }
  }
}

impl std::error::Error for ImageError {}

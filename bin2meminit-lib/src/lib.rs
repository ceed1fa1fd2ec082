//! # Memory Image Hex Text Converter Lib
//!
//! `bin2meminit-lib` is the library portion of `bin2meminit`: it turns raw
//! binary memory images into the hexadecimal text documents used to
//! initialize instruction and data ROM blocks in an HDL design.

#![deny(missing_docs)]

mod convert;
mod document;
mod image;
mod layout;

use std::{fmt, io, path::PathBuf};

pub use convert::{convert, BaseArgs, ConvertError, ConvertParams};
pub use document::write_document;
pub use image::{ImageError, MemImage};
pub use layout::MemoryLayout;

/// Provides the path to which the error originated from
#[derive(Debug)]
pub struct PathError(pub(crate) PathBuf, pub(crate) io::Error);

impl PathError {
  /// Gets the path on which the error happened
  pub fn path(&self) -> &std::path::Path {
    &self.0
  }
}

impl fmt::Display for PathError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let PathError(path, err) = self;
    match err.kind() {
      io::ErrorKind::NotFound => f.write_fmt(format_args!("file {} not found", path.display())),
      io::ErrorKind::PermissionDenied => {
        f.write_fmt(format_args!("could not access {}", path.display()))
      }
      io::ErrorKind::AlreadyExists => f.write_fmt(format_args!(
        "will not overwrite existing {}",
        path.display()
      )),
      io::ErrorKind::WriteZero => f.write_fmt(format_args!(
        "could not write all data into {}",
        path.display()
      )),
      _ => f.write_fmt(format_args!("{err} ({})", path.display())),
    }
  }
}

impl std::error::Error for PathError {}

//! File to file conversion of a memory image into its text document

use std::{
  fmt,
  fs::{self, File},
  io::{self, Write},
  path::{Path, PathBuf},
};

use log::debug;

use crate::{
  document::write_document,
  image::{ImageError, MemImage},
  layout::MemoryLayout,
  PathError,
};

/// Basic common arguments for the conversion
#[derive(Clone, clap::Args, Debug, Default)]
pub struct BaseArgs {
  /// If set, the program will overwrite any existing files
  #[arg(long)]
  pub overwrite: bool,

  /// Sets the output directory for the generated text files
  #[arg(long)]
  pub output_dir: Option<PathBuf>,
}

/// Provides the parameters of one file conversion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertParams {
  input: PathBuf,
  layout: MemoryLayout,
}

impl ConvertParams {
  /// Returns the conversion parameters for the given input image and layout
  ///
  /// # Examples
  ///
  /// ```
  /// use bin2meminit_lib::{ConvertParams, MemoryLayout};
  ///
  /// let instr = ConvertParams::new("bin/instr.bin", MemoryLayout::Instruction);
  /// let rodata = ConvertParams::new("bin/rodata.bin", MemoryLayout::DataRom);
  /// ```
  pub fn new<P: Into<PathBuf>>(input: P, layout: MemoryLayout) -> Self {
    Self {
      input: input.into(),
      layout,
    }
  }

  /// Gets the input image path
  pub fn input(&self) -> &Path {
    &self.input
  }

  /// Gets the [MemoryLayout] the image will be rendered with
  pub fn layout(&self) -> MemoryLayout {
    self.layout
  }

  /// Returns the path the document will be written to
  ///
  /// The file name is the input name truncated at its first `.` with `.txt`
  /// appended, placed in `output_dir` or next to the input when no
  /// directory is given.
  pub fn output_path(&self, output_dir: &Option<PathBuf>) -> PathBuf {
    let dir = match output_dir {
      Some(dir) => dir.as_path(),
      None => self.input.parent().unwrap_or(Path::new("")),
    };
    dir.join(output_file_name(&self.input))
  }
}

impl fmt::Display for ConvertParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_fmt(format_args!(
      "convert {} ({} layout)",
      self.input.display(),
      self.layout
    ))
  }
}

fn output_file_name(input: &Path) -> PathBuf {
  let name = input
    .file_name()
    .map(|name| name.to_string_lossy())
    .unwrap_or_default();
  // truncate at the first dot, not the last
  let stem = name.split('.').next().unwrap_or("");
  PathBuf::from(format!("{stem}.txt"))
}

/// Defines the errors reported by [convert]
#[derive(Debug)]
pub enum ConvertError {
  /// The input image failed validation
  Image(PathBuf, ImageError),
  /// An I/O error, with the path it happened on
  Path(PathError),
}

impl ConvertError {
  /// Checks whether this is the recoverable invalid length case, which
  /// skips the file instead of failing the run
  pub fn is_invalid_length(&self) -> bool {
    matches!(self, Self::Image(_, ImageError::InvalidLength { .. }))
  }
}

impl fmt::Display for ConvertError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Image(path, err) => f.write_fmt(format_args!("{}: {err}", path.display())),
      Self::Path(err) => err.fmt(f),
    }
  }
}

impl std::error::Error for ConvertError {}

/// Converts one binary memory image into its text document
///
/// The image is fully buffered and validated before any output is created,
/// so an invalid length never leaves a file behind. A failure while writing
/// an already opened destination may leave a partial file.
///
/// Returns the path of the generated document.
pub fn convert(params: &ConvertParams, args: &BaseArgs) -> Result<PathBuf, ConvertError> {
  let bytes = fs::read(params.input())
    .map_err(|err| ConvertError::Path(PathError(params.input().into(), err)))?;
  let image = MemImage::from_bytes(bytes)
    .map_err(|err| ConvertError::Image(params.input().into(), err))?;

  debug!(
    "{}: {} bytes, {} words",
    params.input().display(),
    image.size_bytes(),
    image.size_words()
  );

  let out_path = params.output_path(&args.output_dir);
  File::options()
    .create(args.overwrite)
    .create_new(!args.overwrite)
    .truncate(args.overwrite)
    .write(true)
    .open(&out_path)
    .and_then(|file| {
      let mut writer = io::BufWriter::new(file);
      write_document(&image, params.layout(), &mut writer)?;
      writer.flush()
    })
    .map_err(|err| ConvertError::Path(PathError(out_path.clone(), err)))?;

  Ok(out_path)
}

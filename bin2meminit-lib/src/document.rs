//! Renders the output document of a memory image

use std::io::{self, Write};

use crate::{image::MemImage, layout::MemoryLayout};

/// Writes the text document for `image` rendered with `layout`
///
/// The document is two size header lines, a blank line, the `Content:`
/// label, and one line per word in index order. Every content line but the
/// last ends with a comma.
pub fn write_document<W: Write>(
  image: &MemImage,
  layout: MemoryLayout,
  writer: &mut W,
) -> io::Result<()> {
  writeln!(writer, "SIZE_BYTES = {}", image.size_bytes())?;
  writeln!(writer, "SIZE_WORDS = {}", image.size_words())?;
  writeln!(writer)?;
  writeln!(writer, "Content:")?;

  let last = image.size_words().checked_sub(1);
  for (index, word) in image.words().enumerate() {
    let line = layout.render_word(word);
    if Some(index) == last {
      writeln!(writer, "{line}")?;
    } else {
      writeln!(writer, "{line},")?;
    }
  }

  Ok(())
}

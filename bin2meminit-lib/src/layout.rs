//! The two text layouts a word can be rendered with

use std::fmt;

/// Selects how each 32-bit word is rendered in the output document
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MemoryLayout {
  /// One combined 32-bit hex literal per word, for program memory
  Instruction,
  /// Four individually addressable byte literals per word, for a
  /// byte-addressable data ROM
  DataRom,
}

impl MemoryLayout {
  /// Renders one word, given in most-significant-first byte order, as a
  /// single content line without the trailing separator
  ///
  /// # Examples
  ///
  /// ```
  /// use bin2meminit_lib::MemoryLayout;
  ///
  /// let word = [0x11, 0x22, 0x33, 0x44];
  /// assert_eq!(MemoryLayout::Instruction.render_word(word), "x\"11223344\"");
  /// assert_eq!(
  ///   MemoryLayout::DataRom.render_word(word),
  ///   "(x\"11\", x\"22\", x\"33\", x\"44\")"
  /// );
  /// ```
  pub fn render_word(&self, word: [u8; 4]) -> String {
    match self {
      Self::Instruction => format!(
        "x\"{:02x}{:02x}{:02x}{:02x}\"",
        word[0], word[1], word[2], word[3]
      ),
      Self::DataRom => format!(
        "(x\"{:02x}\", x\"{:02x}\", x\"{:02x}\", x\"{:02x}\")",
        word[0], word[1], word[2], word[3]
      ),
    }
  }
}

impl fmt::Display for MemoryLayout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Instruction => f.write_str("instruction"),
      Self::DataRom => f.write_str("data ROM"),
    }
  }
}

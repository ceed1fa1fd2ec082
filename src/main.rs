use std::{fs, path::PathBuf, process::ExitCode};

use bin2meminit_lib::{convert, BaseArgs, ConvertParams, MemoryLayout};

use clap::Parser;
use log::{error, info, warn, LevelFilter};

#[derive(Copy, Clone, Debug, PartialEq, clap::ValueEnum, Default)]
enum Verbosity {
  Quiet,
  #[default]
  Normal,
  Debug,
}

impl From<Verbosity> for LevelFilter {
  fn from(value: Verbosity) -> Self {
    match value {
      Verbosity::Quiet => LevelFilter::Off,
      Verbosity::Normal => LevelFilter::Info,
      Verbosity::Debug => LevelFilter::Debug,
    }
  }
}

/// A simple converter of binary memory images into hex text memory
/// initializers.
#[derive(Parser, Debug, Default)]
#[command(version)]
struct Bin2MemInit {
  /// Sets the output verbosity
  #[arg(short, long, default_value = "normal")]
  verbosity: Verbosity,

  /// Renders each word as four byte literals instead of one word literal
  #[arg(long)]
  data_rom: bool,

  #[command(flatten)]
  base: BaseArgs,

  /// The input image file(s); without any, bin/instr.bin and bin/rodata.bin
  /// are converted
  #[arg(name = "FILE")]
  files: Vec<PathBuf>,
}

fn conversions(args: &Bin2MemInit) -> Vec<ConvertParams> {
  if args.files.is_empty() {
    // the default image pair of the build flow
    return vec![
      ConvertParams::new("bin/instr.bin", MemoryLayout::Instruction),
      ConvertParams::new("bin/rodata.bin", MemoryLayout::DataRom),
    ];
  }

  let layout = if args.data_rom {
    MemoryLayout::DataRom
  } else {
    MemoryLayout::Instruction
  };
  args
    .files
    .iter()
    .map(|file| ConvertParams::new(file, layout))
    .collect()
}

fn main() -> ExitCode {
  let args = Bin2MemInit::parse();

  let _ = simplelog::TermLogger::init(
    args.verbosity.into(),
    simplelog::Config::default(),
    simplelog::TerminalMode::Mixed,
    simplelog::ColorChoice::Auto,
  );

  // if there is an output directory, check and create if missing
  if let Some(out_dir) = args.base.output_dir.as_ref() {
    if !out_dir.is_dir() {
      match fs::create_dir_all(out_dir) {
        Ok(()) => info!("Created output directory at: {}", out_dir.display()),
        Err(err) => {
          error!("Could not create output directory: {err}");
          return ExitCode::FAILURE;
        }
      }
    }
  }

  let mut exit_code = ExitCode::SUCCESS;

  for params in conversions(&args) {
    match convert(&params, &args.base) {
      Ok(out_path) => info!("{} generated.", out_path.display()),
      Err(err) if err.is_invalid_length() => warn!("{err}, skipped."),
      Err(err) => {
        error!("Could not {params}: {err}");
        exit_code = ExitCode::FAILURE;
      }
    }
  }

  exit_code
}

#[cfg(test)]
mod tests {
  use bin2meminit_lib::{ConvertParams, MemoryLayout};
  use clap::Parser;

  use crate::{conversions, Bin2MemInit};

  #[test]
  fn verify_cli() {
    use clap::CommandFactory;
    Bin2MemInit::command().debug_assert()
  }

  #[test]
  fn verify_default_conversion_pair() {
    let args = Bin2MemInit::default();
    assert_eq!(
      conversions(&args),
      vec![
        ConvertParams::new("bin/instr.bin", MemoryLayout::Instruction),
        ConvertParams::new("bin/rodata.bin", MemoryLayout::DataRom),
      ]
    );
  }

  #[test]
  fn verify_explicit_files_use_instruction_layout() {
    let args = Bin2MemInit::parse_from(["bin2meminit", "a.bin", "b.bin"]);
    assert_eq!(
      conversions(&args),
      vec![
        ConvertParams::new("a.bin", MemoryLayout::Instruction),
        ConvertParams::new("b.bin", MemoryLayout::Instruction),
      ]
    );
  }

  #[test]
  fn verify_data_rom_flag() {
    let args = Bin2MemInit::parse_from(["bin2meminit", "--data-rom", "rodata.bin"]);
    assert_eq!(
      conversions(&args),
      vec![ConvertParams::new("rodata.bin", MemoryLayout::DataRom)]
    );
  }
}

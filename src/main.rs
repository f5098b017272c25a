use {
  anyhow::{Context, Result},
  clap::{Parser, Subcommand, ValueEnum},
  ileave::*,
  log::{debug, info},
};

#[derive(Parser)]
#[command(about = "Interleaves and de-interleaves the bits of integers")]
struct Cli {
  /// Radix used to print results.
  #[arg(long, value_enum, global = true, default_value_t = Radix::Hex)]
  format: Radix,
  #[command(subcommand)]
  command: Command,
}

#[derive(Copy, Clone, ValueEnum)]
enum Radix {
  Dec,
  Hex,
  Bin,
}

impl Radix {
  fn format(self, value: u64) -> String {
    match self {
      Radix::Dec => value.to_string(),
      Radix::Hex => format!("{:#x}", value),
      Radix::Bin => format!("{:#b}", value),
    }
  }
}

// Integer arguments accept decimal, `0x` hexadecimal and `0b` binary notation.
#[derive(Subcommand)]
enum Command {
  /// Interleaves zero bits after each bit of INPUT.
  Zeros {
    #[arg(value_parser = parse_u32)]
    input: u32,
    #[arg(short, long, value_parser = parse_u32)]
    gap: u32,
  },
  /// Removes the bits following each kept bit of INPUT.
  Remove {
    #[arg(value_parser = parse_u64)]
    input: u64,
    #[arg(short, long, value_parser = parse_u32)]
    gap: u32,
  },
  /// Builds a 2-way Morton code.
  Encode2 {
    #[arg(value_parser = parse_u32)]
    hi: u32,
    #[arg(value_parser = parse_u32)]
    lo: u32,
  },
  /// Splits a 2-way Morton code into its high and low parts.
  Decode2 {
    #[arg(value_parser = parse_u64)]
    code: u64,
  },
  /// Builds a 3-way Morton code from coordinates of at most 21 bits.
  Encode3 {
    #[arg(value_parser = parse_u32)]
    x: u32,
    #[arg(value_parser = parse_u32)]
    y: u32,
    #[arg(value_parser = parse_u32)]
    z: u32,
  },
  /// Splits a 3-way Morton code into its coordinates.
  Decode3 {
    #[arg(value_parser = parse_u64)]
    code: u64,
  },
  /// Interleaves the lowest COUNT bytes of BYTES.
  Bytes {
    #[arg(value_parser = parse_u64)]
    bytes: u64,
    #[arg(short, long)]
    count: usize,
  },
  /// De-interleaves COUNT byte lanes of BYTES.
  Unbytes {
    #[arg(value_parser = parse_u64)]
    bytes: u64,
    #[arg(short, long)]
    count: usize,
  },
  /// Prints the doubling masks for a gap width below 64.
  Masks {
    #[arg(short, long, value_parser = parse_u32)]
    gap: u32,
  },
}

fn parse_u64(text: &str) -> Result<u64> {
  let text = text.replace('_', "");
  let parsed = if let Some(hex) = text.strip_prefix("0x") {
    u64::from_str_radix(hex, 16)
  } else if let Some(bin) = text.strip_prefix("0b") {
    u64::from_str_radix(bin, 2)
  } else {
    text.parse()
  };
  parsed.with_context(|| format!("`{}` is not an unsigned integer", text))
}

fn parse_u32(text: &str) -> Result<u32> {
  let value = parse_u64(text)?;
  if value > u32::MAX as u64 {
    anyhow::bail!("`{}` does not fit into 32 bits", text);
  }
  Ok(value as u32)
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();
  let radix = cli.format;

  match cli.command {
    Command::Zeros { input, gap } => {
      debug!(
        "Interleaving {} zero bits using the {} implementation",
        gap,
        if gap <= MAX_FAST_GAP { "doubling" } else { "linear" }
      );
      let result = try_interleave_zeros(input, gap)?;
      println!("{}", radix.format(result));
    }
    Command::Remove { input, gap } => {
      println!("{}", radix.format(remove_interleaved_zeros(input, gap)));
    }
    Command::Encode2 { hi, lo } => {
      println!("{}", radix.format(interleave2(hi, lo)));
    }
    Command::Decode2 { code } => {
      let (hi, lo) = deinterleave2(code);
      println!("{} {}", radix.format(hi as u64), radix.format(lo as u64));
    }
    Command::Encode3 { x, y, z } => {
      let code = MortonCode::new(x, y, z).context("Coordinate out of range")?;
      println!("{}", radix.format(code.raw()));
    }
    Command::Decode3 { code } => {
      if MortonCode::from_raw(code).raw() != code {
        info!("Highest bit of {:#x} only round-trips for z", code);
      }
      let (x, y, z) = deinterleave3(code);
      println!(
        "{} {} {}",
        radix.format(x as u64),
        radix.format(y as u64),
        radix.format(z as u64)
      );
    }
    Command::Bytes { bytes, count } => {
      println!("{}", radix.format(try_interleave_bytes(bytes, count)?));
    }
    Command::Unbytes { bytes, count } => {
      println!("{}", radix.format(try_deinterleave_bytes(bytes, count)?));
    }
    Command::Masks { gap } => {
      if gap >= 64 {
        anyhow::bail!("Gap width {} has no doubling masks, it must be below 64", gap);
      }
      let doubling = Doubling::new(gap);
      debug!("Capacity for gap {}: {} bits", gap, interleave_capacity(gap));
      for (step, &mask) in doubling.masks().iter().enumerate() {
        println!("{} {}", step, radix.format(mask));
      }
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_integer_notations() {
    assert_eq!(parse_u64("42").unwrap(), 42);
    assert_eq!(parse_u64("0x2a").unwrap(), 42);
    assert_eq!(parse_u64("0b10_1010").unwrap(), 42);
    assert!(parse_u64("0xzz").is_err());
    assert_eq!(parse_u32("0xffff_ffff").unwrap(), u32::MAX);
    assert!(parse_u32("0x1_0000_0000").is_err());
  }

  #[test]
  fn formats_radixes() {
    assert_eq!(Radix::Dec.format(42), "42");
    assert_eq!(Radix::Hex.format(42), "0x2a");
    assert_eq!(Radix::Bin.format(42), "0b101010");
  }

  #[test]
  fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }
}

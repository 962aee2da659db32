use callconv_samples::abi::{self, OperatingSystem};
use callconv_samples::{harness, ops};
use log::info;

/// Trailing arguments used when displaying the variadic sample's
/// classification. Six is enough to push one argument off the register file
/// on x86-64.
const VARIADIC_DEMO_ARGS: usize = 6;

fn main() -> Result<(), ops::ArityMismatch> {
  let _ = simplelog::SimpleLogger::init(log::LevelFilter::Info, simplelog::Config::default());

  for sig in abi::SIGNATURES {
    let extra = if sig.variadic { VARIADIC_DEMO_ARGS } else { 0 };
    info!(
      "{:18} x86-64: {:50} arm64: {}",
      sig.name,
      abi::x86::classify(sig, extra).to_string(),
      abi::arm64::classify(OperatingSystem::Linux, sig, extra)
    );
  }

  let total = harness::run()?;
  info!("harness total: {total} (expected {})", harness::EXPECTED_TOTAL);
  Ok(())
}

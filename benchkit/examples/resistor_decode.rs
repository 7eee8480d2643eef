//! Decode a resistor from its band colors, then encode the value back.

use benchkit::prelude::*;
use benchkit::resistor::{decode, encode, Tolerance};

fn main() -> Result<(), BenchKitError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 || args.len() > 5 {
        eprintln!("Usage: cargo run --example resistor_decode <band1> <band2> ... [band5]");
        eprintln!("Example: cargo run --example resistor_decode yellow violet red gold");
        std::process::exit(1);
    }

    let colors = args
        .iter()
        .map(|a| a.parse::<BandColor>())
        .collect::<Result<Vec<_>, _>>()?;

    let decoded = decode(&colors)?;
    println!("Resistance: {}", decoded);
    println!("Exact value: {} Ω", decoded.ohms);

    let mode = if colors.len() == 5 {
        BandMode::FiveBand
    } else {
        BandMode::FourBand
    };
    let tolerance = match decoded.tolerance {
        Tolerance::Percent(p) => Some(p),
        Tolerance::Unspecified => None,
    };
    let encoded = encode(decoded.ohms, mode, tolerance)?;
    let names: Vec<&str> = encoded.colors().iter().map(|c| c.name()).collect();
    println!("Re-encoded: {}", names.join(" "));

    Ok(())
}

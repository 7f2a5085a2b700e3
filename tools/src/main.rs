// Generate the ramps listed in a Hjson file (see `config.rs`) and
// write them as CSS custom properties:
//
//   color-ramp-tools [palettes.hjson] [palettes.css]
//
// Set RUST_LOG=debug to see the anchor weight of every seed.

use std::{env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use color_ramp::{generate_ramp, Ramp};
use log::{info, warn};
use rgb::RGB8;

mod config;
use config::Config;

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Expand every seed of `config`.  Invalid seeds are reported and
/// skipped.
fn ramps(config: &Config) -> Vec<(&str, Ramp<RGB8>)> {
    config.palettes.iter().filter_map(|(name, seed)| {
        match generate_ramp(seed, &config.weights) {
            Ok(ramp) => {
                info!("{name}: {seed} anchored at {}", ramp.anchor());
                Some((name.as_str(), ramp))
            }
            Err(e) => {
                warn!("{name}: skipped, {e}");
                None
            }
        }
    }).collect()
}

fn write_css(fh: &mut impl Write, generator: &str,
             ramps: &[(&str, Ramp<RGB8>)]) -> std::io::Result<()> {
    writeln!(fh, "/* Written by {generator} */\n:root {{")?;
    for (i, (name, ramp)) in ramps.iter().enumerate() {
        if i > 0 { writeln!(fh)? }
        writeln!(fh, "  /* {name} */")?;
        for t in ramp.tokens(name) {
            let [r, g, b] = t.rgb;
            writeln!(fh, "  {}: {}; /* {r:.4} {g:.4} {b:.4} */",
                     t.css_variable(), t.hex)?;
        }
    }
    writeln!(fh, "}}")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut args = env::args();
    let generator = args.next().unwrap_or_else(|| "color-ramp-tools".into());
    let input = args.next().unwrap_or_else(|| "palettes.hjson".into());
    let output = args.next().unwrap_or_else(|| "palettes.css".into());

    let config = Config::from_reader(File::open(&input)?)?;
    info!("{input}: {} palettes, {} weights",
          config.palettes.len(), config.weights.len());
    let ramps = ramps(&config);

    let mut fh = BufWriter::new(File::create(&output)?);
    write_css(&mut fh, &generator, &ramps)?;
    fh.flush()?;
    info!("wrote {} palettes to {output}", ramps.len());
    Ok(())
}

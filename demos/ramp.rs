use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_ramp::{RGBColor, Ramp, WeightStep, WeightTable, DEFAULT_WEIGHTS,
                 generate_ramp, rgb_to_hex};
use rgb::RGB8;

type Err = Box<dyn Error>;

fn table_of_ramp(fh: &mut impl Write, ramp: &Ramp<RGB8>,
                 width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &(w, c) in ramp {
        let mark = if w == ramp.anchor() { "*" } else { "" };
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\">{w}{mark}</td>",
                 rgb_to_hex(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &(_, c) in ramp {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 rgb_to_hex(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn seed(fh: &mut impl Write, hex: &str, weights: &WeightTable)
        -> Result<(), Err> {
    let ramp = generate_ramp(hex, weights)?;
    table_of_ramp(fh, &ramp, 50, hex)
}


fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("ramp.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_ramp: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<p>The anchor weight of each seed is starred.</p>")?;

    writeln!(fh, "<h3>Seeds</h3>")?;
    for hex in ["#3B82F6", "#ef4444", "#22c55e", "#a855f7", "#f59e0b",
                "#64748b", "#0f0", "#e0f2fe", "#123"] {
        seed(&mut fh, hex, &DEFAULT_WEIGHTS)?;
    }

    writeln!(fh, "<h3>Extremes</h3>")?;
    for hex in ["#fff", "#000", "#808080"] {
        seed(&mut fh, hex, &DEFAULT_WEIGHTS)?;
    }

    writeln!(fh, "<h3>Five steps</h3>")?;
    let five = WeightTable::new(vec![WeightStep::new(100, 0.9, 0.9),
                                     WeightStep::new(300, 0.7, 1.),
                                     WeightStep::new(500, 0.5, 1.),
                                     WeightStep::new(700, 0.3, 1.),
                                     WeightStep::new(900, 0.1, 0.9)])?;
    for hex in ["#3B82F6", "#ef4444"] {
        seed(&mut fh, hex, &five)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}

use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::{
    cli::Config,
    design::{DesignRow, HeaderMismatch, Layout},
};

/// Counts collected while reformatting
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub blank: usize,
}

/// Read and check the header line, returning the layout it describes
pub fn read_header<R: BufRead>(rdr: &mut R) -> anyhow::Result<Layout> {
    let mut buf = String::new();
    rdr.read_line(&mut buf)?;
    let layout = Layout::from_header(&buf)?;
    debug!("Header matches {:?} layout", layout);
    Ok(layout)
}

/// Write out the normalized header followed by one line per design row
pub fn reformat_rows<R: BufRead, W: Write>(
    rdr: &mut R,
    wrt: &mut W,
    layout: Layout,
) -> anyhow::Result<Summary> {
    writeln!(wrt, "{}", Layout::Regular)?;

    let mut buf = String::new();
    let mut summary = Summary::default();
    // Header is line 1
    let mut line = 1;
    loop {
        buf.clear();
        if rdr.read_line(&mut buf)? == 0 {
            break;
        }
        line += 1;
        let s = buf.trim_end_matches(['\n', '\r']);
        if s.is_empty() {
            debug!("Skipping blank line {}", line);
            summary.blank += 1;
            continue;
        }
        let row = DesignRow::from_line(s, layout)
            .with_context(|| format!("Error at line {} of design file", line))?;
        trace!(
            "Sample {}: celltype {}, condition {}, control {}, reads {}, type {}, time {}",
            row.name(),
            row.celltype(),
            row.condition(),
            row.control(),
            row.reads(),
            row.sample_type(),
            row.time()
        );
        writeln!(wrt, "{}", row)?;
        summary.rows += 1;
    }
    wrt.flush()?;
    Ok(summary)
}

pub fn reformat(cfg: &Config) -> anyhow::Result<()> {
    let input = cfg.input();
    let mut rdr = CompressIo::new()
        .path(input)
        .bufreader()
        .with_context(|| format!("Could not open design file {}", input.display()))?;
    debug!("Opened {} for input", input.display());

    let layout = read_header(&mut rdr).map_err(|e| {
        if let Some(h) = e.downcast_ref::<HeaderMismatch>() {
            warn!("Unexpected header in {}: '{}'", input.display(), h.found());
        }
        e
    })?;
    info!(
        "{} design file ({} columns)",
        if layout.is_regular() { "Regular" } else { "Minimal" },
        layout.columns().len()
    );

    let output = cfg.output();
    let mut wrt = BufWriter::new(
        File::create(output)
            .with_context(|| format!("Could not create output file {}", output.display()))?,
    );
    debug!("Opened {} for output", output.display());

    let summary = reformat_rows(&mut rdr, &mut wrt, layout)
        .with_context(|| format!("Failed to reformat {}", input.display()))?;

    if summary.blank > 0 {
        warn!("Skipped {} blank lines", summary.blank);
    }
    info!("Wrote {} samples to {}", summary.rows, output.display());
    Ok(())
}

use std::{fmt, path::Path};

use super::Layout;

pub const DEFAULT_TYPE: &str = "pulse";
pub const DEFAULT_TIME: &str = "0";

/// One sample of a design file with all defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRow {
    celltype: Box<str>,
    condition: Box<str>,
    control: Box<str>,
    reads: Box<str>,
    name: Box<str>,
    sample_type: Box<str>,
    time: Box<str>,
}

/// File name of `reads` up to (not including) its first '.'
pub fn file_base_name(reads: &str) -> &str {
    let fname = Path::new(reads)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(reads);
    fname.split('.').next().unwrap_or(fname)
}

fn or_default<'a>(s: &'a str, default: &'a str) -> Box<str> {
    Box::from(if s.is_empty() { default } else { s })
}

impl DesignRow {
    /// Build a row from the tab separated fields of one line. The
    /// optional columns are only read for the regular layout; missing or
    /// empty values get their defaults.
    pub fn from_fields(fields: &[&str], layout: Layout) -> anyhow::Result<Self> {
        if fields.len() < 4 {
            return Err(anyhow!(
                "Too few fields (seen {}, expected at least 4)",
                fields.len()
            ));
        }
        let reads = fields[3];
        let opt = |ix: usize| {
            if layout.is_regular() {
                fields.get(ix).copied().unwrap_or("")
            } else {
                ""
            }
        };

        Ok(Self {
            celltype: Box::from(fields[0]),
            condition: Box::from(fields[1]),
            control: Box::from(fields[2]),
            reads: Box::from(reads),
            name: or_default(opt(4), file_base_name(reads)),
            sample_type: or_default(opt(5), DEFAULT_TYPE),
            time: or_default(opt(6), DEFAULT_TIME),
        })
    }

    pub fn from_line(line: &str, layout: Layout) -> anyhow::Result<Self> {
        let fields: Vec<_> = line.split('\t').collect();
        Self::from_fields(&fields, layout)
    }

    pub fn celltype(&self) -> &str {
        &self.celltype
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn reads(&self) -> &str {
        &self.reads
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_type(&self) -> &str {
        &self.sample_type
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

impl fmt::Display for DesignRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.celltype,
            self.condition,
            self.control,
            self.reads,
            self.name,
            self.sample_type,
            self.time
        )
    }
}

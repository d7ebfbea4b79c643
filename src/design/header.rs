use std::{error::Error, fmt};

use super::*;

const MINIMAL_COLS: [&str; 4] = [COL_CELLTYPE, COL_CONDITION, COL_CONTROL, COL_READS];

const REGULAR_COLS: [&str; 7] = [
    COL_CELLTYPE,
    COL_CONDITION,
    COL_CONTROL,
    COL_READS,
    COL_NAME,
    COL_TYPE,
    COL_TIME,
];

/// Column layout of a design file, fixed by its header line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Only the four required columns
    Minimal,
    /// Required columns plus name, type and time
    Regular,
}

impl Layout {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Minimal => &MINIMAL_COLS,
            Self::Regular => &REGULAR_COLS,
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular)
    }

    /// Check a header line against the permitted layouts. Trailing
    /// whitespace (including a DOS line ending) is ignored, otherwise the
    /// match is exact and order sensitive.
    pub fn from_header(line: &str) -> Result<Self, HeaderMismatch> {
        let line = line.trim_end();
        let fields: Vec<_> = line.split('\t').collect();
        [Self::Minimal, Self::Regular]
            .into_iter()
            .find(|l| l.columns() == fields.as_slice())
            .ok_or_else(|| HeaderMismatch::new(line))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.columns().join("\t"))
    }
}

/// The header line matched neither layout
#[derive(Debug)]
pub struct HeaderMismatch {
    found: Box<str>,
}

impl HeaderMismatch {
    fn new(found: &str) -> Self {
        Self {
            found: Box::from(found),
        }
    }

    pub fn found(&self) -> &str {
        &self.found
    }
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ERROR: Please check design file header: expected '{}' or '{}', found '{}'",
            Layout::Minimal,
            Layout::Regular,
            self.found
        )
    }
}

impl Error for HeaderMismatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_header() {
        let l = Layout::from_header("celltype\tcondition\tcontrol\treads\n").unwrap();
        assert_eq!(l, Layout::Minimal);
        assert!(!l.is_regular());
    }

    #[test]
    fn regular_header() {
        let l =
            Layout::from_header("celltype\tcondition\tcontrol\treads\tname\ttype\ttime\r\n")
                .unwrap();
        assert_eq!(l, Layout::Regular);
        assert!(l.is_regular());
        assert_eq!(l.columns().len(), 7);
    }

    #[test]
    fn rejects_other_headers() {
        for h in [
            "",
            "celltype\tcondition\tcontrol",
            "condition\tcelltype\tcontrol\treads",
            "celltype,condition,control,reads",
            "celltype\tcondition\tcontrol\treads\tname",
            "celltype\tcondition\tcontrol\treads\tname\ttype\ttime\textra",
            "Celltype\tcondition\tcontrol\treads",
        ] {
            let e = Layout::from_header(h).unwrap_err();
            assert_eq!(e.found(), h);
        }
    }

    #[test]
    fn mismatch_message_names_both_layouts() {
        let e = Layout::from_header("sample\treads\n").unwrap_err();
        let msg = e.to_string();
        assert!(msg.contains("'celltype\tcondition\tcontrol\treads'"));
        assert!(msg.contains("'celltype\tcondition\tcontrol\treads\tname\ttype\ttime'"));
        assert!(msg.ends_with("found 'sample\treads'"));
    }
}

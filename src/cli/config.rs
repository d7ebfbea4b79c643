use std::path::{Path, PathBuf};

mod mk_config;

pub struct Config {
    input: PathBuf,
    output: PathBuf,
}

impl Config {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Self {
        Self {
            input: input.as_ref().to_owned(),
            output: output.as_ref().to_owned(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

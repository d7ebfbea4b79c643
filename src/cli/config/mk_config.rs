use std::path::{Path, PathBuf};

use clap::ArgMatches;

use super::Config;

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let input = m
            .try_get_one::<PathBuf>("input")?
            .ok_or_else(|| anyhow!("Missing input design file"))?;

        let output = m
            .try_get_one::<PathBuf>("output")?
            .ok_or_else(|| anyhow!("Missing output design file"))?;

        if same_file(input, output)? {
            return Err(anyhow!(
                "Input and output design files must differ ({} and {})",
                input.display(),
                output.display()
            ));
        }

        debug!("Input design file: {}", input.display());
        debug!("Output design file: {}", output.display());

        Ok(Config::new(input, output))
    }
}

// Creating the output truncates it, so an output that already exists must
// not resolve to the input
fn same_file(input: &Path, output: &Path) -> anyhow::Result<bool> {
    if input == output {
        Ok(true)
    } else if output.exists() && input.exists() {
        Ok(input.canonicalize()? == output.canonicalize()?)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::{prelude::*, TempDir};

    use super::*;
    use crate::cli::cli_model::cli_model;

    #[test]
    fn paths_from_command_line() {
        let m = cli_model()
            .try_get_matches_from(["check_design", "design.tsv", "design.out.tsv"])
            .unwrap();
        let cfg = Config::from_matches(&m).unwrap();
        assert_eq!(cfg.input(), Path::new("design.tsv"));
        assert_eq!(cfg.output(), Path::new("design.out.tsv"));
    }

    #[test]
    fn refuses_to_overwrite_input() {
        let m = cli_model()
            .try_get_matches_from(["check_design", "design.tsv", "design.tsv"])
            .unwrap();
        assert!(Config::from_matches(&m).is_err());
    }

    #[test]
    fn refuses_input_reached_by_another_path() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("design.tsv");
        input.write_str("celltype\tcondition\tcontrol\treads\n").unwrap();
        temp.child("sub").create_dir_all().unwrap();
        let indirect = temp.path().join("sub").join("..").join("design.tsv");

        let m = cli_model()
            .try_get_matches_from([
                "check_design".into(),
                input.path().as_os_str().to_owned(),
                indirect.into_os_string(),
            ])
            .unwrap();
        assert!(Config::from_matches(&m).is_err());
    }

    #[test]
    fn new_output_is_accepted() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("design.tsv");
        input.write_str("celltype\tcondition\tcontrol\treads\n").unwrap();
        let output = temp.child("design.out.tsv");

        let m = cli_model()
            .try_get_matches_from([
                "check_design".into(),
                input.path().as_os_str().to_owned(),
                output.path().as_os_str().to_owned(),
            ])
            .unwrap();
        let cfg = Config::from_matches(&m).unwrap();
        assert_eq!(cfg.output(), output.path());
    }
}

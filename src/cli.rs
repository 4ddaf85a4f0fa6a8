use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::data::loader::ParseMode;

// ---------------------------------------------------------------------------
// Command line interface
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Weight files to plot, each as PATH or PATH=LABEL.
    /// Defaults to hidden_weights.csv=Hidden output_weights.csv=Output
    /// in the current directory.
    #[arg(value_name = "PATH[=LABEL]")]
    pub inputs: Vec<InputSpec>,

    /// Fail on non-numeric tokens or ragged rows instead of substituting NaN
    #[arg(long)]
    pub strict: bool,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,
}

impl Args {
    /// Inputs to load, falling back to the classic hidden/output pair.
    pub fn effective_inputs(&self) -> Vec<InputSpec> {
        if self.inputs.is_empty() {
            vec![
                InputSpec {
                    path: PathBuf::from("hidden_weights.csv"),
                    label: Some("Hidden".to_string()),
                },
                InputSpec {
                    path: PathBuf::from("output_weights.csv"),
                    label: Some("Output".to_string()),
                },
            ]
        } else {
            self.inputs.clone()
        }
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Tolerant
        }
    }
}

/// One input argument: a file path with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: PathBuf,
    pub label: Option<String>,
}

impl FromStr for InputSpec {
    type Err = String;

    /// `PATH=LABEL` splits on the last `=` so paths containing `=` still
    /// work when a label is given; a bare `PATH` has no label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty input spec".to_string());
        }
        match s.rsplit_once('=') {
            Some((path, label)) if !path.is_empty() && !label.is_empty() => Ok(InputSpec {
                path: PathBuf::from(path),
                label: Some(label.to_string()),
            }),
            Some(_) => Err(format!("invalid input spec '{s}', expected PATH[=LABEL]")),
            None => Ok(InputSpec {
                path: PathBuf::from(s),
                label: None,
            }),
        }
    }
}

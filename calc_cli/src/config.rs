use clap::{Parser, ValueEnum};

/// Command line options for the estimator prompt
#[derive(Parser, Debug, Clone)]
#[command(name = "calc_cli")]
#[command(about = "Estimador de terreno, cômodos e terraplenagem")]
#[command(version)]
pub struct CliConfig {
    /// Run mode; asked interactively when omitted
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Also print the earthwork estimate as JSON (demo mode)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fixed example: 20x30 plot, 0.5 m of sand
    Demo,
    /// Question-and-answer session
    Interactive,
}

impl Mode {
    /// Map the `a/i` answer of the start-up question; anything but `i`
    /// runs the demo.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "i" => Mode::Interactive,
            _ => Mode::Demo,
        }
    }
}

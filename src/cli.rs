// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::demos::Demo;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-field")]
#[command(about = "Animated cube field viewer", long_about = None)]
pub struct Cli {
    /// Demo preset to run
    #[arg(long, value_enum, default_value_t = Demo::Buffers)]
    pub demo: Demo,

    /// Override the preset's cube count
    #[arg(long)]
    pub count: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

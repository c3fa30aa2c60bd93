use clap::{ArgAction, Parser, ValueEnum};
use loop_coalesce::{CoalesceFactor, DeviceKind, Fill, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "loop_coalesce",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run a 4x4 matrix multiply with and without loop coalescing and check the results."
)]
pub struct Cli {
    /// Execution target
    #[arg(long, value_enum, default_value_t = DeviceArg::Emulator)]
    pub device: DeviceArg,

    /// Loop levels to merge (1, 2 or 3); repeat to run several variants
    #[arg(short = 'f', long = "factor", value_name = "N", default_values = ["1", "2"])]
    pub factors: Vec<CoalesceFactor>,

    /// How the input matrices are populated
    #[arg(long, value_enum, default_value_t = FillArg::Identity)]
    pub fill: FillArg,

    /// Seed for `--fill random`
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Submit the variants from separate threads
    #[arg(long)]
    pub concurrent: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceArg {
    Emulator,
    Simulator,
    Hardware,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillArg {
    Identity,
    Zeros,
    Random,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        let device = match self.device {
            DeviceArg::Emulator => DeviceKind::Emulator,
            DeviceArg::Simulator => DeviceKind::Simulator,
            DeviceArg::Hardware => DeviceKind::Hardware,
        };
        let fill = match self.fill {
            FillArg::Identity => Fill::Identity,
            FillArg::Zeros => Fill::Zeros,
            FillArg::Random => Fill::Random { seed: self.seed },
        };
        RunConfig {
            device,
            factors: self.factors.clone(),
            fill,
            concurrent: self.concurrent,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

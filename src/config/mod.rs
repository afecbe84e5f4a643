pub mod settings;

pub use settings::{AttributeRanges, Bounds, ImageTable, ProfitTable, Settings};

#[cfg(feature = "cli")]
pub mod cli {
    use clap::Parser;

    /// One prediction request from the command line. Defaults mirror the
    /// original interactive form.
    #[derive(Debug, Clone, Parser)]
    #[command(name = "crop-advisor")]
    #[command(about = "Recommends a crop from soil figures and live weather")]
    pub struct CliConfig {
        /// Nitrogen content of the soil
        #[arg(long, short = 'n', default_value = "90")]
        pub nitrogen: f64,

        /// Phosphorus content of the soil
        #[arg(long, short = 'p', default_value = "40")]
        pub phosphorus: f64,

        /// Potassium content of the soil
        #[arg(long, short = 'k', default_value = "45")]
        pub potassium: f64,

        /// Soil pH
        #[arg(long, default_value = "6.5")]
        pub ph: f64,

        /// Expected rainfall in mm
        #[arg(long, default_value = "200")]
        pub rainfall: f64,

        /// City for the live weather lookup, e.g. "Hyderabad,IN"
        #[arg(long, default_value = "Hyderabad,IN")]
        pub city: String,

        /// Output language (name or ISO code, e.g. "Telugu" or "te")
        #[arg(long, default_value = "English")]
        pub language: String,

        /// Path to a settings TOML; the built-in defaults are used when absent
        #[arg(long)]
        pub config: Option<String>,

        /// Enable verbose output
        #[arg(long, short = 'v')]
        pub verbose: bool,
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

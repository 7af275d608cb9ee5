use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "schemescope-server")]
#[command(author, version, about = "SchemeScope welfare scheme search service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Comment source base URL
    #[arg(short = 's', long, env = "SCHEMESCOPE_COMMENT_SOURCE")]
    pub comment_source: Option<String>,

    /// Catalog YAML file (defaults to the bundled catalog)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Serve sample comments and skip text generation
    #[arg(long)]
    pub offline: bool,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

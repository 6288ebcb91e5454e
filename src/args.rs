use clap::Parser;

/// This is a demonstration electronic-voting session runner.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The JSON file with the static demo data: region registry,
    /// admin credentials, elections and the mock result figures.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The JSON scenario to replay: an ordered list of UI events
    /// (logins, votes, dashboard views, logout).
    #[clap(short, long, value_parser)]
    pub scenario: Option<String>,

    /// (file path) A reference transcript in JSON format. If provided, the
    /// runner checks that the replayed transcript matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the transcript of the
    /// scenario will be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}

use clap::Parser;
use echo_deploy_config::config::{self, split_key_path};
use echo_deploy_config::logging;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "echo-config",
    version,
    about = "Print the resolved deployment configuration for the flask-echo image.",
    long_about = "Resolves every setting from APP_<SECTION>_<KEY> environment variables, then config.ini \
                  (next to the executable, or ./config/config.ini), then built-in defaults. \
                  With no options the full configuration is printed for operators."
)]
struct Args {
    /// Print the resolved settings as JSON instead of the text dump.
    #[arg(long, conflicts_with_all = ["get", "source"])]
    json: bool,

    /// Resolve a single value, given as <section>.<key>.
    #[arg(long, value_name = "SECTION.KEY", conflicts_with = "source")]
    get: Option<String>,

    /// Value printed by --get when neither the environment nor the file has the key.
    #[arg(long, requires = "get")]
    default: Option<String>,

    /// Print the path of the loaded config file, or <none>.
    #[arg(long)]
    source: bool,

    /// Log discovery and parsing details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let resolver = config::initialize();

    if let Some(path) = args.get.as_deref() {
        let (section, key) = split_key_path(path)?;
        let default = args.default.as_deref().unwrap_or_default();
        println!("{}", resolver.get_str(section, key, default));
    } else if args.source {
        match resolver.source_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("<none>"),
        }
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(config::settings())?);
    } else {
        config::print_all();
    }

    Ok(())
}

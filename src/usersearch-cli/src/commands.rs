use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 4 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("usersearch")
        .about("Query a user search service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON client config file")
                .env("USERSEARCH_CONFIG"),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Service base URL, example: http://localhost:8080")
                .env("USERSEARCH_URL")
                .required_unless_present("config"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Access token")
                .env("USERSEARCH_TOKEN"),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .help("Page size")
                .default_value("10")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("offset")
                .short('o')
                .long("offset")
                .help("Index of the first user")
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .help("Text filter")
                .default_value(""),
        )
        .arg(
            Arg::new("order-field")
                .long("order-field")
                .help("Field to sort by, empty for the service default")
                .default_value(""),
        )
        .arg(
            Arg::new("order-by")
                .long("order-by")
                .help("Sort direction: -1 descending, 0 as is, 1 ascending")
                .default_value("0")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32).range(-1..=1)),
        )
        .arg(
            Arg::new("timeout-ms")
                .long("timeout-ms")
                .help("Request deadline in milliseconds, 0 for none")
                .env("USERSEARCH_TIMEOUT_MS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERSEARCH_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Set)
                .num_args(1)
                .value_parser(validator_log_level()),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .help("Emit logs as JSON")
                .action(ArgAction::SetTrue),
        )
}

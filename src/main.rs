use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::error;
use hero_streets::{Config, Error, MatchMode, list, scan, survey};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli().get_matches();

    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    let mode = Arg::new("mode")
        .long("mode")
        .help("Count every matching element (all) or each normalized street name once (unique)")
        .value_parser(|s: &str| s.parse::<MatchMode>())
        .default_value("unique");

    Command::new("hero-streets")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find OpenStreetMap streets named after a historical figure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("threshold")
            .long("threshold")
            .global(true)
            .help("Minimum similarity ratio for a fuzzy match [env: HERO_STREETS_THRESHOLD]")
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("min-word-len")
            .long("min-word-len")
            .global(true)
            .help("Street words must be longer than this to be compared alone [env: HERO_STREETS_MIN_WORD_LEN]")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("delay-ms")
            .long("delay-ms")
            .global(true)
            .help("Pause after every geocoder/Overpass call [env: HERO_STREETS_DELAY_MS]")
            .value_parser(value_parser!(u64)))
        .subcommand(Command::new("survey")
            .about("Count matching streets in every region of a country")
            .arg(Arg::new("hero")
                .long("hero")
                .action(ArgAction::Append)
                .help("Full name of the person, may be repeated"))
            .arg(Arg::new("country")
                .long("country")
                .default_value("RU")
                .help("ISO 3166-1 alpha-2 country code"))
            .arg(Arg::new("region")
                .long("region")
                .action(ArgAction::Append)
                .help("Region to survey instead of the built in list, may be repeated"))
            .arg(mode.clone())
            .arg(Arg::new("output")
                .long("output")
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Directory CSV results are written to"))
            .arg(Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Hide the progress bar"))
            .arg(Arg::new("ways-only")
                .long("ways-only")
                .action(ArgAction::SetTrue)
                .help("Count highway ways only, skipping highway relations")))
        .subcommand(Command::new("scan")
            .about("Match a line delimited JSON dump of Overpass elements")
            .arg(Arg::new("hero")
                .long("hero")
                .required(true)
                .help("Full name of the person"))
            .arg(Arg::new("region")
                .long("region")
                .default_value("-")
                .help("Region label attached to each match"))
            .arg(mode)
            .arg(Arg::new("errors")
                .long("errors")
                .help("Append rejected lines to this file"))
            .arg(Arg::new("INPUT")
                .help("Input file, stdin if omitted")))
        .subcommand(Command::new("variants")
            .about("Print the name variants generated for a person")
            .arg(Arg::new("NAME")
                .required(true)
                .num_args(1..)
                .help("Full name, quoted or as separate words")))
        .subcommand(Command::new("regions")
            .about("List the built in regions of a country")
            .arg(Arg::new("country")
                .long("country")
                .default_value("RU")))
}

fn run(args: &ArgMatches) -> Result<(), Error> {
    let (name, sub_args) = match args.subcommand() {
        Some(subcommand) => subcommand,
        None => { return Err(Error::Config(String::from("Invalid Subcommand: ./hero-streets --help for valid options"))); }
    };

    let mut config = Config::from_env()?;

    // global flags are propagated down to every subcommand
    if let Some(threshold) = sub_args.get_one::<f64>("threshold") {
        config.matching.threshold = *threshold;
    }
    if let Some(min_word_len) = sub_args.get_one::<usize>("min-word-len") {
        config.matching.min_word_len = *min_word_len;
    }
    if let Some(delay_ms) = sub_args.get_one::<u64>("delay-ms") {
        config.delay_ms = *delay_ms;
    }

    config.validate()?;

    match name {
        "survey" => survey::main(&config, survey::SurveyArgs {
            heroes: strings(sub_args, "hero"),
            country: string(sub_args, "country"),
            regions: strings(sub_args, "region"),
            mode: mode(sub_args),
            output: sub_args.get_one::<PathBuf>("output").cloned().unwrap_or_else(|| PathBuf::from(".")),
            quiet: sub_args.get_flag("quiet"),
            ways_only: sub_args.get_flag("ways-only")
        }),
        "scan" => scan::main(&config, scan::ScanArgs {
            hero: string(sub_args, "hero"),
            region: string(sub_args, "region"),
            mode: mode(sub_args),
            input: sub_args.get_one::<String>("INPUT").cloned(),
            errors: sub_args.get_one::<String>("errors").cloned()
        }),
        "variants" => {
            list::variants(&strings(sub_args, "NAME").join(" "));
            Ok(())
        },
        "regions" => {
            list::regions(&string(sub_args, "country"));
            Ok(())
        },
        _ => Err(Error::Config(String::from("Invalid Subcommand: ./hero-streets --help for valid options")))
    }
}

fn string(args: &ArgMatches, id: &str) -> String {
    args.get_one::<String>(id).cloned().unwrap_or_default()
}

fn strings(args: &ArgMatches, id: &str) -> Vec<String> {
    match args.get_many::<String>(id) {
        Some(values) => values.cloned().collect(),
        None => Vec::new()
    }
}

fn mode(args: &ArgMatches) -> MatchMode {
    args.get_one::<MatchMode>("mode").copied().unwrap_or(MatchMode::Unique)
}

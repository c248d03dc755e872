use super::*;
use crate::search::{parse_input, Input};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["gemfinder-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_db_ping_command() {
    let cli =
        Cli::try_parse_from(["gemfinder-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["gemfinder-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn search_uses_default_thresholds() {
    let cli = Cli::try_parse_from(["gemfinder-cli", "search", "ramen in astoria"]).unwrap();

    let Some(Commands::Search {
        query,
        thresholds,
        json,
    }) = cli.command
    else {
        panic!("expected search command");
    };
    assert_eq!(query, "ramen in astoria");
    assert_eq!(
        thresholds,
        Thresholds {
            min_rating: DEFAULT_MIN_RATING,
            max_reviews: DEFAULT_MAX_REVIEWS,
        }
    );
    assert!(!json);
}

#[test]
fn search_accepts_threshold_overrides_and_json() {
    let cli = Cli::try_parse_from([
        "gemfinder-cli",
        "search",
        "bakeries",
        "--min-rating",
        "4.2",
        "--max-reviews",
        "250",
        "--json",
    ])
    .unwrap();

    let Some(Commands::Search {
        thresholds, json, ..
    }) = cli.command
    else {
        panic!("expected search command");
    };
    assert!((thresholds.min_rating - 4.2).abs() < f64::EPSILON);
    assert_eq!(thresholds.max_reviews, 250);
    assert!(json);
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["gemfinder-cli", "search"]).is_err());
}

#[test]
fn negative_max_reviews_is_rejected() {
    let result = Cli::try_parse_from([
        "gemfinder-cli",
        "search",
        "bars",
        "--max-reviews",
        "-5",
    ]);
    assert!(result.is_err());
}

#[test]
fn interactive_takes_thresholds() {
    let cli = Cli::try_parse_from(["gemfinder-cli", "interactive", "--max-reviews", "40"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Interactive {
            thresholds: Thresholds {
                max_reviews: 40,
                ..
            }
        })
    ));
}

#[test]
fn parse_input_recognizes_commands() {
    assert_eq!(parse_input("  "), Input::Empty);
    assert_eq!(parse_input(":again"), Input::Again);
    assert_eq!(parse_input(":q"), Input::Quit);
    assert_eq!(parse_input("  tacos in mesa \n"), Input::Query("tacos in mesa"));
}

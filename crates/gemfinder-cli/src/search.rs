//! `search` and `interactive` commands.

use gemfinder_core::{AppConfig, QueryPhase, QueryState, SearchParams};
use gemfinder_db::PgPlaceSink;
use gemfinder_places::{run_search, PlacesClient};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::render_outcome;
use crate::Thresholds;

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input<'a> {
    Query(&'a str),
    /// Re-run the last executed query.
    Again,
    Quit,
    Empty,
}

pub(crate) fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Empty,
        ":again" | ":a" => Input::Again,
        ":quit" | ":q" => Input::Quit,
        query => Input::Query(query),
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    Ok(PlacesClient::with_base_url(
        &config.google_maps_api_key,
        config.places_request_timeout_secs,
        &config.places_base_url,
    )?)
}

/// Sink over a lazily connected pool. Storage being down only shows up as
/// per-record save failures in the outcome.
fn build_sink(config: &AppConfig) -> anyhow::Result<PgPlaceSink> {
    let pool = gemfinder_db::connect_pool_lazy(
        &config.database_url,
        gemfinder_db::PoolConfig::from_app_config(config),
    )?;
    Ok(PgPlaceSink::new(pool))
}

/// Runs one search and returns what `search` prints.
pub(crate) async fn search_output(
    config: &AppConfig,
    query: &str,
    thresholds: Thresholds,
    json: bool,
) -> anyhow::Result<String> {
    // Reject bad input before any provider or storage traffic.
    let params = SearchParams::new(query, thresholds.min_rating, thresholds.max_reviews)?;
    let client = build_client(config)?;
    let sink = build_sink(config)?;

    let outcome = run_search(&client, &sink, &params, config.places_max_pages).await;

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&outcome.records)?))
    } else {
        Ok(render_outcome(&params, &outcome))
    }
}

pub(crate) async fn run_search_command(
    config: &AppConfig,
    query: &str,
    thresholds: Thresholds,
    json: bool,
) -> anyhow::Result<()> {
    print!("{}", search_output(config, query, thresholds, json).await?);
    Ok(())
}

/// Reads queries line by line. A search runs only when the query differs
/// from the last one executed, or when the user asks for `:again`.
pub(crate) async fn run_interactive(
    config: &AppConfig,
    thresholds: Thresholds,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let sink = build_sink(config)?;
    let mut state = QueryState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!(
        "min rating {}, max reviews {}. Enter a query, :again to repeat, :quit to exit.",
        thresholds.min_rating, thresholds.max_reviews
    );

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::Empty => continue,
            Input::Again => {
                let Some(last) = state.last_executed().map(str::to_owned) else {
                    eprintln!("nothing to repeat yet");
                    continue;
                };
                state.force(&last);
            }
            Input::Query(query) => {
                if state.submit(query) == QueryPhase::Idle {
                    eprintln!("query unchanged; enter :again to search again");
                    continue;
                }
            }
        }

        let Some(query) = state.take_pending() else {
            continue;
        };

        let params =
            match SearchParams::new(&query, thresholds.min_rating, thresholds.max_reviews) {
                Ok(params) => params,
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            };

        let outcome = run_search(&client, &sink, &params, config.places_max_pages).await;
        print!("{}", render_outcome(&params, &outcome));
    }

    Ok(())
}

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use localbites_core::config::AppConfig;
use localbites_core::onboarding::{OnboardingGate, PersonalizationFlow, Route};
use localbites_core::preferences::{CUISINES, MAX_DISTANCE_MILES, MIN_DISTANCE_MILES, PriceRange};
use localbites_core::search::SearchSession;
use localbites_core::store::{LibSqlKv, PreferenceStore};

type StdinLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    eprintln!("🍜 LocalBites v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!("   Commands: /recent, /reset, /quit\n");

    let kv = LibSqlKv::open(&config.db_path).await.unwrap_or_else(|e| {
        eprintln!(
            "Error: Failed to open database at {}: {}",
            config.db_path.display(),
            e
        );
        std::process::exit(1);
    });
    let store = Arc::new(PreferenceStore::new(Arc::new(kv)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Re-run the gate after every reset, like an app restart would.
    loop {
        let gate = OnboardingGate::new(Arc::clone(&store));
        let route = gate
            .resolve()
            .await
            .expect("gate was not invalidated mid-read");

        if route == Route::Onboarding
            && !run_personalization(&store, &mut lines).await?
        {
            return Ok(());
        }

        if !run_search(&store, &mut lines).await? {
            return Ok(());
        }
    }
}

async fn prompt(lines: &mut StdinLines, text: &str) -> anyhow::Result<Option<String>> {
    eprint!("{text}");
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

/// Collect preferences interactively. Returns `false` on EOF.
async fn run_personalization(
    store: &Arc<PreferenceStore>,
    lines: &mut StdinLines,
) -> anyhow::Result<bool> {
    eprintln!("Personalize LocalBites — set your default filters.\n");

    let mut flow = PersonalizationFlow::new(Arc::clone(store));

    let tiers: Vec<String> = PriceRange::ALL.iter().map(|p| p.to_string()).collect();
    let Some(answer) = prompt(lines, &format!("Price range ({}) [$$]: ", tiers.join("/"))).await?
    else {
        return Ok(false);
    };
    if let Some(pos) = tiers.iter().position(|t| *t == answer) {
        flow.select_price(PriceRange::ALL[pos]);
    }

    let Some(answer) = prompt(
        lines,
        &format!("Max distance in miles ({MIN_DISTANCE_MILES}-{MAX_DISTANCE_MILES}) [5]: "),
    )
    .await?
    else {
        return Ok(false);
    };
    if let Ok(miles) = answer.parse::<u8>() {
        flow.set_distance(miles);
    }

    eprintln!("Cuisines: {}", CUISINES.join(", "));
    let Some(answer) = prompt(lines, "Pick any (comma-separated, or none): ").await? else {
        return Ok(false);
    };
    for name in answer.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        flow.toggle_cuisine(name);
    }

    // Save failures are retryable, not fatal.
    while let Err(e) = flow.complete().await {
        let Some(answer) = prompt(
            lines,
            &format!("Couldn't save ({e}). Retry? [y/N]: "),
        )
        .await?
        else {
            return Ok(false);
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(false);
        }
    }

    eprintln!("Saved.\n");
    Ok(true)
}

/// The search REPL. Returns `true` to re-run the gate (after a reset),
/// `false` to quit.
async fn run_search(
    store: &Arc<PreferenceStore>,
    lines: &mut StdinLines,
) -> anyhow::Result<bool> {
    if let Some(prefs) = store.preferences().await? {
        eprintln!(
            "Filters: {} · {} mi · {}",
            prefs.price_range,
            prefs.max_distance_miles,
            if prefs.cuisines.is_empty() {
                "any cuisine".to_string()
            } else {
                prefs.cuisines.join(", ")
            }
        );
    }

    let mut session = SearchSession::new();

    loop {
        let Some(query) = prompt(lines, "search> ").await? else {
            return Ok(false);
        };
        match query.as_str() {
            "/quit" => return Ok(false),
            "/reset" => {
                store.reset().await?;
                eprintln!("Onboarding reset.\n");
                return Ok(true);
            }
            "/recent" => {
                for entry in session.recent() {
                    eprintln!("  {entry}");
                }
            }
            _ => {
                for hit in session.submit(&query) {
                    eprintln!("  {hit}");
                }
            }
        }
    }
}

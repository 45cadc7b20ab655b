use clap::Parser;
use errands::utils::{logger, validation::Validate};
use errands::{
    CatalogSource, CliConfig, LlmPlanner, NextRunPlanner, Planner, RunPlan, Snapshot, TomlCatalog,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting errands CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = TomlCatalog::new(&config.catalog);
    let snapshot = match catalog.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to load catalog '{}': {}", config.catalog, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} stores and {} items from {}",
        snapshot.stores.len(),
        snapshot.items.len(),
        config.catalog
    );

    let today = config
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let planner: Box<dyn Planner> = if config.llm {
        let api_key = config.llm_api_key.clone().unwrap_or_default();
        Box::new(LlmPlanner::new(config.llm_endpoint.clone(), api_key))
    } else {
        match config.max_stores {
            Some(cap) => Box::new(NextRunPlanner::with_universe_cap(cap)),
            None => Box::new(NextRunPlanner::new()),
        }
    };

    match planner.plan(&snapshot, today).await {
        Ok(plan) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan, &snapshot);
            }
        }
        Err(e) => {
            tracing::error!("Planning failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_plan(plan: &RunPlan, snapshot: &Snapshot) {
    if plan.is_empty() {
        println!("Nothing to buy in the next run.");
        return;
    }
    for (store_name, item_names) in plan {
        println!("- {}", store_name);
        for item_name in item_names {
            match snapshot.item(item_name).and_then(|i| i.last_purchase()) {
                Some(last) => println!("  - {} (last purchased {})", item_name, last),
                None => println!("  - {}", item_name),
            }
        }
    }
}

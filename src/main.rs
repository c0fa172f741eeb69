//! Loads the hub from seed data and prints the board and the communications
//! center as JSON.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde_json::json;

use hover_sales_hub::domain::communication::CommunicationFilter;
use hover_sales_hub::models::config::HubConfig;
use hover_sales_hub::models::seed::HubSeed;
use hover_sales_hub::repository::InMemoryRepository;
use hover_sales_hub::services::communications::load_communications_center;
use hover_sales_hub::services::jobs::load_board;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let hub_config = match settings.try_deserialize::<HubConfig>() {
        Ok(hub_config) => hub_config,
        Err(err) => {
            log::error!("Error loading hub config: {}", err);
            std::process::exit(1);
        }
    };

    let filter = match hub_config.job_filter() {
        Ok(filter) => filter,
        Err(err) => {
            log::error!("Invalid stage filter {:?}: {}", hub_config.stage, err);
            std::process::exit(1);
        }
    };

    let seed = match &hub_config.seed_path {
        Some(path) => {
            log::info!("Loading seed data from {path}");
            HubSeed::load(path)
        }
        None => HubSeed::sample(),
    };

    let repo = match seed.and_then(InMemoryRepository::from_seed) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to load seed data: {err}");
            std::process::exit(1);
        }
    };

    let board = match load_board(&repo, filter) {
        Ok(board) => board,
        Err(err) => {
            log::error!("Failed to load board: {err}");
            std::process::exit(1);
        }
    };

    let center = match load_communications_center(&repo, &CommunicationFilter::new()) {
        Ok(center) => center,
        Err(err) => {
            log::error!("Failed to load communications: {err}");
            std::process::exit(1);
        }
    };

    let output = json!({ "board": board, "communications": center });
    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            log::error!("Failed to render output: {err}");
            std::process::exit(1);
        }
    }
}

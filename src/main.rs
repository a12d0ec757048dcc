use log::error;
use quick_poll::config::Config;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    if let Err(why) = quick_poll::serve(config).await {
        error!("Server error: {:?}", why);
    }
}

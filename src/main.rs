//! IMSIT schedule bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use imsit_bot::{
    BotError,
    config::{Settings, StorageBackend},
    database::{SqliteSessionStore, connection::{DatabaseConfig, create_pool, run_migrations}},
    handlers::handle_message,
    services::ServiceFactory,
    state::{ConversationEngine, MemorySessionStore, RedisSessionStore, SessionStore},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on shutdown
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", imsit_bot::info());

    // Initialize session storage
    let store = create_store(&settings).await?;
    if let Err(e) = store.health_check().await {
        let e = BotError::from(e);
        if !e.is_recoverable() {
            return Err(e.into());
        }
        warn!(error = %e, "Session store health check failed, sessions stay in memory until it recovers");
    }
    info!(backend = store.backend_name(), "Session store ready");

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings)?;
    let engine = Arc::new(ConversationEngine::new(store, services, &settings.cache));

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await?;
    info!(username = ?me.username, "Authorized on account");

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![engine])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("Bot has been shut down.");

    Ok(())
}

/// Open the configured session store
async fn create_store(settings: &Settings) -> imsit_bot::Result<Arc<dyn SessionStore>> {
    let store: Arc<dyn SessionStore> = match settings.storage.backend {
        StorageBackend::Sqlite => {
            info!("Connecting to database...");
            let pool = create_pool(&DatabaseConfig::from(&settings.storage)).await?;

            info!("Running database migrations...");
            run_migrations(&pool).await?;

            Arc::new(SqliteSessionStore::new(pool))
        }
        StorageBackend::Redis => {
            info!("Connecting to Redis...");
            Arc::new(RedisSessionStore::new(settings.redis.clone()).await?)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory session store, sessions will not survive a restart");
            Arc::new(MemorySessionStore::new())
        }
    };

    Ok(store)
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    Update::filter_message().endpoint(handle_messages)
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, engine: Arc<ConversationEngine>) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, engine).await {
        error!(error = %e, severity = %e.severity(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use secrecy::ExposeSecret;
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

/// Handle on the quiz database. Cloning shares the driver's connection pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Opens the pool and pings once so a bad URI fails at startup.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let options = client_options(config).await?;
        let client = Client::with_options(options)?;

        let db = Self {
            inner: client.database(&config.mongo_db_name),
        };
        db.health_check().await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(db)
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(collection_name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.mongo_conn_string.expose_secret()).await?;

    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    Ok(options)
}

use anyhow::{Context, Result, anyhow};

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub upload_dir: String,
    pub public_base_url: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_connections = parse_pool_size(std::env::var("DB_MAX_CONNECTIONS").ok())?;

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        Ok(Self {
            database_url,
            db_max_connections,
            run_migrations,
            port,
            upload_dir,
            public_base_url,
        })
    }
}

fn parse_pool_size(raw: Option<String>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DB_MAX_CONNECTIONS);
    };

    let size = raw
        .parse::<u32>()
        .context("DB_MAX_CONNECTIONS must be a positive integer")?;

    if size == 0 {
        return Err(anyhow!("DB_MAX_CONNECTIONS must be at least 1"));
    }

    Ok(size)
}

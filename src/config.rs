use crate::Result;
use crate::error::Error;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|err| {
            panic!("FATAL - WHILE LOADING Config -cause: {:?}", err);
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Config {
    // -- Webhooks
    pub INIT_WEBHOOK_URL: String,
    pub SUBMIT_WEBHOOK_URL: String,
    pub AREA_WEBHOOK_URL: String,
    pub DATES_WEBHOOK_URL: String,
    // -- Abort timers, seconds
    pub CATALOG_TIMEOUT_SECS: u64,
    pub SUBMIT_TIMEOUT_SECS: u64,
    pub AREA_TIMEOUT_SECS: u64,
    pub DATES_TIMEOUT_SECS: u64,
    // -- Routing
    pub SERVICEABLE_AREA: String,
    pub CATALOG_FALLBACK: bool,
}

impl Config {
    pub fn load_from_env() -> Result<Config> {
        Ok(Config {
            INIT_WEBHOOK_URL: get_env("INIT_WEBHOOK_URL")?,
            SUBMIT_WEBHOOK_URL: get_env("SUBMIT_WEBHOOK_URL")?,
            AREA_WEBHOOK_URL: get_env("AREA_WEBHOOK_URL")?,
            DATES_WEBHOOK_URL: get_env("DATES_WEBHOOK_URL")?,
            CATALOG_TIMEOUT_SECS: get_env_or_parse("CATALOG_TIMEOUT_SECS", 20)?,
            SUBMIT_TIMEOUT_SECS: get_env_or_parse("SUBMIT_TIMEOUT_SECS", 25)?,
            AREA_TIMEOUT_SECS: get_env_or_parse("AREA_TIMEOUT_SECS", 10)?,
            DATES_TIMEOUT_SECS: get_env_or_parse("DATES_TIMEOUT_SECS", 10)?,
            SERVICEABLE_AREA: get_env("SERVICEABLE_AREA").unwrap_or_else(|_| "Area 1".to_string()),
            CATALOG_FALLBACK: get_env_or_parse("CATALOG_FALLBACK", true)?,
        })
    }

    /// Same settings pointed at a single base url, one path per webhook.
    pub fn for_base_url(base: &str) -> Config {
        let base = base.trim_end_matches('/');
        Config {
            INIT_WEBHOOK_URL: format!("{base}/init-form"),
            SUBMIT_WEBHOOK_URL: format!("{base}/submit-project-calendar"),
            AREA_WEBHOOK_URL: format!("{base}/get-area-info"),
            DATES_WEBHOOK_URL: format!("{base}/available-dates"),
            CATALOG_TIMEOUT_SECS: 20,
            SUBMIT_TIMEOUT_SECS: 25,
            AREA_TIMEOUT_SECS: 10,
            DATES_TIMEOUT_SECS: 10,
            SERVICEABLE_AREA: "Area 1".to_string(),
            CATALOG_FALLBACK: true,
        }
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.CATALOG_TIMEOUT_SECS)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.SUBMIT_TIMEOUT_SECS)
    }

    pub fn area_timeout(&self) -> Duration {
        Duration::from_secs(self.AREA_TIMEOUT_SECS)
    }

    pub fn dates_timeout(&self) -> Duration {
        Duration::from_secs(self.DATES_TIMEOUT_SECS)
    }
}

fn get_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigMissingEnv(name))
}

fn get_env_or_parse<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(val) => val.trim().parse::<T>().map_err(|_| Error::ConfigWrongFormat(name)),
        Err(_) => Ok(default),
    }
}

// Configuration definitions, functions and tests
//

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string as de_num;
use std::sync::Arc;

static ENV_PREFIX: &str = "BE";

fn prefixed_env(suffix: &str) -> String {
    format!("{}__{}", ENV_PREFIX, suffix)
}

#[derive(Clone, derived_deref::Deref)]
pub struct Conf {
    #[target]
    pub env_conf: Arc<EnvConf>,
    pub env: Env,
}

impl Conf {
    pub fn new(env: Env, env_conf: EnvConf) -> Self {
        Self {
            env_conf: Arc::new(env_conf),
            env,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvConf {
    #[serde(deserialize_with = "de_num")]
    pub port: u16,
    pub host: String,
    pub db: DbConf,
    pub log: Log,
    pub assets: AssetsConf,
    pub serve: ServeConf,
    pub news: NewsConf,
}

#[derive(Deserialize, Clone, Debug)]
pub enum DbStorageEngine {
    Memory,
    SQLite,
    Sled,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DbConf {
    pub storage_engine: DbStorageEngine,
    pub path: String,
}

impl DbConf {
    pub fn db_instance(&self) -> cozo::DbInstance {
        cozo::DbInstance::new(
            match self.storage_engine {
                DbStorageEngine::Memory => "mem",
                DbStorageEngine::SQLite => "sqlite",
                DbStorageEngine::Sled => "sled",
            },
            &self.path,
            Default::default(),
        )
        .unwrap()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub pretty: bool,
}

/// External image host the upload endpoints forward files to.
#[derive(Deserialize, Debug, Clone)]
pub struct AssetsConf {
    pub base_url: String,
    pub api_key: Secret<String>,
    #[serde(deserialize_with = "de_num")]
    pub timeout_milliseconds: u64,
}

impl AssetsConf {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServeConf {
    pub dir: String,
    pub fallback: Option<String>,
    #[serde(deserialize_with = "de_num")]
    pub lru_size: usize,
}

impl ServeConf {
    pub fn lru_size(&self) -> std::num::NonZeroUsize {
        std::num::NonZeroUsize::new(self.lru_size.max(1)).expect("nonzero after max")
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewsConf {
    #[serde(deserialize_with = "de_num")]
    pub page_size_cap: usize,
}

impl EnvConf {
    pub fn derive(env: Env) -> Self {
        fn join_filename(conf_dir: &std::path::PathBuf, filename: &str) -> String {
            conf_dir
                .join(filename)
                .into_os_string()
                .into_string()
                .unwrap()
        }

        let conf_dir = std::env::var(prefixed_env("CONF_DIR"))
            .map(|v| std::path::PathBuf::from(v))
            .unwrap_or_else(|_| {
                let base_path = std::env::current_dir().unwrap();
                base_path.join("conf")
            });

        let conf_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, "default")).required(true),
            )
            .add_source(
                config::File::with_name(&join_filename(&conf_dir, env.as_ref())).required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build();

        let conf = conf_builder.unwrap();

        match conf.try_deserialize() {
            Ok(conf) => conf,
            Err(e) => {
                dbg!(&e);
                Err(e).expect("correct config")
            }
        }
    }

    pub fn test_default() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".into(),
            db: DbConf {
                storage_engine: DbStorageEngine::Memory,
                path: String::new(),
            },
            log: Log { pretty: false },
            assets: AssetsConf {
                base_url: "http://127.0.0.1:9200".into(),
                api_key: Secret::new("test-key".into()),
                timeout_milliseconds: 2000,
            },
            serve: ServeConf {
                dir: "static".into(),
                fallback: None,
                lru_size: 10,
            },
            news: NewsConf { page_size_cap: 100 },
        }
    }
}

use derive_more::Display;

#[derive(Debug, PartialEq, Display, Clone, Copy)]
pub enum Env {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "prod")]
    Prod,
}

impl Env {
    pub fn derive() -> Self {
        // One variable to rule all
        let glob_env = std::env::var("NEWSDESK_ENV").unwrap_or_else(|_| "local".into());

        // Or set a more specific per executable
        std::env::var(prefixed_env("ENV"))
            .unwrap_or(glob_env)
            .try_into()
            .expect("valid variable")
    }

    pub fn local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" => Ok(Self::Prod),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `prod`.",
                other
            )),
        }
    }
}

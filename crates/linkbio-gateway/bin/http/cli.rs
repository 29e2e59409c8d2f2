use clap::{Parser, ValueEnum};
use sqlx::postgres::PgConnectOptions;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};

pub const BIND_HOST_ENV: &str = "BIND_HOST";
pub const PORT_ENV: &str = "PORT";
pub const STORAGE_BACKEND_ENV: &str = "LINKBIO_STORAGE_BACKEND";
pub const LOG_FORMAT_ENV: &str = "LINKBIO_LOG_FORMAT";
pub const POSTGRES_HOST_ENV: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT_ENV: &str = "POSTGRES_PORT";
pub const POSTGRES_USER_ENV: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD_ENV: &str = "POSTGRES_PASSWORD";
pub const POSTGRES_DB_ENV: &str = "POSTGRES_DB";
pub const POSTGRES_MAX_CONNECTIONS_ENV: &str = "POSTGRES_MAX_CONNECTIONS";

pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_POSTGRES_HOST: &str = "db";
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;
pub const DEFAULT_POSTGRES_USER: &str = "admin";
pub const DEFAULT_POSTGRES_PASSWORD: &str = "secret";
pub const DEFAULT_POSTGRES_DB: &str = "linkbio_go_db";
pub const DEFAULT_POSTGRES_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "postgres")]
    Postgres,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "linkbio-gateway")]
pub struct CLI {
    #[arg(long, env = BIND_HOST_ENV, default_value = DEFAULT_BIND_HOST)]
    pub host: IpAddr,

    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Postgres
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    #[arg(long, env = POSTGRES_HOST_ENV, default_value = DEFAULT_POSTGRES_HOST)]
    pub db_host: String,

    #[arg(long, env = POSTGRES_PORT_ENV, default_value_t = DEFAULT_POSTGRES_PORT)]
    pub db_port: u16,

    #[arg(long, env = POSTGRES_USER_ENV, default_value = DEFAULT_POSTGRES_USER)]
    pub db_user: String,

    #[arg(
        long,
        env = POSTGRES_PASSWORD_ENV,
        default_value = DEFAULT_POSTGRES_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub db_password: String,

    #[arg(long, env = POSTGRES_DB_ENV, default_value = DEFAULT_POSTGRES_DB)]
    pub db_name: String,

    #[arg(
        long,
        env = POSTGRES_MAX_CONNECTIONS_ENV,
        default_value_t = DEFAULT_POSTGRES_MAX_CONNECTIONS
    )]
    pub db_max_connections: u32,
}

impl CLI {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Connection options built from the discrete settings, so the password
    /// needs no URL escaping.
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

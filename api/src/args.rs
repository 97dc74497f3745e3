use clap::Parser;
use ladle_core::domain::common::{AuthConfig, DatabaseConfig, LadleConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "ladle", version, about = "Recipe sharing and meal tracking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Serve over TLS when both the certificate and the key are given.
    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "ladle")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// HS256 secret for access tokens. A random one is generated when empty.
    #[arg(long = "jwt-secret", env = "JWT_SECRET", default_value = "", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(
        long = "access-token-ttl-secs",
        env = "ACCESS_TOKEN_TTL_SECS",
        default_value_t = 86400
    )]
    pub access_token_ttl_secs: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LadleConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                access_token_ttl_secs: args.auth.access_token_ttl_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_overrides() {
        let args = Args::parse_from([
            "ladle",
            "--server-port",
            "8080",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--jwt-secret",
            "s3cret",
        ]);

        assert_eq!(args.server.port, 8080);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );

        let config = LadleConfig::from(args);
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.access_token_ttl_secs, 86400);
    }
}

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// The configuration parameters for the application
///
/// These can either loaded from command-line, or pulled from environment variables.
///
/// Environment variables are preferred.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser)]
pub struct Config {
    /// Hostname of the PostgreSQL server.
    #[clap(long, env)]
    pub db_host: String,

    /// Port of the PostgreSQL server.
    #[clap(long, env)]
    pub db_port: u16,

    /// Name of the database to connect to.
    #[clap(long, env)]
    pub db_name: String,

    #[clap(long, env)]
    pub db_user: String,

    #[clap(long, env)]
    pub db_password: String,

    /// Port the HTTP listener binds to, on all interfaces.
    #[clap(long, env, default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    /// Connect options for the backing PostgreSQL database.
    ///
    /// The database transport is unencrypted; `ssl_mode` is pinned to `Disable`
    /// rather than left to sqlx's `Prefer` default.
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
            .ssl_mode(PgSslMode::Disable)
    }
}

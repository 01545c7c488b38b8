use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub migrations_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("EXPENSE_TRACKER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("EXPENSE_TRACKER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: env::var("EXPENSE_TRACKER_DATABASE_URL")
                .map(|v| parse_database_url(&v))
                .unwrap_or_else(|_| PathBuf::from("data/expenses.db")),
            migrations_path: env::var("EXPENSE_TRACKER_MIGRATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("migrations")),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_database_url(value: &str) -> PathBuf {
    PathBuf::from(
        value
            .strip_prefix("sqlite://")
            .or_else(|| value.strip_prefix("sqlite:"))
            .unwrap_or(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_prefixes_are_stripped() {
        assert_eq!(
            parse_database_url("sqlite://data/x.db"),
            PathBuf::from("data/x.db")
        );
        assert_eq!(parse_database_url("sqlite:x.db"), PathBuf::from("x.db"));
        assert_eq!(
            parse_database_url("/var/lib/expenses.db"),
            PathBuf::from("/var/lib/expenses.db")
        );
    }

    #[test]
    fn test_address() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 9000,
            database_path: PathBuf::from(":memory:"),
            migrations_path: PathBuf::from("migrations"),
        };
        assert_eq!(config.address(), "127.0.0.1:9000");
    }
}

//! User configuration answers collected before provisioning

use std::fmt;

/// Supported Sequelize SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDialect {
    Postgres,
    MySql,
    MariaDb,
    Sqlite,
    Mssql,
}

impl SqlDialect {
    pub fn display_name(&self) -> &'static str {
        match self {
            SqlDialect::Postgres => "PostgreSQL",
            SqlDialect::MySql => "MySQL",
            SqlDialect::MariaDb => "MariaDB",
            SqlDialect::Sqlite => "SQLite",
            SqlDialect::Mssql => "Microsoft SQL Server",
        }
    }

    /// Dialect identifier as Sequelize spells it
    pub fn id(&self) -> &'static str {
        match self {
            SqlDialect::Postgres => "postgres",
            SqlDialect::MySql => "mysql",
            SqlDialect::MariaDb => "mariadb",
            SqlDialect::Sqlite => "sqlite",
            SqlDialect::Mssql => "mssql",
        }
    }

    /// All dialects in prompt order (PostgreSQL first, the default selection)
    pub fn all() -> [SqlDialect; 5] {
        [
            SqlDialect::Postgres,
            SqlDialect::MySql,
            SqlDialect::MariaDb,
            SqlDialect::Sqlite,
            SqlDialect::Mssql,
        ]
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The user's raw integration choices
///
/// Invariant: `dialect` is `Some` if and only if `sequelize` is true. The
/// constructor enforces this; the resolver may replace the whole value when
/// falling back to the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationAnswers {
    pub mongodb: bool,
    pub sequelize: bool,
    pub dialect: Option<SqlDialect>,
}

impl ConfigurationAnswers {
    /// Build an answer set, dropping the dialect when Sequelize is off
    pub fn new(mongodb: bool, sequelize: bool, dialect: Option<SqlDialect>) -> Self {
        Self {
            mongodb,
            sequelize,
            dialect: if sequelize { dialect } else { None },
        }
    }

    /// The one combination the default template fully supports
    pub fn default_supported() -> Self {
        Self {
            mongodb: true,
            sequelize: true,
            dialect: Some(SqlDialect::Postgres),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_dropped_without_sequelize() {
        let answers = ConfigurationAnswers::new(true, false, Some(SqlDialect::Sqlite));
        assert!(answers.dialect.is_none());
    }

    #[test]
    fn test_dialect_kept_with_sequelize() {
        let answers = ConfigurationAnswers::new(false, true, Some(SqlDialect::MySql));
        assert_eq!(answers.dialect, Some(SqlDialect::MySql));
    }

    #[test]
    fn test_default_supported_is_postgres() {
        let answers = ConfigurationAnswers::default_supported();
        assert!(answers.mongodb);
        assert!(answers.sequelize);
        assert_eq!(answers.dialect, Some(SqlDialect::Postgres));
    }
}

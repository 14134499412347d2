//! Answers-to-variant resolution
//!
//! The mapping from integration choices to a template variant is a pure,
//! statically enumerable table. Whether to fall back when a combination is
//! unsupported is a user decision and lives in the prompt layer, not here.

use crate::answers::{ConfigurationAnswers, SqlDialect};
use std::fmt;

/// A named, fetchable snapshot of the starter project
///
/// Each variant corresponds to a branch of the template repository. Only one
/// fully built variant exists today: MongoDB + Sequelize on PostgreSQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    branch: &'static str,
}

impl TemplateVariant {
    /// The default variant (MongoDB + Sequelize/PostgreSQL)
    pub const DEFAULT: TemplateVariant = TemplateVariant { branch: "main" };

    /// Branch of the template repository this variant is fetched from
    pub fn branch(&self) -> &'static str {
        self.branch
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.branch)
    }
}

/// Why an answer combination has no matching variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// Both integrations requested, but with a non-PostgreSQL dialect
    UnsupportedDialect(SqlDialect),
    /// At least one of the two integrations was declined
    MissingIntegration,
}

impl UnsupportedReason {
    /// Warning shown before asking the user to fall back to the default
    pub fn message(&self) -> String {
        match self {
            UnsupportedReason::UnsupportedDialect(dialect) => format!(
                "Sorry, currently modifications are not supported by create-nrtgmp-app. \
                 Only PostgreSQL is supported by the default template ({} is not). \
                 You can change it manually after the project is created.",
                dialect.display_name()
            ),
            UnsupportedReason::MissingIntegration => {
                "Sorry, currently modifications are not supported by create-nrtgmp-app. \
                 The default template includes both MongoDB and Sequelize."
                    .to_string()
            }
        }
    }
}

/// Outcome of resolving an answer set against the variant table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Supported(TemplateVariant),
    Unsupported(UnsupportedReason),
}

/// Map an answer set to a template variant.
///
/// Exactly one combination is supported: both integrations enabled with the
/// PostgreSQL dialect. Every other combination is reported as unsupported
/// with the reason, so the caller can offer the default variant instead.
pub fn resolve(answers: &ConfigurationAnswers) -> Resolution {
    if answers.mongodb && answers.sequelize {
        match answers.dialect {
            Some(SqlDialect::Postgres) => Resolution::Supported(TemplateVariant::DEFAULT),
            Some(other) => Resolution::Unsupported(UnsupportedReason::UnsupportedDialect(other)),
            None => Resolution::Unsupported(UnsupportedReason::MissingIntegration),
        }
    } else {
        Resolution::Unsupported(UnsupportedReason::MissingIntegration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_combination_resolves_unchanged() {
        let answers = ConfigurationAnswers::new(true, true, Some(SqlDialect::Postgres));
        assert_eq!(
            resolve(&answers),
            Resolution::Supported(TemplateVariant::DEFAULT)
        );
    }

    #[test]
    fn test_non_postgres_dialect_unsupported() {
        let answers = ConfigurationAnswers::new(true, true, Some(SqlDialect::MySql));
        assert_eq!(
            resolve(&answers),
            Resolution::Unsupported(UnsupportedReason::UnsupportedDialect(SqlDialect::MySql))
        );
    }

    #[test]
    fn test_missing_mongodb_unsupported() {
        let answers = ConfigurationAnswers::new(false, true, Some(SqlDialect::Sqlite));
        assert_eq!(
            resolve(&answers),
            Resolution::Unsupported(UnsupportedReason::MissingIntegration)
        );
    }

    #[test]
    fn test_missing_sequelize_unsupported() {
        let answers = ConfigurationAnswers::new(true, false, None);
        assert_eq!(
            resolve(&answers),
            Resolution::Unsupported(UnsupportedReason::MissingIntegration)
        );
    }

    #[test]
    fn test_every_non_postgres_dialect_unsupported() {
        for dialect in SqlDialect::all() {
            let answers = ConfigurationAnswers::new(true, true, Some(dialect));
            let expected = if dialect == SqlDialect::Postgres {
                Resolution::Supported(TemplateVariant::DEFAULT)
            } else {
                Resolution::Unsupported(UnsupportedReason::UnsupportedDialect(dialect))
            };
            assert_eq!(resolve(&answers), expected);
        }
    }

    #[test]
    fn test_default_supported_answers_resolve() {
        assert_eq!(
            resolve(&ConfigurationAnswers::default_supported()),
            Resolution::Supported(TemplateVariant::DEFAULT)
        );
    }
}

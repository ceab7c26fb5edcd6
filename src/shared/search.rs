//! Case-insensitive substring search pushed down to Postgres.
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, IntoColumnRef};
use sea_orm::Condition;

/// `%term%` with LIKE wildcards in the term taken literally.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Matches rows where any of `columns` contains `term`, ignoring case.
pub fn ilike_any<I, C>(columns: I, term: &str) -> Condition
where
    I: IntoIterator<Item = C>,
    C: IntoColumnRef,
{
    let pattern = like_pattern(term);
    columns
        .into_iter()
        .fold(Condition::any(), |condition, column| {
            condition.add(Expr::col(column).ilike(pattern.as_str()))
        })
}

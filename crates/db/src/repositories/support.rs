//! Query helpers shared by the repositories: existence checks, counting,
//! LIKE patterns, and the cascading delete.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;

use crate::error::StoreResult;
use crate::DbPool;

/// Rows that depend on a parent and disappear with it.
pub(crate) struct Dependent {
    pub table: &'static str,
    /// Predicate selecting the parent's dependents, parent id bound as `$1`.
    pub owned_by: &'static str,
    /// Predicate selecting rows left dangling once the parent is gone.
    /// May omit `$1` when it checks against the parent table instead.
    pub orphaned: &'static str,
}

impl Dependent {
    /// A dependent whose owning predicate also finds its orphans, as with a
    /// direct foreign key to the parent.
    pub const fn direct(table: &'static str, owned_by: &'static str) -> Self {
        Self {
            table,
            owned_by,
            orphaned: owned_by,
        }
    }
}

/// A deletable entity and everything its delete must take along.
pub(crate) struct CascadeTarget {
    pub entity: &'static str,
    pub table: &'static str,
    pub key: &'static str,
    pub dependents: &'static [Dependent],
}

/// Count rows of `table` matching `predicate`, binding `id` if referenced.
pub(crate) async fn count_matching<'e, E>(
    executor: E,
    table: &str,
    predicate: &str,
    id: DbId,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let query = format!("SELECT COUNT(*) FROM {table} WHERE {predicate}");
    let mut q = sqlx::query_scalar::<_, i64>(&query);
    if predicate.contains("$1") {
        q = q.bind(id);
    }
    q.fetch_one(executor).await
}

/// Count every row of `table`.
pub(crate) async fn count_all(pool: &DbPool, table: &str) -> Result<i64, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
}

/// Whether a row with primary key `id` exists in `table`.
pub(crate) async fn row_exists<'e, E>(executor: E, table: &str, id: DbId) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    Ok(count_matching(executor, table, "id = $1", id).await? > 0)
}

/// Fail with a field-level validation error if a referenced row is missing.
pub(crate) async fn require_reference<'e, E>(
    executor: E,
    table: &str,
    entity: &'static str,
    field: &'static str,
    id: DbId,
) -> StoreResult<()>
where
    E: SqliteExecutor<'e>,
{
    if row_exists(executor, table, id).await? {
        Ok(())
    } else {
        Err(CoreError::validation(field, format!("{entity} {id} does not exist")).into())
    }
}

/// Fail with `NotFound` if the addressed row is missing.
pub(crate) async fn require_found<'e, E>(
    executor: E,
    table: &str,
    entity: &'static str,
    id: DbId,
) -> StoreResult<()>
where
    E: SqliteExecutor<'e>,
{
    if row_exists(executor, table, id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound { entity, id }.into())
    }
}

/// Fail with `UniqueViolation` if another row of `table` already uses `email`.
///
/// `exclude_id` is the row being updated (use `0` on create).
pub(crate) async fn ensure_email_free<'e, E>(
    executor: E,
    table: &str,
    entity: &'static str,
    email: &str,
    exclude_id: DbId,
) -> StoreResult<()>
where
    E: SqliteExecutor<'e>,
{
    let query = format!("SELECT COUNT(*) FROM {table} WHERE email = $1 AND id <> $2");
    let taken: i64 = sqlx::query_scalar(&query)
        .bind(email)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;
    if taken > 0 {
        return Err(CoreError::UniqueViolation {
            entity,
            field: "email",
            message: format!("email '{email}' is already registered to another {entity}"),
        }
        .into());
    }
    Ok(())
}

/// Build a case-insensitive `LIKE` pattern matching `term` anywhere.
///
/// `%`, `_` and `\` in the term are escaped; queries must use `ESCAPE '\'`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Delete one row and everything that cascades from it, atomically.
///
/// Counts dependents first (for the log), deletes the parent, then checks
/// that no dependent survived. Any failure drops the transaction, which
/// rolls the whole delete back.
pub(crate) async fn delete_cascading(
    pool: &DbPool,
    target: &CascadeTarget,
    id: DbId,
) -> StoreResult<()> {
    let mut tx = pool.begin().await?;

    let mut removed = Vec::with_capacity(target.dependents.len());
    for dep in target.dependents {
        let n = count_matching(&mut *tx, dep.table, dep.owned_by, id).await?;
        removed.push((dep.table, n));
    }

    let query = format!("DELETE FROM {} WHERE {} = $1", target.table, target.key);
    let result = sqlx::query(&query).bind(id).execute(&mut *tx).await?;
    if result.rows_affected() == 0 {
        return Err(CoreError::NotFound {
            entity: target.entity,
            id,
        }
        .into());
    }

    for dep in target.dependents {
        let left = count_matching(&mut *tx, dep.table, dep.orphaned, id).await?;
        if left > 0 {
            tracing::error!(
                entity = target.entity,
                id,
                table = dep.table,
                left,
                "Dependent rows survived delete, rolling back"
            );
            return Err(CoreError::CascadeDelete {
                entity: target.entity,
                id,
                message: format!("{left} dependent rows remain in {}", dep.table),
            }
            .into());
        }
    }

    tx.commit().await?;
    tracing::info!(entity = target.entity, id, removed = ?removed, "Deleted with cascade");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("ana"), "%ana%");
        assert_eq!(like_pattern("  ana "), "%ana%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}

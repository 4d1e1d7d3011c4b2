//! Versioned schema scripts under `migrations/`, embedded at build time.
//! Each script runs once, inside a transaction, and is recorded in `_schema_migrations`.

use crate::error::AppError;
use sqlx::SqlitePool;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Ordered by version. New scripts are appended, never edited in place.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_books",
        sql: include_str!("../migrations/0001_create_books.sql"),
    },
    Migration {
        version: 2,
        name: "create_users",
        sql: include_str!("../migrations/0002_create_users.sql"),
    },
];

const TRACKING_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS _schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL
)
"#;

/// Apply every migration not yet recorded. Returns the versions applied by this call.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<Vec<i64>, AppError> {
    sqlx::query(TRACKING_DDL).execute(pool).await?;

    let applied: Vec<(i64,)> = sqlx::query_as("SELECT version FROM _schema_migrations")
        .fetch_all(pool)
        .await?;
    let applied: Vec<i64> = applied.into_iter().map(|(v,)| v).collect();

    let mut newly_applied = Vec::new();
    for m in MIGRATIONS {
        if applied.contains(&m.version) {
            continue;
        }
        let mut tx = pool.begin().await?;
        for stmt in statements(m.sql) {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
        sqlx::query("INSERT INTO _schema_migrations (version, name, applied_at) VALUES (?, ?, ?)")
            .bind(m.version)
            .bind(m.name)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = m.version, name = m.name, "applied migration");
        newly_applied.push(m.version);
    }
    Ok(newly_applied)
}

/// Split a script into statements. Scripts hold plain DDL without `;` inside literals.
fn statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|s| !is_blank(s))
}

fn is_blank(stmt: &str) -> bool {
    stmt.lines()
        .map(str::trim)
        .all(|l| l.is_empty() || l.starts_with("--"))
}

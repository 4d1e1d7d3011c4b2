//! Book persistence: add, edit, delete, list.

use crate::error::AppError;
use crate::model::{Book, BookPatch, BookSummary, Lookup, NewBook};
use crate::service::RequestValidator;
use sqlx::SqlitePool;

pub const DUPLICATE_TITLE: &str = "You are trying to use a title that has already been used";

const BOOK_COLUMNS: &str = "id, title, author, review, genre, price";

pub struct BookService;

impl BookService {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Lookup<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(Lookup::from_option(row))
    }

    /// Exact, case-sensitive title match.
    pub async fn find_by_title(pool: &SqlitePool, title: &str) -> Result<Lookup<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books WHERE title = ?", BOOK_COLUMNS))
            .bind(title)
            .fetch_optional(pool)
            .await?;
        Ok(Lookup::from_option(row))
    }

    /// Insert a book unless its title is taken. Returns the stored row.
    pub async fn add(pool: &SqlitePool, new: NewBook) -> Result<Book, AppError> {
        let title = RequestValidator::require("title", new.title)?;
        let author = RequestValidator::require("author", new.author)?;

        if Self::find_by_title(pool, &title).await?.is_found() {
            tracing::warn!(%title, "duplicate book title rejected");
            return Err(AppError::Conflict(DUPLICATE_TITLE.into()));
        }

        let book = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, author, review, genre, price) VALUES (?, ?, ?, ?, ?) RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(title)
        .bind(author)
        .bind(new.review)
        .bind(new.genre)
        .bind(new.price)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::from_write(e, DUPLICATE_TITLE))?;
        tracing::info!(id = book.id, title = %book.title, "book added");
        Ok(book)
    }

    /// Overwrite only the fields the patch supplies. Returns the updated row.
    pub async fn edit(pool: &SqlitePool, id: i64, patch: BookPatch) -> Result<Book, AppError> {
        let mut book = match Self::find_by_id(pool, id).await? {
            Lookup::Found(book) => book,
            Lookup::NotFound => return Err(not_found(id)),
        };
        patch.apply_to(&mut book);

        Self::write_back(pool, &book).await?;
        tracing::info!(id = book.id, title = %book.title, "book updated");
        Ok(book)
    }

    /// Store every column of `book` over its row. A row that vanished since it was read is a not-found.
    async fn write_back(pool: &SqlitePool, book: &Book) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE books SET title = ?, author = ?, review = ?, genre = ?, price = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.review)
            .bind(&book.genre)
            .bind(book.price)
            .bind(book.id)
            .execute(pool)
            .await
            .map_err(|e| AppError::from_write(e, DUPLICATE_TITLE))?;
        if result.rows_affected() == 0 {
            return Err(not_found(book.id));
        }
        Ok(())
    }

    /// Remove a book. Returns the row as it was before deletion.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Book, AppError> {
        let book = match Self::find_by_id(pool, id).await? {
            Lookup::Found(book) => book,
            Lookup::NotFound => return Err(not_found(id)),
        };
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book.id)
            .execute(pool)
            .await?;
        // Lost a race with another delete.
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        tracing::info!(id = book.id, title = %book.title, "book deleted");
        Ok(book)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<BookSummary>, AppError> {
        let rows = sqlx::query_as::<_, BookSummary>("SELECT id, title, author FROM books ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("no book with id {}", id))
}

//! Book row, request bodies and the listing projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub review: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
}

/// Body of `POST /book/add`. Required fields are optional here so a null or
/// missing value surfaces as a validation error instead of a parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
}

/// Body of `PUT|PATCH /book/edit/:id`. Absent and null fields both mean "keep".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
}

impl BookPatch {
    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if self.review.is_some() {
            book.review = self.review;
        }
        if self.genre.is_some() {
            book.genre = self.genre;
        }
        if self.price.is_some() {
            book.price = self.price;
        }
    }
}

/// Listing projection: `review`, `genre` and `price` are left out on purpose.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
}

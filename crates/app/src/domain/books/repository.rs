//! Books Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction,
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    query, query_as,
};

use crate::domain::books::models::{Book, BookDetails, BookFilter, BookUuid};

const LIST_BOOKS_SQL: &str = include_str!("sql/list_books.sql");
const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const CREATE_BOOK_SQL: &str = include_str!("sql/create_book.sql");
const UPDATE_BOOK_SQL: &str = include_str!("sql/update_book.sql");
const DELETE_BOOK_SQL: &str = include_str!("sql/delete_book.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBooksRepository;

/// Match `search` literally inside an `ILIKE ... ESCAPE '\'` pattern.
fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());

    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}

impl PgBooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_books(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &BookFilter,
    ) -> Result<Vec<Book>, sqlx::Error> {
        query_as::<Postgres, Book>(LIST_BOOKS_SQL)
            .bind(filter.genre.as_deref())
            .bind(filter.search.as_deref().map(escape_like))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<Book, sqlx::Error> {
        query_as::<Postgres, Book>(GET_BOOK_SQL)
            .bind(book.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        details: &BookDetails,
    ) -> Result<Book, sqlx::Error> {
        let query = query_as::<Postgres, Book>(CREATE_BOOK_SQL).bind(book.into_uuid());

        bind_details(query, details)?.fetch_one(&mut **tx).await
    }

    pub(crate) async fn update_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
        details: &BookDetails,
    ) -> Result<Book, sqlx::Error> {
        let query = query_as::<Postgres, Book>(UPDATE_BOOK_SQL).bind(book.into_uuid());

        bind_details(query, details)?.fetch_one(&mut **tx).await
    }

    pub(crate) async fn delete_book(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        book: BookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOK_SQL)
            .bind(book.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Bind `$2..=$11` in the column order shared by the create and update queries.
fn bind_details<'q>(
    query: QueryAs<'q, Postgres, Book, PgArguments>,
    details: &'q BookDetails,
) -> Result<QueryAs<'q, Postgres, Book, PgArguments>, sqlx::Error> {
    let price = i64::try_from(details.price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })?;

    let reviews = i32::try_from(details.reviews).map_err(|e| sqlx::Error::ColumnDecode {
        index: "reviews".to_string(),
        source: Box::new(e),
    })?;

    Ok(query
        .bind(details.title.as_str())
        .bind(details.author.as_str())
        .bind(details.genre.as_str())
        .bind(details.description.as_str())
        .bind(details.isbn.as_deref())
        .bind(price)
        .bind(details.rating)
        .bind(reviews)
        .bind(details.in_stock)
        .bind(details.featured))
}

impl<'r> FromRow<'r, PgRow> for Book {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BookUuid::from_uuid(row.try_get("uuid")?),
            details: BookDetails::from_row(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for BookDetails {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;
        let reviews_i32: i32 = row.try_get("reviews")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let reviews = u32::try_from(reviews_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "reviews".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            genre: row.try_get("genre")?,
            description: row.try_get("description")?,
            isbn: row.try_get("isbn")?,
            price,
            rating: row.try_get("rating")?,
            reviews,
            in_stock: row.try_get("in_stock")?,
            featured: row.try_get("featured")?,
        })
    }
}

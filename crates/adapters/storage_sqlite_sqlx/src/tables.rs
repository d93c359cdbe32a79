//! How each resource's fields land in its `SQLite` table.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

use campus_domain::article::Article;
use campus_domain::help_request::HelpRequest;
use campus_domain::menu_item::DiningCommonsMenuItem;
use campus_domain::menu_item_review::MenuItemReview;
use campus_domain::recommendation_request::RecommendationRequest;
use campus_domain::resource::Resource;

/// A query with positional arguments still to be bound.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Row mapping for a resource stored in its own table.
///
/// Every table has an `INTEGER PRIMARY KEY AUTOINCREMENT` column named `id`;
/// [`COLUMNS`](SqliteResource::COLUMNS) lists the remaining columns in the
/// order [`bind`](SqliteResource::bind) binds them.
pub trait SqliteResource: Resource {
    /// Table name.
    const TABLE: &'static str;

    /// Non-id columns, in bind order.
    const COLUMNS: &'static [&'static str];

    /// Bind every field as a positional argument, in [`COLUMNS`](SqliteResource::COLUMNS) order.
    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_>;

    /// Decode the fields from a row.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] when a column is missing or has the wrong type.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

impl SqliteResource for DiningCommonsMenuItem {
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const COLUMNS: &'static [&'static str] = &["name", "dining_commons_code", "station"];

    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        query
            .bind(self.name)
            .bind(self.dining_commons_code)
            .bind(self.station)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            name: row.try_get("name")?,
            dining_commons_code: row.try_get("dining_commons_code")?,
            station: row.try_get("station")?,
        })
    }
}

impl SqliteResource for HelpRequest {
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];

    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        query
            .bind(self.requester_email)
            .bind(self.team_id)
            .bind(self.table_or_breakout_room)
            .bind(self.request_time)
            .bind(self.explanation)
            .bind(self.solved)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            requester_email: row.try_get("requester_email")?,
            team_id: row.try_get("team_id")?,
            table_or_breakout_room: row.try_get("table_or_breakout_room")?,
            request_time: row.try_get("request_time")?,
            explanation: row.try_get("explanation")?,
            solved: row.try_get("solved")?,
        })
    }
}

impl SqliteResource for MenuItemReview {
    const TABLE: &'static str = "menu_item_reviews";
    const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "reviewer_email",
        "stars",
        "date_reviewed",
        "comments",
    ];

    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        query
            .bind(self.item_id)
            .bind(self.reviewer_email)
            .bind(self.stars)
            .bind(self.date_reviewed)
            .bind(self.comments)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            item_id: row.try_get("item_id")?,
            reviewer_email: row.try_get("reviewer_email")?,
            stars: row.try_get("stars")?,
            date_reviewed: row.try_get("date_reviewed")?,
            comments: row.try_get("comments")?,
        })
    }
}

impl SqliteResource for RecommendationRequest {
    const TABLE: &'static str = "recommendation_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        query
            .bind(self.requester_email)
            .bind(self.professor_email)
            .bind(self.explanation)
            .bind(self.date_requested)
            .bind(self.date_needed)
            .bind(self.done)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            requester_email: row.try_get("requester_email")?,
            professor_email: row.try_get("professor_email")?,
            explanation: row.try_get("explanation")?,
            date_requested: row.try_get("date_requested")?,
            date_needed: row.try_get("date_needed")?,
            done: row.try_get("done")?,
        })
    }
}

impl SqliteResource for Article {
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [&'static str] =
        &["title", "url", "explanation", "email", "date_added"];

    fn bind(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        query
            .bind(self.title)
            .bind(self.url)
            .bind(self.explanation)
            .bind(self.email)
            .bind(self.date_added)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            explanation: row.try_get("explanation")?,
            email: row.try_get("email")?,
            date_added: row.try_get("date_added")?,
        })
    }
}

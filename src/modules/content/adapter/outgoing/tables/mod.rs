//! Binds each content kind to its master and translation tables.

mod education_table;
mod experience_table;
mod hobby_table;
mod project_table;
mod skill_table;

use async_trait::async_trait;
use sea_orm::sea_query::{IntoColumnRef, IntoTableRef, Query, SelectStatement};
use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::modules::content::application::domain::ContentKind;
use crate::shared::i18n::LanguageCode;
use crate::shared::search::ilike_any;

/// A translation row as stored: owner id, raw language code, text.
pub type TranslationRow<T> = (Uuid, String, T);

#[async_trait]
pub trait ContentTable: ContentKind {
    /// Master rows in display order, restricted to those with a translation
    /// containing `search` when given.
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait;

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait;

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<Self::Text>>, DbErr>
    where
        C: ConnectionTrait;

    async fn insert<C>(conn: &C, id: Uuid, data: Self) -> Result<(), DbErr>
    where
        C: ConnectionTrait;

    /// Rows affected.
    async fn update<C>(conn: &C, id: Uuid, data: Self) -> Result<u64, DbErr>
    where
        C: ConnectionTrait;

    /// Rows affected; translation rows cascade.
    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait;

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: Self::Text,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait;

    /// Rows affected.
    async fn delete_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
    ) -> Result<u64, DbErr>
    where
        C: ConnectionTrait;
}

/// `SELECT master_id FROM <table> WHERE <any column> ILIKE '%term%'`.
fn translation_match<T, M, I, C>(table: T, master_id: M, columns: I, term: &str) -> SelectStatement
where
    T: IntoTableRef,
    M: IntoColumnRef,
    I: IntoIterator<Item = C>,
    C: IntoColumnRef,
{
    Query::select()
        .column(master_id)
        .from(table)
        .cond_where(ilike_any(columns, term))
        .to_owned()
}

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::tables::{ContentTable, TranslationRow};
use crate::modules::content::application::domain::ContentRecord;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::shared::i18n::{LanguageCode, Translations};

// ============================================================================
// Repository Implementation
// ============================================================================

/// One repository per content kind; the table binding comes from
/// [`ContentTable`].
pub struct ContentRepositoryPostgres<K> {
    db: Arc<DatabaseConnection>,
    _kind: PhantomData<fn() -> K>,
}

impl<K> ContentRepositoryPostgres<K> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _kind: PhantomData,
        }
    }
}

impl<K> Clone for ContentRepositoryPostgres<K> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<K: ContentTable> ContentRepository<K> for ContentRepositoryPostgres<K> {
    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContentRecord<K>>, ContentRepositoryError> {
        let rows = K::select_all(&*self.db, search.as_deref())
            .await
            .map_err(map_db_err)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids = rows.iter().map(|(id, _)| *id).collect();
        let mut translations = group_translations::<K>(
            K::select_translations(&*self.db, ids)
                .await
                .map_err(map_db_err)?,
        );

        Ok(rows
            .into_iter()
            .map(|(id, data)| ContentRecord {
                id,
                data,
                translations: translations.remove(&id).unwrap_or_default(),
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContentRecord<K>>, ContentRepositoryError> {
        match fetch::<K, _>(&*self.db, id).await {
            Ok(record) => Ok(Some(record)),
            Err(ContentRepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(
        &self,
        data: K,
        translations: Translations<K::Text>,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let id = Uuid::new_v4();
        K::insert(&txn, id, data).await.map_err(map_db_err)?;
        for (language, text) in translations {
            K::upsert_translation(&txn, id, &language, text)
                .await
                .map_err(map_db_err)?;
        }
        let record = fetch::<K, _>(&txn, id).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(record)
    }

    async fn update(&self, id: Uuid, data: K) -> Result<ContentRecord<K>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if K::update(&txn, id, data).await.map_err(map_db_err)? == 0 {
            return Err(ContentRepositoryError::NotFound);
        }
        let record = fetch::<K, _>(&txn, id).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(record)
    }

    async fn upsert_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
        text: K::Text,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        ensure_exists::<K, _>(&txn, id).await?;
        K::upsert_translation(&txn, id, language, text)
            .await
            .map_err(map_db_err)?;
        let record = fetch::<K, _>(&txn, id).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(record)
    }

    async fn remove_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        ensure_exists::<K, _>(&txn, id).await?;
        if K::delete_translation(&txn, id, language)
            .await
            .map_err(map_db_err)?
            == 0
        {
            return Err(ContentRepositoryError::TranslationNotFound);
        }
        let record = fetch::<K, _>(&txn, id).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        if K::delete(&*self.db, id).await.map_err(map_db_err)? == 0 {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn ensure_exists<K, C>(conn: &C, id: Uuid) -> Result<(), ContentRepositoryError>
where
    K: ContentTable,
    C: ConnectionTrait,
{
    match K::select_one(conn, id).await.map_err(map_db_err)? {
        Some(_) => Ok(()),
        None => Err(ContentRepositoryError::NotFound),
    }
}

async fn fetch<K, C>(conn: &C, id: Uuid) -> Result<ContentRecord<K>, ContentRepositoryError>
where
    K: ContentTable,
    C: ConnectionTrait,
{
    let data = K::select_one(conn, id)
        .await
        .map_err(map_db_err)?
        .ok_or(ContentRepositoryError::NotFound)?;
    let rows = K::select_translations(conn, vec![id])
        .await
        .map_err(map_db_err)?;

    Ok(ContentRecord {
        id,
        data,
        translations: group_translations::<K>(rows)
            .remove(&id)
            .unwrap_or_default(),
    })
}

/// Rows with an unparsable language code are skipped.
fn group_translations<K: ContentTable>(
    rows: Vec<TranslationRow<K::Text>>,
) -> HashMap<Uuid, Translations<K::Text>> {
    let mut grouped: HashMap<Uuid, Translations<K::Text>> = HashMap::new();
    for (master_id, code, text) in rows {
        match LanguageCode::parse(&code) {
            Ok(language) => {
                grouped.entry(master_id).or_default().insert(language, text);
            }
            Err(_) => warn!(
                kind = K::KIND,
                master_id = %master_id,
                "Skipping translation with invalid language code {:?}",
                code
            ),
        }
    }
    grouped
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

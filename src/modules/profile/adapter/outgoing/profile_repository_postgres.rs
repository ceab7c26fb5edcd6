use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{profile, profile_translations};
use crate::modules::profile::application::domain::entities::{Profile, ProfileFields, ProfileText};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::i18n::{LanguageCode, Translations};

const SINGLETON_ID: i32 = 1;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn load_or_init(
        &self,
        default_language: &LanguageCode,
        fallback: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        insert_row(&txn, ProfileFields::default())
            .await
            .map_err(map_db_err)?;
        insert_translation_if_missing(&txn, default_language, fallback)
            .await
            .map_err(map_db_err)?;
        let profile = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(profile)
    }

    async fn create(
        &self,
        fields: ProfileFields,
        translations: Translations<ProfileText>,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = insert_row(&txn, fields).await.map_err(map_db_err)?;
        if inserted == 0 {
            return Err(ProfileRepositoryError::AlreadyExists);
        }
        for (language, text) in translations {
            upsert_translation(&txn, &language, text)
                .await
                .map_err(map_db_err)?;
        }
        let profile = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(profile)
    }

    async fn update(&self, fields: ProfileFields) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        profile::Entity::insert(row(fields))
            .on_conflict(
                OnConflict::column(profile::Column::Id)
                    .update_columns([profile::Column::ProfilePicture, profile::Column::Resume])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;
        let profile = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(profile)
    }

    async fn upsert_translation(
        &self,
        language: &LanguageCode,
        text: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        insert_row(&txn, ProfileFields::default())
            .await
            .map_err(map_db_err)?;
        upsert_translation(&txn, language, text)
            .await
            .map_err(map_db_err)?;
        let profile = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(profile)
    }

    async fn remove_translation(
        &self,
        language: &LanguageCode,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = profile_translations::Entity::delete_many()
            .filter(profile_translations::Column::MasterId.eq(SINGLETON_ID))
            .filter(profile_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::TranslationNotFound);
        }
        let profile = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(profile)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn row(fields: ProfileFields) -> profile::ActiveModel {
    profile::ActiveModel {
        id: Set(SINGLETON_ID),
        profile_picture: Set(fields.profile_picture),
        resume: Set(fields.resume),
    }
}

/// `INSERT ... ON CONFLICT DO NOTHING`; returns 0 when the row already existed.
async fn insert_row<C: ConnectionTrait>(conn: &C, fields: ProfileFields) -> Result<u64, DbErr> {
    profile::Entity::insert(row(fields))
        .on_conflict(
            OnConflict::column(profile::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

fn translation_row(language: &LanguageCode, text: ProfileText) -> profile_translations::ActiveModel {
    profile_translations::ActiveModel {
        id: Set(Uuid::new_v4()),
        master_id: Set(SINGLETON_ID),
        language_code: Set(language.to_string()),
        name: Set(text.name),
        bio: Set(text.bio),
    }
}

fn translation_key() -> OnConflict {
    OnConflict::columns([
        profile_translations::Column::MasterId,
        profile_translations::Column::LanguageCode,
    ])
}

async fn upsert_translation<C: ConnectionTrait>(
    conn: &C,
    language: &LanguageCode,
    text: ProfileText,
) -> Result<u64, DbErr> {
    profile_translations::Entity::insert(translation_row(language, text))
        .on_conflict(
            translation_key()
                .update_columns([
                    profile_translations::Column::Name,
                    profile_translations::Column::Bio,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

async fn insert_translation_if_missing<C: ConnectionTrait>(
    conn: &C,
    language: &LanguageCode,
    text: ProfileText,
) -> Result<u64, DbErr> {
    profile_translations::Entity::insert(translation_row(language, text))
        .on_conflict(translation_key().do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
}

async fn fetch<C: ConnectionTrait>(conn: &C) -> Result<Profile, ProfileRepositoryError> {
    let row = profile::Entity::find_by_id(SINGLETON_ID)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| ProfileRepositoryError::DatabaseError("profile row missing".to_string()))?;

    let translations = profile_translations::Entity::find()
        .filter(profile_translations::Column::MasterId.eq(SINGLETON_ID))
        .order_by_asc(profile_translations::Column::LanguageCode)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    Ok(to_domain(row, translations))
}

fn to_domain(row: profile::Model, translations: Vec<profile_translations::Model>) -> Profile {
    Profile {
        profile_picture: row.profile_picture,
        resume: row.resume,
        translations: translations
            .into_iter()
            .filter_map(|t| match LanguageCode::parse(&t.language_code) {
                Ok(code) => Some((
                    code,
                    ProfileText {
                        name: t.name,
                        bio: t.bio,
                    },
                )),
                Err(e) => {
                    warn!("Skipping profile translation {}: {}", t.id, e);
                    None
                }
            })
            .collect(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

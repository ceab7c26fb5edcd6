use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::contact_info::adapter::outgoing::sea_orm_entity::contact_info::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::outgoing::{
    ContactInfoRepository, ContactInfoRepositoryError,
};

const SINGLETON_ID: i32 = 1;

#[derive(Clone)]
pub struct ContactInfoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactInfoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactInfoRepository for ContactInfoRepositoryPostgres {
    async fn load_or_init(
        &self,
        defaults: ContactInfo,
    ) -> Result<ContactInfo, ContactInfoRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let default_email = defaults.email.clone();
        insert_row(&txn, defaults).await.map_err(map_db_err)?;
        Entity::update_many()
            .col_expr(Column::Email, Expr::value(default_email))
            .filter(Column::Id.eq(SINGLETON_ID))
            .filter(Column::Email.eq(""))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        let info = fetch(&txn).await?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(info)
    }

    async fn create(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError> {
        let inserted = insert_row(&*self.db, info.clone())
            .await
            .map_err(map_db_err)?;
        if inserted == 0 {
            return Err(ContactInfoRepositoryError::AlreadyExists);
        }

        Ok(info)
    }

    async fn update(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError> {
        Entity::insert(row(info.clone()))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Email,
                        Column::Phone,
                        Column::GithubUrl,
                        Column::LinkedinUrl,
                        Column::TwitterUrl,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(info)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn row(info: ContactInfo) -> ActiveModel {
    ActiveModel {
        id: Set(SINGLETON_ID),
        email: Set(info.email),
        phone: Set(info.phone),
        github_url: Set(info.github_url),
        linkedin_url: Set(info.linkedin_url),
        twitter_url: Set(info.twitter_url),
    }
}

/// `INSERT ... ON CONFLICT DO NOTHING`; returns 0 when the row already existed.
async fn insert_row<C: ConnectionTrait>(conn: &C, info: ContactInfo) -> Result<u64, DbErr> {
    Entity::insert(row(info))
        .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
}

async fn fetch<C: ConnectionTrait>(conn: &C) -> Result<ContactInfo, ContactInfoRepositoryError> {
    Entity::find_by_id(SINGLETON_ID)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .map(to_domain)
        .ok_or_else(|| {
            ContactInfoRepositoryError::DatabaseError("contact info row missing".to_string())
        })
}

fn to_domain(model: contact_info::Model) -> ContactInfo {
    ContactInfo {
        email: model.email,
        phone: model.phone,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
    }
}

fn map_db_err(e: DbErr) -> ContactInfoRepositoryError {
    ContactInfoRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact_message::adapter::outgoing::sea_orm_entity::contact_messages::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact_message::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact_message::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::shared::search::ilike_any;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }

    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let mut query = Entity::find();

        if let Some(term) = search {
            query = query.filter(ilike_any(
                [Column::Name, Column::Email, Column::Subject, Column::Message],
                &term,
            ));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactMessageRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_domain))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactMessageRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

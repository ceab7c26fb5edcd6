use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::staff_users::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::auth::application::domain::entities::{NewStaffUser, StaffUser};
use crate::modules::auth::application::ports::outgoing::{
    StaffUserRepository, StaffUserRepositoryError,
};

#[derive(Clone)]
pub struct StaffUserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StaffUserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffUserRepository for StaffUserRepositoryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError> {
        let model = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_domain))
    }

    async fn create(&self, user: NewStaffUser) -> Result<StaffUser, StaffUserRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            is_staff: Set(true),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                StaffUserRepositoryError::UserAlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        Ok(to_domain(inserted))
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), StaffUserRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::PasswordHash, Expr::value(password_hash))
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StaffUserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}

fn to_domain(model: staff_users::Model) -> StaffUser {
    StaffUser {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        is_staff: model.is_staff,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> StaffUserRepositoryError {
    StaffUserRepositoryError::DatabaseError(e.to_string())
}

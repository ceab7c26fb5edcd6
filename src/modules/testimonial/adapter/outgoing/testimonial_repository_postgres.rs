use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::testimonial::adapter::outgoing::sea_orm_entity::testimonials::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::testimonial::application::domain::entities::{NewTestimonial, Testimonial};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};
use crate::shared::search::ilike_any;

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn create(&self, data: NewTestimonial) -> Result<Testimonial, TestimonialRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            role_company: Set(data.role_company),
            quote: Set(data.quote),
            is_approved: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }

    async fn list(
        &self,
        approved: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let mut query = Entity::find();

        if let Some(approved) = approved {
            query = query.filter(Column::IsApproved.eq(approved));
        }
        if let Some(term) = search {
            query = query.filter(ilike_any(
                [Column::Name, Column::RoleCompany, Column::Quote],
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

    async fn set_approval(
        &self,
        ids: &[Uuid],
        approved: bool,
    ) -> Result<u64, TestimonialRepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Rows already in the target state are not counted as changed
        let result = Entity::update_many()
            .col_expr(Column::IsApproved, Expr::value(approved))
            .filter(Column::Id.is_in(ids.to_vec()))
            .filter(Column::IsApproved.ne(approved))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn count_pending(&self) -> Result<u64, TestimonialRepositoryError> {
        Entity::find()
            .filter(Column::IsApproved.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TestimonialRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn to_domain(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        name: model.name,
        role_company: model.role_company,
        quote: model.quote,
        is_approved: model.is_approved,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{translation_match, ContentTable, TranslationRow};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{project_translations, projects};
use crate::modules::content::application::domain::{Project, ProjectText};
use crate::shared::i18n::LanguageCode;

fn to_domain(model: projects::Model) -> Project {
    Project {
        image: model.image,
        code_link: model.code_link,
        demo_link: model.demo_link,
        created_date: model.created_date,
    }
}

#[async_trait]
impl ContentTable for Project {
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = projects::Entity::find();
        if let Some(term) = search {
            query = query.filter(projects::Column::Id.in_subquery(translation_match(
                project_translations::Entity,
                project_translations::Column::MasterId,
                [project_translations::Column::Title, project_translations::Column::Description],
                term,
            )));
        }
        let models = query
            .order_by_desc(projects::Column::CreatedDate)
            .order_by_desc(projects::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, to_domain(m))).collect())
    }

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(projects::Entity::find_by_id(id).one(conn).await?.map(to_domain))
    }

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<ProjectText>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = project_translations::Entity::find()
            .filter(project_translations::Column::MasterId.is_in(ids))
            .order_by_asc(project_translations::Column::LanguageCode)
            .all(conn)
            .await?;
        Ok(models
            .into_iter()
            .map(|t| {
                (
                    t.master_id,
                    t.language_code,
                    ProjectText {
                        title: t.title,
                        description: t.description,
                    },
                )
            })
            .collect())
    }

    async fn insert<C>(conn: &C, id: Uuid, data: Self) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        projects::Entity::insert(projects::ActiveModel {
            id: Set(id),
            image: Set(data.image),
            code_link: Set(data.code_link),
            demo_link: Set(data.demo_link),
            created_date: Set(data.created_date),
            created_at: Set(Utc::now().fixed_offset()),
        })
        .exec_without_returning(conn)
        .await?;
        Ok(())
    }

    async fn update<C>(conn: &C, id: Uuid, data: Self) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = projects::Entity::update_many()
            .set(projects::ActiveModel {
                image: Set(data.image),
                code_link: Set(data.code_link),
                demo_link: Set(data.demo_link),
                created_date: Set(data.created_date),
                ..Default::default()
            })
            .filter(projects::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(projects::Entity::delete_by_id(id).exec(conn).await?.rows_affected)
    }

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: ProjectText,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        project_translations::Entity::insert(project_translations::ActiveModel {
            id: Set(Uuid::new_v4()),
            master_id: Set(id),
            language_code: Set(language.to_string()),
            title: Set(text.title),
            description: Set(text.description),
        })
        .on_conflict(
            OnConflict::columns([
                project_translations::Column::MasterId,
                project_translations::Column::LanguageCode,
            ])
            .update_columns([
                project_translations::Column::Title,
                project_translations::Column::Description,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
        Ok(())
    }

    async fn delete_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
    ) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = project_translations::Entity::delete_many()
            .filter(project_translations::Column::MasterId.eq(id))
            .filter(project_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

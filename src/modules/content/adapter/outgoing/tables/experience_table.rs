use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{translation_match, ContentTable, TranslationRow};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    experience_translations, experiences,
};
use crate::modules::content::application::domain::{Experience, ExperienceText};
use crate::shared::i18n::LanguageCode;

fn to_domain(model: experiences::Model) -> Experience {
    Experience {
        start_date: model.start_date,
        end_date: model.end_date,
        icon: model.icon,
    }
}

#[async_trait]
impl ContentTable for Experience {
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = experiences::Entity::find();
        if let Some(term) = search {
            query = query.filter(experiences::Column::Id.in_subquery(translation_match(
                experience_translations::Entity,
                experience_translations::Column::MasterId,
                [
                    experience_translations::Column::JobTitle,
                    experience_translations::Column::Company,
                    experience_translations::Column::Description,
                ],
                term,
            )));
        }
        let models = query
            .order_by_desc(experiences::Column::StartDate)
            .order_by_desc(experiences::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, to_domain(m))).collect())
    }

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(experiences::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(to_domain))
    }

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<ExperienceText>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = experience_translations::Entity::find()
            .filter(experience_translations::Column::MasterId.is_in(ids))
            .order_by_asc(experience_translations::Column::LanguageCode)
            .all(conn)
            .await?;
        Ok(models
            .into_iter()
            .map(|t| {
                (
                    t.master_id,
                    t.language_code,
                    ExperienceText {
                        job_title: t.job_title,
                        company: t.company,
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
        experiences::Entity::insert(experiences::ActiveModel {
            id: Set(id),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            icon: Set(data.icon),
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
        let result = experiences::Entity::update_many()
            .set(experiences::ActiveModel {
                start_date: Set(data.start_date),
                end_date: Set(data.end_date),
                icon: Set(data.icon),
                ..Default::default()
            })
            .filter(experiences::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(experiences::Entity::delete_by_id(id)
            .exec(conn)
            .await?
            .rows_affected)
    }

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: ExperienceText,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        experience_translations::Entity::insert(experience_translations::ActiveModel {
            id: Set(Uuid::new_v4()),
            master_id: Set(id),
            language_code: Set(language.to_string()),
            job_title: Set(text.job_title),
            company: Set(text.company),
            description: Set(text.description),
        })
        .on_conflict(
            OnConflict::columns([
                experience_translations::Column::MasterId,
                experience_translations::Column::LanguageCode,
            ])
            .update_columns([
                experience_translations::Column::JobTitle,
                experience_translations::Column::Company,
                experience_translations::Column::Description,
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
        let result = experience_translations::Entity::delete_many()
            .filter(experience_translations::Column::MasterId.eq(id))
            .filter(experience_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

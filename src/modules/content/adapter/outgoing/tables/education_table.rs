use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{translation_match, ContentTable, TranslationRow};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{
    education_translations, educations,
};
use crate::modules::content::application::domain::{Education, EducationText};
use crate::shared::i18n::LanguageCode;

fn to_domain(model: educations::Model) -> Education {
    Education {
        start_date: model.start_date,
        end_date: model.end_date,
    }
}

#[async_trait]
impl ContentTable for Education {
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = educations::Entity::find();
        if let Some(term) = search {
            query = query.filter(educations::Column::Id.in_subquery(translation_match(
                education_translations::Entity,
                education_translations::Column::MasterId,
                [
                    education_translations::Column::Degree,
                    education_translations::Column::Institution,
                ],
                term,
            )));
        }
        let models = query
            .order_by_desc(educations::Column::StartDate)
            .order_by_desc(educations::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, to_domain(m))).collect())
    }

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(educations::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(to_domain))
    }

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<EducationText>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = education_translations::Entity::find()
            .filter(education_translations::Column::MasterId.is_in(ids))
            .order_by_asc(education_translations::Column::LanguageCode)
            .all(conn)
            .await?;
        Ok(models
            .into_iter()
            .map(|t| {
                (
                    t.master_id,
                    t.language_code,
                    EducationText {
                        degree: t.degree,
                        institution: t.institution,
                    },
                )
            })
            .collect())
    }

    async fn insert<C>(conn: &C, id: Uuid, data: Self) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        educations::Entity::insert(educations::ActiveModel {
            id: Set(id),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
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
        let result = educations::Entity::update_many()
            .set(educations::ActiveModel {
                start_date: Set(data.start_date),
                end_date: Set(data.end_date),
                ..Default::default()
            })
            .filter(educations::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(educations::Entity::delete_by_id(id)
            .exec(conn)
            .await?
            .rows_affected)
    }

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: EducationText,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        education_translations::Entity::insert(education_translations::ActiveModel {
            id: Set(Uuid::new_v4()),
            master_id: Set(id),
            language_code: Set(language.to_string()),
            degree: Set(text.degree),
            institution: Set(text.institution),
        })
        .on_conflict(
            OnConflict::columns([
                education_translations::Column::MasterId,
                education_translations::Column::LanguageCode,
            ])
            .update_columns([
                education_translations::Column::Degree,
                education_translations::Column::Institution,
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
        let result = education_translations::Entity::delete_many()
            .filter(education_translations::Column::MasterId.eq(id))
            .filter(education_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

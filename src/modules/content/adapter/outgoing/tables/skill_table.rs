use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{translation_match, ContentTable, TranslationRow};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{skill_translations, skills};
use crate::modules::content::application::domain::{Skill, SkillText};
use crate::shared::i18n::LanguageCode;

fn to_domain(model: skills::Model) -> Skill {
    Skill {
        proficiency: model.proficiency,
    }
}

#[async_trait]
impl ContentTable for Skill {
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = skills::Entity::find();
        if let Some(term) = search {
            query = query.filter(skills::Column::Id.in_subquery(translation_match(
                skill_translations::Entity,
                skill_translations::Column::MasterId,
                [skill_translations::Column::Name],
                term,
            )));
        }
        let models = query
            .order_by_asc(skills::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, to_domain(m))).collect())
    }

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(skills::Entity::find_by_id(id).one(conn).await?.map(to_domain))
    }

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<SkillText>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = skill_translations::Entity::find()
            .filter(skill_translations::Column::MasterId.is_in(ids))
            .order_by_asc(skill_translations::Column::LanguageCode)
            .all(conn)
            .await?;
        Ok(models
            .into_iter()
            .map(|t| (t.master_id, t.language_code, SkillText { name: t.name }))
            .collect())
    }

    async fn insert<C>(conn: &C, id: Uuid, data: Self) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        skills::Entity::insert(skills::ActiveModel {
            id: Set(id),
            proficiency: Set(data.proficiency),
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
        let result = skills::Entity::update_many()
            .set(skills::ActiveModel {
                proficiency: Set(data.proficiency),
                ..Default::default()
            })
            .filter(skills::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(skills::Entity::delete_by_id(id).exec(conn).await?.rows_affected)
    }

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: SkillText,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        skill_translations::Entity::insert(skill_translations::ActiveModel {
            id: Set(Uuid::new_v4()),
            master_id: Set(id),
            language_code: Set(language.to_string()),
            name: Set(text.name),
        })
        .on_conflict(
            OnConflict::columns([
                skill_translations::Column::MasterId,
                skill_translations::Column::LanguageCode,
            ])
            .update_column(skill_translations::Column::Name)
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
        let result = skill_translations::Entity::delete_many()
            .filter(skill_translations::Column::MasterId.eq(id))
            .filter(skill_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

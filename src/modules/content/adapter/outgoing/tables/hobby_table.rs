use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{translation_match, ContentTable, TranslationRow};
use crate::modules::content::adapter::outgoing::sea_orm_entity::{hobbies, hobby_translations};
use crate::modules::content::application::domain::{Hobby, HobbyText};
use crate::shared::i18n::LanguageCode;

fn to_domain(model: hobbies::Model) -> Hobby {
    Hobby {
        icon: model.icon,
        font_awesome_icon: model.font_awesome_icon,
    }
}

#[async_trait]
impl ContentTable for Hobby {
    async fn select_all<C>(conn: &C, search: Option<&str>) -> Result<Vec<(Uuid, Self)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = hobbies::Entity::find();
        if let Some(term) = search {
            query = query.filter(hobbies::Column::Id.in_subquery(translation_match(
                hobby_translations::Entity,
                hobby_translations::Column::MasterId,
                [hobby_translations::Column::Name, hobby_translations::Column::Description],
                term,
            )));
        }
        let models = query
            .order_by_asc(hobbies::Column::CreatedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, to_domain(m))).collect())
    }

    async fn select_one<C>(conn: &C, id: Uuid) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(hobbies::Entity::find_by_id(id).one(conn).await?.map(to_domain))
    }

    async fn select_translations<C>(
        conn: &C,
        ids: Vec<Uuid>,
    ) -> Result<Vec<TranslationRow<HobbyText>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = hobby_translations::Entity::find()
            .filter(hobby_translations::Column::MasterId.is_in(ids))
            .order_by_asc(hobby_translations::Column::LanguageCode)
            .all(conn)
            .await?;
        Ok(models
            .into_iter()
            .map(|t| {
                (
                    t.master_id,
                    t.language_code,
                    HobbyText {
                        name: t.name,
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
        hobbies::Entity::insert(hobbies::ActiveModel {
            id: Set(id),
            icon: Set(data.icon),
            font_awesome_icon: Set(data.font_awesome_icon),
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
        let result = hobbies::Entity::update_many()
            .set(hobbies::ActiveModel {
                icon: Set(data.icon),
                font_awesome_icon: Set(data.font_awesome_icon),
                ..Default::default()
            })
            .filter(hobbies::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete<C>(conn: &C, id: Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(hobbies::Entity::delete_by_id(id).exec(conn).await?.rows_affected)
    }

    async fn upsert_translation<C>(
        conn: &C,
        id: Uuid,
        language: &LanguageCode,
        text: HobbyText,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        hobby_translations::Entity::insert(hobby_translations::ActiveModel {
            id: Set(Uuid::new_v4()),
            master_id: Set(id),
            language_code: Set(language.to_string()),
            name: Set(text.name),
            description: Set(text.description),
        })
        .on_conflict(
            OnConflict::columns([
                hobby_translations::Column::MasterId,
                hobby_translations::Column::LanguageCode,
            ])
            .update_columns([
                hobby_translations::Column::Name,
                hobby_translations::Column::Description,
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
        let result = hobby_translations::Entity::delete_many()
            .filter(hobby_translations::Column::MasterId.eq(id))
            .filter(hobby_translations::Column::LanguageCode.eq(language.as_str()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

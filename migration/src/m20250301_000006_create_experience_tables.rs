use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::Icon)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperienceTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ExperienceTranslations::MasterId).uuid().not_null())
                    .col(
                        ColumnDef::new(ExperienceTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTranslations::JobTitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTranslations::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTranslations::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_translations_master_id")
                            .from(ExperienceTranslations::Table, ExperienceTranslations::MasterId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One translation per (row, language)
        manager
            .create_index(
                Index::create()
                    .name("idx_experience_translations_master_language")
                    .table(ExperienceTranslations::Table)
                    .col(ExperienceTranslations::MasterId)
                    .col(ExperienceTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    StartDate,
    EndDate,
    Icon,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExperienceTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    JobTitle,
    Company,
    Description,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date())
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
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
                    .table(EducationTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EducationTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(EducationTranslations::MasterId).uuid().not_null())
                    .col(
                        ColumnDef::new(EducationTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationTranslations::Degree)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EducationTranslations::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_education_translations_master_id")
                            .from(EducationTranslations::Table, EducationTranslations::MasterId)
                            .to(Educations::Table, Educations::Id)
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
                    .name("idx_education_translations_master_language")
                    .table(EducationTranslations::Table)
                    .col(EducationTranslations::MasterId)
                    .col(EducationTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EducationTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EducationTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    Degree,
    Institution,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .integer()
                            .not_null()
                            .check(Expr::col(Skills::Proficiency).between(1, 100)),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
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
                    .table(SkillTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SkillTranslations::MasterId).uuid().not_null())
                    .col(
                        ColumnDef::new(SkillTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillTranslations::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_translations_master_id")
                            .from(SkillTranslations::Table, SkillTranslations::MasterId)
                            .to(Skills::Table, Skills::Id)
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
                    .name("idx_skill_translations_master_language")
                    .table(SkillTranslations::Table)
                    .col(SkillTranslations::MasterId)
                    .col(SkillTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Proficiency,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SkillTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    Name,
}

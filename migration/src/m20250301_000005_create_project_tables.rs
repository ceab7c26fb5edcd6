use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Image).string_len(255))
                    .col(ColumnDef::new(Projects::CodeLink).text())
                    .col(ColumnDef::new(Projects::DemoLink).text())
                    .col(ColumnDef::new(Projects::CreatedDate).date().not_null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
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
                    .table(ProjectTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProjectTranslations::MasterId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProjectTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_translations_master_id")
                            .from(ProjectTranslations::Table, ProjectTranslations::MasterId)
                            .to(Projects::Table, Projects::Id)
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
                    .name("idx_project_translations_master_language")
                    .table(ProjectTranslations::Table)
                    .col(ProjectTranslations::MasterId)
                    .col(ProjectTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Image,
    CodeLink,
    DemoLink,
    CreatedDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    Title,
    Description,
}

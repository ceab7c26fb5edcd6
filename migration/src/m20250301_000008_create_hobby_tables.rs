use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hobbies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hobbies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hobbies::Icon).string_len(255))
                    .col(
                        ColumnDef::new(Hobbies::FontAwesomeIcon)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Hobbies::CreatedAt)
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
                    .table(HobbyTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HobbyTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(HobbyTranslations::MasterId).uuid().not_null())
                    .col(
                        ColumnDef::new(HobbyTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HobbyTranslations::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HobbyTranslations::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hobby_translations_master_id")
                            .from(HobbyTranslations::Table, HobbyTranslations::MasterId)
                            .to(Hobbies::Table, Hobbies::Id)
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
                    .name("idx_hobby_translations_master_language")
                    .table(HobbyTranslations::Table)
                    .col(HobbyTranslations::MasterId)
                    .col(HobbyTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HobbyTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hobbies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hobbies {
    Table,
    Id,
    Icon,
    FontAwesomeIcon,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HobbyTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    Name,
    Description,
}

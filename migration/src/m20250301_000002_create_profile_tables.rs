use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Singleton row: the primary key may only ever be 1
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(Profile::Id).eq(1)),
                    )
                    .col(ColumnDef::new(Profile::ProfilePicture).string_len(255))
                    .col(ColumnDef::new(Profile::Resume).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileTranslations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProfileTranslations::MasterId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfileTranslations::LanguageCode)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfileTranslations::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProfileTranslations::Bio).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_translations_master_id")
                            .from(ProfileTranslations::Table, ProfileTranslations::MasterId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profile_translations_master_language")
                    .table(ProfileTranslations::Table)
                    .col(ProfileTranslations::MasterId)
                    .col(ProfileTranslations::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    ProfilePicture,
    Resume,
}

#[derive(DeriveIden)]
enum ProfileTranslations {
    Table,
    Id,
    MasterId,
    LanguageCode,
    Name,
    Bio,
}

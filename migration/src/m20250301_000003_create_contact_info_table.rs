use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactInfo::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(ContactInfo::Id).eq(1)),
                    )
                    .col(ColumnDef::new(ContactInfo::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(ContactInfo::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ContactInfo::GithubUrl).text().not_null().default(""))
                    .col(ColumnDef::new(ContactInfo::LinkedinUrl).text().not_null().default(""))
                    .col(ColumnDef::new(ContactInfo::TwitterUrl).text().not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactInfo {
    Table,
    Id,
    Email,
    Phone,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .col(
                        ColumnDef::new(Account::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Account::Email)
                            .string()
                            .not_null()
                            .unique_key()
                    )
                    .col(
                        ColumnDef::new(Account::Password)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::Verified)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(
                        ColumnDef::new(Account::VerificationCode)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Account::VerificationCodeIssuedAt)
                            .timestamp_with_time_zone()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Account::ForgotPasswordCode)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Account::ForgotPasswordCodeIssuedAt)
                            .timestamp_with_time_zone()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Account::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Account::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Account::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Email,
    Password,
    Verified,
    VerificationCode,
    VerificationCodeIssuedAt,
    ForgotPasswordCode,
    ForgotPasswordCodeIssuedAt,
    CreatedAt,
    UpdatedAt,
}

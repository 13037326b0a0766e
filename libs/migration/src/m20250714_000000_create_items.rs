use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table. The schema is intentionally flat: every column
        // except the key is nullable, and `type` is an unconstrained string
        // used as a partition bucket.
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(Items::Type))
                    .col(string_null(Items::Name))
                    .col(string_null(Items::Artist))
                    .col(integer_null(Items::Year))
                    .col(string_null(Items::Category))
                    .col(integer_null(Items::Quantity))
                    .col(string_null(Items::Location))
                    .col(text_null(Items::Notes))
                    .to_owned(),
            )
            .await?;

        // Listing and search are always scoped to a type bucket
        manager
            .create_index(
                Index::create()
                    .name("idx_items_type")
                    .table(Items::Table)
                    .col(Items::Type)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Type,
    Name,
    Artist,
    Year,
    Category,
    Quantity,
    Location,
    Notes,
}

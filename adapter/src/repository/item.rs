use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ItemId,
    item::{
        event::{CreateItem, DeleteItem, ItemListOptions, UpdateItem},
        Item,
    },
    list::PaginatedList,
};
use kernel::repository::item::ItemRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::item::{ItemRow, PaginatedItemRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ItemRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create(&self, event: CreateItem) -> AppResult<ItemId> {
        let item_id = ItemId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO items
                (item_id, item_name, category, size, price_per_day, description, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item_id)
        .bind(&event.item_name)
        .bind(event.category.as_ref())
        .bind(&event.size)
        .bind(event.price_per_day)
        .bind(&event.description)
        .bind(&event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No item record has been created".into(),
            ));
        }

        Ok(item_id)
    }

    async fn find_all(&self, options: ItemListOptions) -> AppResult<PaginatedList<Item>> {
        let ItemListOptions {
            limit,
            offset,
            category,
            min_price,
            max_price,
            search,
        } = options;

        let rows: Vec<PaginatedItemRow> = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*) OVER () AS total,
                    item_id,
                    item_name,
                    category,
                    size,
                    price_per_day,
                    description,
                    image_url
                FROM items
                WHERE ($1::TEXT IS NULL OR category = $1)
                  AND ($2::BIGINT IS NULL OR price_per_day >= $2)
                  AND ($3::BIGINT IS NULL OR price_per_day <= $3)
                  AND ($4::TEXT IS NULL
                       OR item_name ILIKE '%' || $4 || '%'
                       OR description ILIKE '%' || $4 || '%')
                ORDER BY created_at DESC
                LIMIT $5 OFFSET $6
            "#,
        )
        .bind(category.map(|c| c.as_ref().to_owned()))
        .bind(min_price)
        .bind(max_price)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let total = rows.first().map(|r| r.total).unwrap_or_default();
        let items = rows
            .into_iter()
            .map(|r| Item::try_from(r.item))
            .collect::<AppResult<Vec<Item>>>()?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }

    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
                SELECT
                    item_id,
                    item_name,
                    category,
                    size,
                    price_per_day,
                    description,
                    image_url
                FROM items
                WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Item::try_from).transpose()
    }

    async fn update(&self, event: UpdateItem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE items
                SET
                    item_name = COALESCE($2, item_name),
                    category = COALESCE($3, category),
                    size = COALESCE($4, size),
                    price_per_day = COALESCE($5, price_per_day),
                    description = COALESCE($6, description),
                    image_url = COALESCE($7, image_url)
                WHERE item_id = $1
            "#,
        )
        .bind(event.item_id)
        .bind(event.item_name)
        .bind(event.category.map(|c| c.as_ref().to_owned()))
        .bind(event.size)
        .bind(event.price_per_day)
        .bind(event.description)
        .bind(event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified item not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteItem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM items WHERE item_id = $1
            "#,
        )
        .bind(event.item_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified item not found".into()));
        }

        Ok(())
    }
}

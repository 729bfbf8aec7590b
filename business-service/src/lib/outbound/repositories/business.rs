use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::postgres::PgRow;
use sqlx::query::Query;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Row;
use sqlx::Transaction;
use uuid::Uuid;

use crate::business::errors::BusinessError;
use crate::domain::business::models::Business;
use crate::domain::business::models::BusinessId;
use crate::domain::business::models::BusinessName;
use crate::domain::business::models::Location;
use crate::domain::business::ports::BusinessRepository;
use crate::domain::user::models::UserId;

const BUSINESS_COLUMNS: &str = "id, name, latitude, longitude, owner_id, email, phone_number, \
     display_picture, created_at, updated_at";

pub struct PostgresBusinessRepository {
    pool: PgPool,
}

impl PostgresBusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_business(row: &PgRow, members: Vec<UserId>) -> Result<Business, BusinessError> {
        let owner_id: Option<Uuid> = row.try_get("owner_id").map_err(database_error)?;

        Ok(Business {
            id: BusinessId(row.try_get("id").map_err(database_error)?),
            name: BusinessName::new(row.try_get("name").map_err(database_error)?)?,
            location: Location::new(
                row.try_get("latitude").map_err(database_error)?,
                row.try_get("longitude").map_err(database_error)?,
            )?,
            owner_id: owner_id.map(UserId),
            members,
            email: row.try_get("email").map_err(database_error)?,
            phone_number: row.try_get("phone_number").map_err(database_error)?,
            display_picture: row.try_get("display_picture").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }

    /// Load rosters for a set of businesses in one round trip.
    async fn load_members(
        &self,
        business_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<UserId>>, BusinessError> {
        let rows = sqlx::query(
            r#"
            SELECT business_id, user_id
            FROM user_business_association
            WHERE business_id = ANY($1)
            "#,
        )
        .bind(business_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut rosters: HashMap<Uuid, Vec<UserId>> = HashMap::new();
        for row in rows {
            let business_id: Uuid = row.try_get("business_id").map_err(database_error)?;
            let user_id: Uuid = row.try_get("user_id").map_err(database_error)?;
            rosters.entry(business_id).or_default().push(UserId(user_id));
        }

        Ok(rosters)
    }

    async fn hydrate(&self, rows: Vec<PgRow>) -> Result<Vec<Business>, BusinessError> {
        let ids = rows
            .iter()
            .map(|row| row.try_get::<Uuid, _>("id"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(database_error)?;
        let mut rosters = self.load_members(&ids).await?;

        rows.iter()
            .zip(ids)
            .map(|(row, id)| {
                let members = rosters.remove(&id).unwrap_or_default();
                Self::row_to_business(row, members)
            })
            .collect()
    }

    async fn fetch(
        &self,
        query: Query<'_, Postgres, PgArguments>,
    ) -> Result<Vec<Business>, BusinessError> {
        let rows = query.fetch_all(&self.pool).await.map_err(database_error)?;
        self.hydrate(rows).await
    }

    async fn replace_members(
        tx: &mut Transaction<'_, Postgres>,
        business: &Business,
    ) -> Result<(), BusinessError> {
        sqlx::query("DELETE FROM user_business_association WHERE business_id = $1")
            .bind(business.id.0)
            .execute(&mut **tx)
            .await
            .map_err(database_error)?;

        let members: Vec<Uuid> = business.members.iter().map(|id| id.0).collect();
        if members.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO user_business_association (user_id, business_id)
            SELECT member, $2 FROM UNNEST($1::uuid[]) AS member
            "#,
        )
        .bind(&members)
        .bind(business.id.0)
        .execute(&mut **tx)
        .await
        .map_err(|e| write_error(e, business))?;

        Ok(())
    }
}

fn select(filter: &str) -> String {
    format!(
        "SELECT {} FROM businesses WHERE {} ORDER BY created_at",
        BUSINESS_COLUMNS, filter
    )
}

fn database_error(e: sqlx::Error) -> BusinessError {
    BusinessError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, business: &Business) -> BusinessError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("businesses_name_key") {
            return BusinessError::NameAlreadyExists(business.name.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return BusinessError::UnknownMember(db_err.message().to_string());
        }
    }
    database_error(e)
}

#[async_trait]
impl BusinessRepository for PostgresBusinessRepository {
    async fn create(&self, business: Business) -> Result<Business, BusinessError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO businesses
                (id, name, latitude, longitude, owner_id, email, phone_number,
                 display_picture, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(business.id.0)
        .bind(business.name.as_str())
        .bind(business.location.latitude())
        .bind(business.location.longitude())
        .bind(business.owner_id.map(|id| id.0))
        .bind(&business.email)
        .bind(&business.phone_number)
        .bind(&business.display_picture)
        .bind(business.created_at)
        .bind(business.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, &business))?;

        Self::replace_members(&mut tx, &business).await?;
        tx.commit().await.map_err(database_error)?;

        Ok(business)
    }

    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, BusinessError> {
        let sql = select("id = $1");
        Ok(self.fetch(sqlx::query(&sql).bind(id.0)).await?.pop())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Business>, BusinessError> {
        let sql = select("name = $1");
        Ok(self.fetch(sqlx::query(&sql).bind(name)).await?.pop())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Business>, BusinessError> {
        let sql = select("owner_id = $1");
        self.fetch(sqlx::query(&sql).bind(owner_id.0)).await
    }

    async fn update(&self, business: Business) -> Result<Business, BusinessError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let result = sqlx::query(
            r#"
            UPDATE businesses
            SET name = $2, latitude = $3, longitude = $4, email = $5, phone_number = $6,
                display_picture = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(business.id.0)
        .bind(business.name.as_str())
        .bind(business.location.latitude())
        .bind(business.location.longitude())
        .bind(&business.email)
        .bind(&business.phone_number)
        .bind(&business.display_picture)
        .bind(business.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, &business))?;

        if result.rows_affected() == 0 {
            return Err(BusinessError::NotFound(business.id.to_string()));
        }

        Self::replace_members(&mut tx, &business).await?;
        tx.commit().await.map_err(database_error)?;

        Ok(business)
    }

    async fn delete(&self, id: &BusinessId) -> Result<(), BusinessError> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BusinessError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRole;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USER_COLUMNS: &str =
    "id, full_name, email, role, password_hash, is_active, created_at, updated_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, UserError> {
        let role: String = row.try_get("role").map_err(database_error)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            full_name: FullName::new(row.try_get("full_name").map_err(database_error)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(database_error)?)?,
            role: role.parse::<UserRole>()?,
            password_hash: row.try_get("password_hash").map_err(database_error)?,
            is_active: row.try_get("is_active").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
            updated_at: row.try_get("updated_at").map_err(database_error)?,
        })
    }

    async fn find_one(&self, filter: &str, email: &str) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE {}", USER_COLUMNS, filter);

        sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Self::row_to_user)
            .transpose()
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, full_name, email, role, password_hash, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.full_name.as_str())
        .bind(user.email.as_str())
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(user.email.to_string());
                }
            }
            database_error(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Self::row_to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.find_one("email = $1", email).await
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.find_one("email = $1 AND is_active", email).await
    }

    async fn set_active(&self, id: &UserId, active: bool) -> Result<User, UserError> {
        let query = format!(
            "UPDATE users SET is_active = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(id.0)
            .bind(active)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Self::row_to_user)
            .transpose()?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

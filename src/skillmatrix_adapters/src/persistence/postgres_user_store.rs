use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

use skillmatrix_core::{
    Email, PasswordHash, PersonName, User, UserStore, UserStoreError,
};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (full_name, email_address, password_hash, is_active)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.full_name().as_ref())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret())
        .bind(user.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_user(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT full_name, email_address, password_hash, is_active
                FROM users
                WHERE email_address = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(parse_user).transpose()
    }

    #[tracing::instrument(name = "Activating user in PostgreSQL", skip_all)]
    async fn activate_user(&self, email: &Email) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET is_active = TRUE
                WHERE email_address = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Setting new password hash in PostgreSQL", skip_all)]
    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $1
                WHERE email_address = $2
            "#,
        )
        .bind(password_hash.as_ref().expose_secret())
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

fn parse_user(row: PgRow) -> Result<User, UserStoreError> {
    let full_name: String = row
        .try_get("full_name")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let email_address: String = row
        .try_get("email_address")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    let full_name = PersonName::try_from(full_name)
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let email = Email::try_from(Secret::from(email_address))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    Ok(User::from_storage(
        full_name,
        email,
        PasswordHash::from(password_hash),
        is_active,
    ))
}

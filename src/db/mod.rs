use sea_orm::{ entity::prelude::*, DatabaseConnection, Set };
use uuid::Uuid;

use crate::error::{ AppError, Result };

pub mod entity;
pub use entity::*;

mod upload_repository;
pub use upload_repository::UploadRepository;

mod earning_repository;
pub use earning_repository::EarningRepository;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: String
    ) -> Result<entity::user::Model> {
        let user = entity::user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            role: Set(role),
            created_at: Set(chrono::Utc::now()),
        };

        let user = user.insert(&self.db).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>> {
        let user = entity::user::Entity
            ::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db).await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<entity::user::Model> {
        let uuid = Uuid::parse_str(id).map_err(|_| AppError::Unauthorized)?;

        entity::user::Entity
            ::find_by_id(uuid)
            .one(&self.db).await?
            .ok_or(AppError::Unauthorized)
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{User, UserProfile};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::user_profiles::ActiveModel as ProfileActiveModel;
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            password_hash: model.password_hash,
            is_active: model.is_active,
            security_stamp: model.security_stamp,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }

    fn map_db_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> Result<User, UserRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let active_user = UserActiveModel {
            id: Set(user.id),
            email: Set(user.email.to_lowercase()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            password_hash: Set(user.password_hash),
            is_active: Set(false),
            security_stamp: Set(user.security_stamp),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        };

        let inserted = active_user.insert(&txn).await.map_err(Self::map_db_error)?;

        let active_profile = ProfileActiveModel {
            user_id: Set(inserted.id),
            mobile: Set(profile.mobile),
            email_confirmed: Set(false),
            address: Set(profile.address),
        };

        active_profile
            .insert(&txn)
            .await
            .map_err(Self::map_db_error)?;

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_user(inserted))
    }

    async fn activate_user(
        &self,
        user_id: Uuid,
        new_stamp: String,
    ) -> Result<(), UserRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let user = UserEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_active = Set(true);
        active_user.security_stamp = Set(new_stamp);
        active_user
            .update(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        use super::sea_orm_entity::user_profiles::Entity as ProfileEntity;
        let profile = ProfileEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_profile: ProfileActiveModel = profile.into();
        active_profile.email_confirmed = Set(true);
        active_profile
            .update(&txn)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
        new_stamp: String,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(new_password_hash);
        active_user.security_stamp = Set(new_stamp);
        active_user.updated_at = Set(chrono::Utc::now().into());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{User, UserProfile};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::user_profiles::{
    Column as ProfileColumn, Entity as ProfileEntity, Model as ProfileModel,
};
use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
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

    fn map_to_profile(model: ProfileModel) -> UserProfile {
        UserProfile {
            user_id: model.user_id,
            mobile: model.mobile,
            email_confirmed: model.email_confirmed,
            address: model.address,
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        // Emails are stored lowercased at insert time.
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_user))
    }

    async fn find_profile_by_mobile(
        &self,
        mobile: &str,
    ) -> Result<Option<UserProfile>, UserQueryError> {
        let profile = ProfileEntity::find()
            .filter(ProfileColumn::Mobile.eq(mobile))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(profile.map(Self::map_to_profile))
    }
}

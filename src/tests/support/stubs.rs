//! Default stub use cases for route tests. Every stub fails with a marker
//! error so a test that forgets to install its own mock fails loudly instead
//! of silently passing against a default.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::activate_account::{
    ActivateAccountError, ActivateAccountOutput, IActivateAccountUseCase,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUseCase, LoginError, LoginInput, LoginOutput,
};
use crate::modules::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::modules::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenOutput,
};
use crate::modules::auth::application::use_cases::request_password_reset::{
    IRequestPasswordResetUseCase, RequestPasswordResetError, RequestPasswordResetInput,
};
use crate::modules::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordInput,
};
use crate::modules::auth::application::use_cases::sign_up::{
    ISignUpUseCase, SignUpError, SignUpInput, SignUpOutput,
};
use crate::modules::catalog::application::domain::entities::{
    CarBrand, CarListing, CarModel, FuelType, TransmissionType,
};
use crate::modules::catalog::application::use_cases::create_listing::{
    CreateListingError, CreateListingInput, ICreateListingUseCase,
};
use crate::modules::catalog::application::use_cases::get_listing::{
    GetListingError, IGetListingUseCase,
};
use crate::modules::catalog::application::use_cases::manage_reference_data::{
    ICatalogReferenceUseCase, ReferenceDataError,
};
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::complete_order::{
    CompleteOrderError, ICompleteOrderUseCase,
};
use crate::modules::orders::application::use_cases::place_order::{
    IPlaceOrderUseCase, PlaceOrderError, PlaceOrderInput,
};
use crate::modules::preferences::application::domain::entities::Preference;
use crate::modules::preferences::application::use_cases::get_preference::{
    GetPreferenceError, IGetPreferenceUseCase,
};
use crate::modules::preferences::application::use_cases::save_preference::{
    ISavePreferenceUseCase, SavePreferenceError, SavePreferenceInput,
};
use crate::modules::preferences::application::use_cases::wishlist::{
    IWishlistUseCase, WishlistError,
};
use crate::modules::reputation::application::domain::entities::{Rating, RatingRole};
use crate::modules::reputation::application::use_cases::average_rating::{
    AverageRatingError, IAverageRatingUseCase,
};
use crate::modules::reputation::application::use_cases::rate_user::{
    IRateUserUseCase, RateUserError, RateUserInput,
};

const NOT_UNDER_TEST: &str = "not used in this test";

pub struct StubSignUpUseCase;

#[async_trait]
impl ISignUpUseCase for StubSignUpUseCase {
    async fn execute(&self, _: SignUpInput) -> Result<SignUpOutput, SignUpError> {
        Err(SignUpError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubActivateAccountUseCase;

#[async_trait]
impl IActivateAccountUseCase for StubActivateAccountUseCase {
    async fn execute(
        &self,
        _: &str,
        _: &str,
    ) -> Result<ActivateAccountOutput, ActivateAccountError> {
        Err(ActivateAccountError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUseCase for StubLoginUseCase {
    async fn execute(&self, _: LoginInput) -> Result<LoginOutput, LoginError> {
        Err(LoginError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _: &str) -> Result<(), LogoutError> {
        Err(LogoutError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _: &str) -> Result<RefreshTokenOutput, RefreshTokenError> {
        Err(RefreshTokenError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _: RequestPasswordResetInput,
    ) -> Result<(), RequestPasswordResetError> {
        Err(RequestPasswordResetError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        Err(ResetPasswordError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubCatalogReferenceUseCase;

#[async_trait]
impl ICatalogReferenceUseCase for StubCatalogReferenceUseCase {
    async fn add_brand(&self, _: &str) -> Result<CarBrand, ReferenceDataError> {
        Err(ReferenceDataError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }

    async fn add_model(&self, _: i32, _: &str) -> Result<CarModel, ReferenceDataError> {
        Err(ReferenceDataError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }

    async fn add_fuel_type(&self, _: &str) -> Result<FuelType, ReferenceDataError> {
        Err(ReferenceDataError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }

    async fn add_transmission_type(&self, _: &str) -> Result<TransmissionType, ReferenceDataError> {
        Err(ReferenceDataError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubCreateListingUseCase;

#[async_trait]
impl ICreateListingUseCase for StubCreateListingUseCase {
    async fn execute(&self, _: CreateListingInput) -> Result<CarListing, CreateListingError> {
        Err(CreateListingError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubGetListingUseCase;

#[async_trait]
impl IGetListingUseCase for StubGetListingUseCase {
    async fn execute(&self, _: Uuid) -> Result<CarListing, GetListingError> {
        Err(GetListingError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubPlaceOrderUseCase;

#[async_trait]
impl IPlaceOrderUseCase for StubPlaceOrderUseCase {
    async fn execute(&self, _: PlaceOrderInput) -> Result<Order, PlaceOrderError> {
        Err(PlaceOrderError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubCompleteOrderUseCase;

#[async_trait]
impl ICompleteOrderUseCase for StubCompleteOrderUseCase {
    async fn execute(&self, _: Uuid) -> Result<Order, CompleteOrderError> {
        Err(CompleteOrderError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubRateUserUseCase;

#[async_trait]
impl IRateUserUseCase for StubRateUserUseCase {
    async fn execute(&self, _: RateUserInput) -> Result<Rating, RateUserError> {
        Err(RateUserError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

pub struct StubAverageRatingUseCase;

#[async_trait]
impl IAverageRatingUseCase for StubAverageRatingUseCase {
    async fn execute(&self, _: Uuid, _: RatingRole) -> Result<Option<f64>, AverageRatingError> {
        Err(AverageRatingError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubSavePreferenceUseCase;

#[async_trait]
impl ISavePreferenceUseCase for StubSavePreferenceUseCase {
    async fn execute(
        &self,
        _: Uuid,
        _: SavePreferenceInput,
    ) -> Result<Preference, SavePreferenceError> {
        Err(SavePreferenceError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubGetPreferenceUseCase;

#[async_trait]
impl IGetPreferenceUseCase for StubGetPreferenceUseCase {
    async fn execute(&self, _: Uuid) -> Result<Option<Preference>, GetPreferenceError> {
        Err(GetPreferenceError::RepositoryError(
            NOT_UNDER_TEST.to_string(),
        ))
    }
}

pub struct StubWishlistUseCase;

#[async_trait]
impl IWishlistUseCase for StubWishlistUseCase {
    async fn add(&self, _: Uuid, _: Uuid) -> Result<(), WishlistError> {
        Err(WishlistError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }

    async fn remove(&self, _: Uuid, _: Uuid) -> Result<(), WishlistError> {
        Err(WishlistError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }

    async fn list(&self, _: Uuid) -> Result<Vec<Uuid>, WishlistError> {
        Err(WishlistError::RepositoryError(NOT_UNDER_TEST.to_string()))
    }
}

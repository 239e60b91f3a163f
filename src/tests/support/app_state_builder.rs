use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::activate_account::IActivateAccountUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUseCase;
use crate::modules::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::modules::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::modules::auth::application::use_cases::request_password_reset::IRequestPasswordResetUseCase;
use crate::modules::auth::application::use_cases::reset_password::IResetPasswordUseCase;
use crate::modules::auth::application::use_cases::sign_up::ISignUpUseCase;
use crate::modules::catalog::application::use_cases::create_listing::ICreateListingUseCase;
use crate::modules::catalog::application::use_cases::get_listing::IGetListingUseCase;
use crate::modules::catalog::application::use_cases::manage_reference_data::ICatalogReferenceUseCase;
use crate::modules::orders::application::use_cases::complete_order::ICompleteOrderUseCase;
use crate::modules::orders::application::use_cases::place_order::IPlaceOrderUseCase;
use crate::modules::preferences::application::use_cases::get_preference::IGetPreferenceUseCase;
use crate::modules::preferences::application::use_cases::save_preference::ISavePreferenceUseCase;
use crate::modules::preferences::application::use_cases::wishlist::IWishlistUseCase;
use crate::modules::reputation::application::use_cases::average_rating::IAverageRatingUseCase;
use crate::modules::reputation::application::use_cases::rate_user::IRateUserUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case defaults to a failing stub;
/// tests install a mock only for the handler under test.
pub struct TestAppStateBuilder {
    sign_up: Arc<dyn ISignUpUseCase + Send + Sync>,
    activate_account: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    login: Arc<dyn ILoginUseCase + Send + Sync>,
    logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    catalog_reference: Arc<dyn ICatalogReferenceUseCase + Send + Sync>,
    create_listing: Arc<dyn ICreateListingUseCase + Send + Sync>,
    get_listing: Arc<dyn IGetListingUseCase + Send + Sync>,
    place_order: Arc<dyn IPlaceOrderUseCase + Send + Sync>,
    complete_order: Arc<dyn ICompleteOrderUseCase + Send + Sync>,
    rate_user: Arc<dyn IRateUserUseCase + Send + Sync>,
    average_rating: Arc<dyn IAverageRatingUseCase + Send + Sync>,
    save_preference: Arc<dyn ISavePreferenceUseCase + Send + Sync>,
    get_preference: Arc<dyn IGetPreferenceUseCase + Send + Sync>,
    wishlist: Arc<dyn IWishlistUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            sign_up: Arc::new(StubSignUpUseCase),
            activate_account: Arc::new(StubActivateAccountUseCase),
            login: Arc::new(StubLoginUseCase),
            logout: Arc::new(StubLogoutUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
            reset_password: Arc::new(StubResetPasswordUseCase),
            catalog_reference: Arc::new(StubCatalogReferenceUseCase),
            create_listing: Arc::new(StubCreateListingUseCase),
            get_listing: Arc::new(StubGetListingUseCase),
            place_order: Arc::new(StubPlaceOrderUseCase),
            complete_order: Arc::new(StubCompleteOrderUseCase),
            rate_user: Arc::new(StubRateUserUseCase),
            average_rating: Arc::new(StubAverageRatingUseCase),
            save_preference: Arc::new(StubSavePreferenceUseCase),
            get_preference: Arc::new(StubGetPreferenceUseCase),
            wishlist: Arc::new(StubWishlistUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_sign_up(mut self, uc: impl ISignUpUseCase + 'static) -> Self {
        self.sign_up = Arc::new(uc);
        self
    }

    pub fn with_activate_account(mut self, uc: impl IActivateAccountUseCase + 'static) -> Self {
        self.activate_account = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl IRefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + 'static,
    ) -> Self {
        self.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_reset_password(mut self, uc: impl IResetPasswordUseCase + 'static) -> Self {
        self.reset_password = Arc::new(uc);
        self
    }

    pub fn with_catalog_reference(mut self, uc: impl ICatalogReferenceUseCase + 'static) -> Self {
        self.catalog_reference = Arc::new(uc);
        self
    }

    pub fn with_create_listing(mut self, uc: impl ICreateListingUseCase + 'static) -> Self {
        self.create_listing = Arc::new(uc);
        self
    }

    pub fn with_get_listing(mut self, uc: impl IGetListingUseCase + 'static) -> Self {
        self.get_listing = Arc::new(uc);
        self
    }

    pub fn with_place_order(mut self, uc: impl IPlaceOrderUseCase + 'static) -> Self {
        self.place_order = Arc::new(uc);
        self
    }

    pub fn with_complete_order(mut self, uc: impl ICompleteOrderUseCase + 'static) -> Self {
        self.complete_order = Arc::new(uc);
        self
    }

    pub fn with_rate_user(mut self, uc: impl IRateUserUseCase + 'static) -> Self {
        self.rate_user = Arc::new(uc);
        self
    }

    pub fn with_average_rating(mut self, uc: impl IAverageRatingUseCase + 'static) -> Self {
        self.average_rating = Arc::new(uc);
        self
    }

    pub fn with_save_preference(mut self, uc: impl ISavePreferenceUseCase + 'static) -> Self {
        self.save_preference = Arc::new(uc);
        self
    }

    pub fn with_get_preference(mut self, uc: impl IGetPreferenceUseCase + 'static) -> Self {
        self.get_preference = Arc::new(uc);
        self
    }

    pub fn with_wishlist(mut self, uc: impl IWishlistUseCase + 'static) -> Self {
        self.wishlist = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            sign_up_use_case: self.sign_up,
            activate_account_use_case: self.activate_account,
            login_use_case: self.login,
            logout_use_case: self.logout,
            refresh_token_use_case: self.refresh_token,
            request_password_reset_use_case: self.request_password_reset,
            reset_password_use_case: self.reset_password,
            catalog_reference_use_case: self.catalog_reference,
            create_listing_use_case: self.create_listing,
            get_listing_use_case: self.get_listing,
            place_order_use_case: self.place_order,
            complete_order_use_case: self.complete_order,
            rate_user_use_case: self.rate_user,
            average_rating_use_case: self.average_rating,
            save_preference_use_case: self.save_preference,
            get_preference_use_case: self.get_preference,
            wishlist_use_case: self.wishlist,
        })
    }
}

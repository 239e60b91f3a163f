pub mod modules;
pub use modules::auth;
pub use modules::catalog;
pub use modules::email;
pub use modules::orders;
pub use modules::preferences;
pub use modules::reputation;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::use_cases::{
    activate_account::{ActivateAccountUseCase, IActivateAccountUseCase},
    login_user::{ILoginUseCase, LoginUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    sign_up::{ISignUpUseCase, SignUpUseCase},
};

use crate::catalog::adapter::outgoing::catalog_query_postgres::CatalogQueryPostgres;
use crate::catalog::adapter::outgoing::catalog_repository_postgres::CatalogRepositoryPostgres;
use crate::catalog::application::use_cases::create_listing::{
    CreateListingUseCase, ICreateListingUseCase,
};
use crate::catalog::application::use_cases::get_listing::{GetListingUseCase, IGetListingUseCase};
use crate::catalog::application::use_cases::manage_reference_data::{
    CatalogReferenceUseCase, ICatalogReferenceUseCase,
};

use crate::orders::adapter::outgoing::order_repository_postgres::OrderRepositoryPostgres;
use crate::orders::application::use_cases::complete_order::{
    CompleteOrderUseCase, ICompleteOrderUseCase,
};
use crate::orders::application::use_cases::place_order::{IPlaceOrderUseCase, PlaceOrderUseCase};

use crate::preferences::adapter::outgoing::preference_repository_postgres::PreferenceRepositoryPostgres;
use crate::preferences::adapter::outgoing::wishlist_repository_postgres::WishlistRepositoryPostgres;
use crate::preferences::application::use_cases::get_preference::{
    GetPreferenceUseCase, IGetPreferenceUseCase,
};
use crate::preferences::application::use_cases::save_preference::{
    ISavePreferenceUseCase, SavePreferenceUseCase,
};
use crate::preferences::application::use_cases::wishlist::{IWishlistUseCase, WishlistUseCase};

use crate::reputation::adapter::outgoing::rating_repository_postgres::RatingRepositoryPostgres;
use crate::reputation::application::use_cases::average_rating::{
    AverageRatingUseCase, IAverageRatingUseCase,
};
use crate::reputation::application::use_cases::rate_user::{IRateUserUseCase, RateUserUseCase};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::AccountMailer;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub sign_up_use_case: Arc<dyn ISignUpUseCase + Send + Sync>,
    pub activate_account_use_case: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    pub login_use_case: Arc<dyn ILoginUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub request_password_reset_use_case: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub catalog_reference_use_case: Arc<dyn ICatalogReferenceUseCase + Send + Sync>,
    pub create_listing_use_case: Arc<dyn ICreateListingUseCase + Send + Sync>,
    pub get_listing_use_case: Arc<dyn IGetListingUseCase + Send + Sync>,
    pub place_order_use_case: Arc<dyn IPlaceOrderUseCase + Send + Sync>,
    pub complete_order_use_case: Arc<dyn ICompleteOrderUseCase + Send + Sync>,
    pub rate_user_use_case: Arc<dyn IRateUserUseCase + Send + Sync>,
    pub average_rating_use_case: Arc<dyn IAverageRatingUseCase + Send + Sync>,
    pub save_preference_use_case: Arc<dyn ISavePreferenceUseCase + Send + Sync>,
    pub get_preference_use_case: Arc<dyn IGetPreferenceUseCase + Send + Sync>,
    pub wishlist_use_case: Arc<dyn IWishlistUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::{
        AccountTokenService, PasswordHasher, TokenProvider, UserQuery,
    };
    use crate::catalog::application::ports::outgoing::CatalogQuery;
    use crate::email::application::ports::outgoing::AccountNotifier;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    // Activation and reset links point at this domain, not the bind address.
    let app_domain = env::var("APP_DOMAIN").unwrap_or_else(|_| format!("http://{}", server_url));

    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared services
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let account_tokens: Arc<dyn AccountTokenService + Send + Sync> =
        Arc::new(jwt_service.clone());
    let session_tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service.clone());

    let mailer = AccountMailer::new(Arc::new(smtp_sender), app_domain);
    let notifier: Arc<dyn AccountNotifier + Send + Sync> = Arc::new(mailer);

    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(Argon2Hasher::from_env());

    // Auth
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let sign_up_use_case = SignUpUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&hasher),
        Arc::clone(&account_tokens),
        Arc::clone(&notifier),
    );
    let activate_account_use_case = ActivateAccountUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&account_tokens),
        Arc::clone(&session_tokens),
    );
    let login_use_case = LoginUseCase::new(
        user_query.clone(),
        Arc::clone(&hasher),
        Arc::clone(&session_tokens),
    );
    let logout_use_case =
        LogoutUseCase::new(redis_token_repo.clone(), Arc::clone(&session_tokens));
    let refresh_token_use_case =
        RefreshTokenUseCase::new(redis_token_repo, Arc::clone(&session_tokens));
    let request_password_reset_use_case = RequestPasswordResetUseCase::new(
        user_query.clone(),
        Arc::clone(&account_tokens),
        Arc::clone(&notifier),
    );
    let reset_password_use_case = ResetPasswordUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&account_tokens),
        Arc::clone(&hasher),
    );

    // Catalog
    let catalog_repo = CatalogRepositoryPostgres::new(Arc::clone(&db_arc));
    let catalog_query = CatalogQueryPostgres::new(Arc::clone(&db_arc));
    let catalog_query_arc: Arc<dyn CatalogQuery + Send + Sync> = Arc::new(catalog_query.clone());

    let catalog_reference_use_case =
        CatalogReferenceUseCase::new(catalog_query.clone(), catalog_repo.clone());
    let create_listing_use_case = CreateListingUseCase::new(catalog_query.clone(), catalog_repo);
    let get_listing_use_case = GetListingUseCase::new(catalog_query);

    // Orders
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let place_order_use_case =
        PlaceOrderUseCase::new(order_repo.clone(), Arc::clone(&catalog_query_arc));
    let complete_order_use_case = CompleteOrderUseCase::new(order_repo);

    // Reputation
    let rating_repo = RatingRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query);
    let rate_user_use_case = RateUserUseCase::new(rating_repo.clone(), user_query_arc);
    let average_rating_use_case = AverageRatingUseCase::new(rating_repo);

    // Preferences and wishlist
    let preference_repo = PreferenceRepositoryPostgres::new(Arc::clone(&db_arc));
    let save_preference_use_case = SavePreferenceUseCase::new(preference_repo.clone());
    let get_preference_use_case = GetPreferenceUseCase::new(preference_repo);

    let wishlist_repo = WishlistRepositoryPostgres::new(Arc::clone(&db_arc));
    let wishlist_use_case = WishlistUseCase::new(wishlist_repo, Arc::clone(&catalog_query_arc));

    let state = AppState {
        sign_up_use_case: Arc::new(sign_up_use_case),
        activate_account_use_case: Arc::new(activate_account_use_case),
        login_use_case: Arc::new(login_use_case),
        logout_use_case: Arc::new(logout_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        request_password_reset_use_case: Arc::new(request_password_reset_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        catalog_reference_use_case: Arc::new(catalog_reference_use_case),
        create_listing_use_case: Arc::new(create_listing_use_case),
        get_listing_use_case: Arc::new(get_listing_use_case),
        place_order_use_case: Arc::new(place_order_use_case),
        complete_order_use_case: Arc::new(complete_order_use_case),
        rate_user_use_case: Arc::new(rate_user_use_case),
        average_rating_use_case: Arc::new(average_rating_use_case),
        save_preference_use_case: Arc::new(save_preference_use_case),
        get_preference_use_case: Arc::new(get_preference_use_case),
        wishlist_use_case: Arc::new(wishlist_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    // Bearer-guarded handlers pull the token verifier straight from app data.
    let session_tokens_for_server = Arc::clone(&session_tokens);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_tokens_for_server)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_up_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::activate_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::add_brand_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::add_model_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::add_fuel_type_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::add_transmission_type_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::create_car_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_car_handler);
    // Orders
    cfg.service(crate::orders::adapter::incoming::web::routes::place_order_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::complete_order_handler);
    // Reputation
    cfg.service(crate::reputation::adapter::incoming::web::routes::rate_seller_handler);
    cfg.service(crate::reputation::adapter::incoming::web::routes::rate_buyer_handler);
    cfg.service(crate::reputation::adapter::incoming::web::routes::get_rating_handler);
    // Preferences and wishlist
    cfg.service(crate::preferences::adapter::incoming::web::routes::save_preference_handler);
    cfg.service(crate::preferences::adapter::incoming::web::routes::get_preference_handler);
    cfg.service(crate::preferences::adapter::incoming::web::routes::add_wishlist_car_handler);
    cfg.service(crate::preferences::adapter::incoming::web::routes::remove_wishlist_car_handler);
    cfg.service(crate::preferences::adapter::incoming::web::routes::list_wishlist_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

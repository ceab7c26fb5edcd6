pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::StaffUserRepositoryPostgres;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::{
    ensure_admin::{EnsureAdminUseCase, IEnsureAdminUseCase},
    login_staff::LoginStaffUseCase,
    refresh_token::RefreshTokenUseCase,
    AuthUseCases,
};
use crate::modules::contact_info::adapter::outgoing::ContactInfoRepositoryPostgres;
use crate::modules::contact_info::application::contact_info_use_cases::ContactInfoUseCases;
use crate::modules::contact_message::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::modules::contact_message::application::contact_message_use_cases::ContactMessageUseCases;
use crate::modules::content::adapter::outgoing::ContentRepositoryPostgres;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::domain::{
    Education, Experience, Hobby, Project, Skill,
};
use crate::modules::email::adapter::outgoing::{LogSubmissionNotifier, SmtpEmailSender};
use crate::modules::email::application::ports::outgoing::SubmissionNotifier;
use crate::modules::email::application::services::EmailSubmissionNotifier;
use crate::modules::media::adapter::outgoing::LocalMediaStorage;
use crate::modules::media::application::domain::entities::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::page::application::page_use_cases::PageUseCases;
use crate::modules::page::application::services::PageSources;
use crate::modules::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::testimonial::adapter::outgoing::TestimonialRepositoryPostgres;
use crate::modules::testimonial::application::testimonial_use_cases::TestimonialUseCases;
use crate::shared::api::{custom_form_config, custom_json_config};
use crate::shared::config::{load_dotenv, rust_env, AppConfig, NotificationSettings};
use crate::shared::i18n::LanguageSettings;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub page: PageUseCases,
    pub languages: LanguageSettings,
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub contact_info: ContactInfoUseCases,
    pub skills: ContentUseCases<Skill>,
    pub projects: ContentUseCases<Project>,
    pub experiences: ContentUseCases<Experience>,
    pub educations: ContentUseCases<Education>,
    pub hobbies: ContentUseCases<Hobby>,
    pub contact_messages: ContactMessageUseCases,
    pub testimonials: TestimonialUseCases,
    pub media: MediaUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();
    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env().context("invalid JWT config")?);
    let password_hasher = Arc::new(Argon2Hasher::from_env().context("invalid Argon2 config")?);
    let staff_repo = StaffUserRepositoryPostgres::new(Arc::clone(&db_arc));

    if let Some(admin) = &config.admin {
        let outcome = EnsureAdminUseCase::new(staff_repo.clone(), password_hasher.clone())
            .execute(admin)
            .await
            .context("failed to bootstrap administrator")?;
        info!(username = %admin.username, ?outcome, "Administrator checked");
    }

    let notifier = submission_notifier(config.notifications.as_ref())?;
    let languages = config.languages.clone();

    let auth = AuthUseCases {
        login: Arc::new(LoginStaffUseCase::new(
            staff_repo.clone(),
            password_hasher,
            Arc::new(jwt_service.clone()),
        )),
        refresh_token: Arc::new(RefreshTokenUseCase::new(
            staff_repo,
            Arc::new(jwt_service.clone()),
        )),
    };
    let profile = ProfileUseCases::new(
        ProfileRepositoryPostgres::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let contact_info =
        ContactInfoUseCases::new(ContactInfoRepositoryPostgres::new(Arc::clone(&db_arc)));
    let skills = ContentUseCases::new(
        ContentRepositoryPostgres::<Skill>::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let projects = ContentUseCases::new(
        ContentRepositoryPostgres::<Project>::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let experiences = ContentUseCases::new(
        ContentRepositoryPostgres::<Experience>::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let educations = ContentUseCases::new(
        ContentRepositoryPostgres::<Education>::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let hobbies = ContentUseCases::new(
        ContentRepositoryPostgres::<Hobby>::new(Arc::clone(&db_arc)),
        languages.clone(),
    );
    let contact_messages = ContactMessageUseCases::new(
        ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc)),
        notifier.clone(),
        config.limits,
    );
    let testimonials = TestimonialUseCases::new(
        TestimonialRepositoryPostgres::new(Arc::clone(&db_arc)),
        notifier,
        config.limits,
    );
    let media = MediaUseCases::new(
        LocalMediaStorage::new(config.media.root.clone()),
        UploadPolicy {
            max_upload_bytes: config.media.max_upload_bytes,
        },
    );

    let page = PageUseCases::new(
        PageSources {
            profile: profile.load.clone(),
            contact_info: contact_info.load.clone(),
            skills: skills.list.clone(),
            projects: projects.list.clone(),
            experiences: experiences.list.clone(),
            educations: educations.list.clone(),
            hobbies: hobbies.list.clone(),
            testimonials: testimonials.list_approved.clone(),
        },
        contact_messages.submit.clone(),
        testimonials.submit.clone(),
        languages.clone(),
    );

    let state = AppState {
        page,
        languages,
        auth,
        profile,
        contact_info,
        skills,
        projects,
        experiences,
        educations,
        hobbies,
        contact_messages,
        testimonials,
        media,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let max_upload_bytes = config.media.max_upload_bytes;
    let limits = config.limits;

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_form_config(&limits))
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server error")
}

/// Falls back to logging submissions when no notification address is set.
#[cfg(not(tarpaulin_include))]
fn submission_notifier(
    settings: Option<&NotificationSettings>,
) -> anyhow::Result<Arc<dyn SubmissionNotifier + Send + Sync>> {
    let Some(settings) = settings else {
        warn!(env = %rust_env(), "NOTIFY_EMAIL is not set; submissions are only logged");
        return Ok(Arc::new(LogSubmissionNotifier));
    };

    let sender = SmtpEmailSender::from_settings(&settings.smtp, &settings.from_email)
        .context("failed to build SMTP transport")?;

    Ok(Arc::new(EmailSubmissionNotifier::new(
        Arc::new(sender),
        &settings.notify_email,
    )))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        auth::adapter::incoming::web::routes as auth,
        contact_info::adapter::incoming::web::routes as contact_info,
        contact_message::adapter::incoming::web::routes as contact_message,
        content::adapter::incoming::web::routes as content,
        media::adapter::incoming::web::routes as media,
        page::adapter::incoming::web::routes as page,
        profile::adapter::incoming::web::routes as profile,
        testimonial::adapter::incoming::web::routes as testimonial,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
    // Auth
    cfg.service(auth::login_staff_handler);
    cfg.service(auth::refresh_token_handler);
    // Profile
    cfg.service(profile::get_profile_handler);
    cfg.service(profile::create_profile_handler);
    cfg.service(profile::update_profile_handler);
    cfg.service(profile::upsert_profile_translation_handler);
    cfg.service(profile::remove_profile_translation_handler);
    // Contact info
    cfg.service(contact_info::get_contact_info_handler);
    cfg.service(contact_info::create_contact_info_handler);
    cfg.service(contact_info::update_contact_info_handler);
    // Skills, projects, experiences, educations, hobbies
    cfg.configure(content::configure);
    // Contact messages
    cfg.service(contact_message::list_contact_messages_handler);
    cfg.service(contact_message::get_contact_message_handler);
    cfg.service(contact_message::delete_contact_message_handler);
    // Testimonials (fixed paths before `{id}`)
    cfg.service(testimonial::count_pending_testimonials_handler);
    cfg.service(testimonial::approve_testimonials_handler);
    cfg.service(testimonial::reject_testimonials_handler);
    cfg.service(testimonial::list_testimonials_handler);
    cfg.service(testimonial::delete_testimonial_handler);
    // Media
    cfg.service(media::upload_media_handler);
    cfg.service(media::serve_media_handler);
    // Public page, last: `/{lang}/` would shadow the fixed paths above
    cfg.service(page::redirect_to_default_language_handler);
    cfg.service(page::home_page_handler);
    cfg.service(page::submit_page_form_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

#[macro_use]
extern crate rocket;

use rocket::http::Method;
use rocket_cors::{AllowedOrigins, CorsOptions};
use rocket_prometheus::PrometheusMetrics;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use habit_challenge_server::{db, entrypoints, store};

#[derive(Debug, serde::Deserialize)]
pub struct Env {
    in_memory_store: Option<bool>,
    // Comma separated, any origin when unset
    cors_allowed_origins: Option<String>,
}

#[launch]
async fn rocket() -> _ {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let env = envy::from_env::<Env>().expect("Failed to load environment variables");

    let allowed_origins = match env.cors_allowed_origins.as_deref() {
        Some(origins) => AllowedOrigins::some_exact(
            &origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .collect::<Vec<_>>(),
        ),
        None => AllowedOrigins::all(),
    };
    let cors = CorsOptions {
        allowed_origins,
        allowed_methods: [Method::Get, Method::Post]
            .into_iter()
            .map(From::from)
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to build CORS");

    let prometheus = PrometheusMetrics::new();

    let span = tracing::info_span!("Starting Rocket");
    let _enter = span.enter();

    let rocket = rocket::build()
        .attach(prometheus.clone())
        .attach(cors)
        .mount("/metrics", prometheus);

    let rocket = if env.in_memory_store.unwrap_or_default() {
        rocket.attach(store::memory_stage())
    } else {
        rocket.attach(db::stage())
    };

    rocket.attach(entrypoints::stage())
}

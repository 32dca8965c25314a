use axum::{
    Router,
    routing::{delete, get},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::users;
use crate::config::{Config, IdScheme};
use crate::store::UserStore;
use crate::store::ids::{IdStrategy, SequentialIds, UuidIds};
use crate::store::models::sample_users;

pub struct AppState<S: IdStrategy> {
    pub users: RwLock<UserStore<S>>,
}

impl<S: IdStrategy> AppState<S> {
    pub fn new(store: UserStore<S>) -> Self {
        Self {
            users: RwLock::new(store),
        }
    }
}

pub fn router<S: IdStrategy>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(users::home::<S>))
        .route("/health", get(|| async { "OK" }))
        .route(
            "/users",
            get(users::list_users::<S>).post(users::create_user::<S>),
        )
        .route("/users/count", get(users::count_users::<S>))
        .route(
            "/users/{user_id}",
            get(users::get_user::<S>)
                .put(users::update_user::<S>)
                .delete(users::delete_user::<S>),
        )
        .route("/users/v1/delete/{user_id}", delete(users::delete_user::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_store<S: IdStrategy>(ids: S, seed: bool) -> UserStore<S> {
    let mut store = UserStore::new(ids);
    if seed {
        store.seed(sample_users());
        info!(total_users = store.count(), "seeded sample users");
    }
    store
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let app = match config.id_scheme {
        IdScheme::Uuid => router(Arc::new(AppState::new(build_store(UuidIds, config.seed)))),
        IdScheme::Sequential => router(Arc::new(AppState::new(build_store(
            SequentialIds::default(),
            config.seed,
        )))),
    };

    let listener = TcpListener::bind(config.bind).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, id_scheme = ?config.id_scheme, "user service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("user service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

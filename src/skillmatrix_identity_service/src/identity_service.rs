use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use skillmatrix_axum::AppState;
use skillmatrix_axum::routes::{
    forgot_password, login, signup, update_password, verify_email, verify_token,
};
use skillmatrix_core::{UserStore, VerificationNotifier};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The identity service: route table plus the layers every deployment
/// wants.
pub struct IdentityService {
    router: Router,
}

impl IdentityService {
    /// Assemble the router over the given state.
    ///
    /// The store and notifier are generic so the integration tests can run
    /// the real route table against in-memory implementations.
    pub fn new<U, N>(state: AppState<U, N>) -> Self
    where
        U: UserStore + Clone + 'static,
        N: VerificationNotifier + Clone + 'static,
    {
        let router = Router::new()
            .route("/signup", post(signup::<U, N>))
            .route("/verify-email", get(verify_email::<U, N>))
            .route("/login", post(login::<U, N>))
            .route("/forgot-password", post(forgot_password::<U, N>))
            .route("/update-password", post(update_password::<U, N>))
            .route("/verify-token", post(verify_token::<U, N>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// The fully-layered router, for embedding or test harnesses.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run as a standalone server until a shutdown signal arrives.
    ///
    /// In-flight requests are allowed to complete before the process
    /// exits.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Identity service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install shutdown signal handler");
    tracing::info!("Shutdown signal received");
}

//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_root, health_check, post_process, post_tokenize};
pub use routes::{cors_layer, create_router, run_server};
pub use state::AppState;

//! jsearch shell — query interpreter, result rendering, and the interactive
//! prompt loop.

pub mod app;
pub mod commands;
pub mod render;
pub mod session;
pub mod theme;

pub use app::App;
pub use commands::Command;
pub use session::{Outcome, Session};

use jsearch_core::{config::Config, Database};

/// Start the interactive shell over an already-loaded database.
pub fn run(config: &Config, db: Database) -> anyhow::Result<()> {
    let session = Session::new(db, config.display.clone(), theme::Theme::load_default());
    App::new(session).run()
}

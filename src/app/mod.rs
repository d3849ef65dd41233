pub mod app;
pub mod event;
pub mod form;
pub mod mode;
pub mod render_state;
pub mod state;

pub use app::App;
pub use event::AppEvent;
pub use mode::Screen;
pub use render_state::RenderState;
pub use state::{validate_credentials, validate_text, CheckState, Notice, ValidationError};

// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell>
// ============================================================================

pub mod app_state;

pub use app_state::{AppState, Section};

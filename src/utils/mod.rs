// ============================================================================
// UTILS MODULE - Constantes y formateo
// ============================================================================

pub mod constants;
pub mod format;

pub use constants::API_BASE;
pub use format::{format_date, format_money, group_thousands};

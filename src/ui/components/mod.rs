pub mod gauge;
pub mod nav;

pub use gauge::{balance_gauge, health_gauge, share_gauge};
pub use nav::{nav_bar, screen_tabs};

pub mod dashboard;
pub mod inventory;
pub mod layout;
pub mod shop;
pub mod tasks;

pub use dashboard::DashboardScreen;
pub use inventory::InventoryScreen;
pub use layout::LayoutScreen;
pub use shop::ShopScreen;
pub use tasks::TasksScreen;

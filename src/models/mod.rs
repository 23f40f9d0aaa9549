pub mod arrangement;
pub mod layout;
pub mod lifecycle;
pub mod plant;
pub mod product;
pub mod staff;

pub use arrangement::*;
pub use layout::*;
pub use lifecycle::*;
pub use plant::*;
pub use product::*;
pub use staff::*;

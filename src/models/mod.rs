pub mod asset;
pub mod cart;
pub mod custom_field;
pub mod item;
pub mod loan;
pub mod log;
pub mod request;
pub mod user;

pub use asset::*;
pub use cart::*;
pub use custom_field::*;
pub use item::*;
pub use loan::*;
pub use log::*;
pub use request::*;
pub use user::*;

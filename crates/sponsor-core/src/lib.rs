pub mod catalog;
pub mod constants;
pub mod contact;
pub mod counter;
pub mod disclosure;
pub mod effects;
pub mod error;
pub mod modal;
pub mod nav;
pub mod pointer;
pub mod registry;
pub mod scroll;
pub mod surface;
pub mod throttle;

pub use catalog::*;
pub use constants::*;
pub use error::*;
pub use surface::*;

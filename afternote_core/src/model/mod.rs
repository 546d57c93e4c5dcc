//! 领域模型

pub mod account;
pub mod afternote;
pub mod receiver;
pub mod time_letter;
pub mod verification;

pub use account::*;
pub use afternote::*;
pub use receiver::*;
pub use time_letter::*;
pub use verification::*;

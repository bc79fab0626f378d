pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use refresh::refresh;
pub use register::register;

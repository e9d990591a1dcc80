mod health_check;
mod pages;
mod signup;

pub use health_check::*;
pub use pages::*;
pub use signup::*;

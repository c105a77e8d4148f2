// Shared chrome and form pieces drawn by the screens

pub mod error_banner;
pub mod footer;
pub mod input_field;
pub mod nav_bar;

pub use error_banner::ErrorBanner;
pub use footer::Footer;
pub use input_field::InputField;
pub use nav_bar::NavBar;

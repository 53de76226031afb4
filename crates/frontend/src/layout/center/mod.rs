pub mod center;
pub mod tabs;

pub use center::Center;
pub use tabs::tabs::Tabs;

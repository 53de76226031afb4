pub mod tab;
pub mod tabs;

pub mod confirm_delete;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod toast;
pub mod ui;
pub mod universal_modal;

pub use confirm_delete::ConfirmDeleteModal;
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use toast::{ToastHost, ToastService};
pub use universal_modal::UniversalModal;

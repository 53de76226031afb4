pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use center::{Center, Tabs};
use left::{Left, Sidebar};
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content (tabs)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>

                <div class="app-main">
                    <Center>
                        <Tabs />
                    </Center>
                </div>
            </div>
        </div>
    }
}

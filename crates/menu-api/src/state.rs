use std::sync::Arc;

use menu_core::{MenuDiscovery, MenuTreeBuilder};

#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuTreeBuilder<dyn MenuDiscovery>>,
    pub app_name: String,
}

impl AppState {
    pub fn new(menu: MenuTreeBuilder<dyn MenuDiscovery>, app_name: impl Into<String>) -> Self {
        Self {
            menu: Arc::new(menu),
            app_name: app_name.into(),
        }
    }
}

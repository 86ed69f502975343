use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use pcat::catalog::Catalog;
use pcat::domain::config::WindowConfig;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Opens the window and renders `root` with `catalog` available as context.
    pub fn launch(self, catalog: Catalog, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(catalog).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_settings_follow_config() {
        let window =
            WindowConfig { title: "Shop".to_owned(), width: 640.0, height: 480.0 };
        let app = DesktopApp::from_config(&window);

        assert_eq!(app.title(), "Shop");
        assert_eq!(app.size(), (640.0, 480.0));
    }

    #[test]
    fn builders_override_defaults() {
        let app = DesktopApp::new().with_title("Catalog").with_size(800.0, 600.0);

        assert_eq!(app.title(), "Catalog");
        assert_eq!(app.size(), (800.0, 600.0));
    }
}

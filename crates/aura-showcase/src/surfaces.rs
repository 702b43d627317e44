#![forbid(unsafe_code)]

//! Two independent rendering surfaces.
//!
//! Neither surface holds a reference to the other or to the theme context;
//! each re-derives its own view of the world from the style-change events it
//! subscribes to. This mirrors a storefront grid reacting to a theme change
//! triggered from a separate settings panel.

use std::sync::{Arc, Mutex};

use aura_runtime::StyleChanged;

/// What the storefront grid derives from an event: the class string it would
/// attach to each product card.
#[derive(Debug, Clone, Default)]
pub struct StorefrontView {
    pub card_classes: String,
    pub radius: String,
    pub accent_hex: String,
}

/// What the settings panel derives: its header line and swatch strip.
#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    pub heading: String,
    pub font_label: &'static str,
    pub swatches: Vec<String>,
}

/// Shared, lock-guarded state for a surface.
pub type Shared<T> = Arc<Mutex<T>>;

/// Build the storefront's event listener over its shared state.
pub fn storefront_listener(state: Shared<StorefrontView>) -> impl Fn(&StyleChanged) + Send {
    move |event| {
        let mut view = state.lock().unwrap_or_else(|e| e.into_inner());
        view.card_classes = event.style.surface_classes().join(" ");
        view.radius = event.style.radius.clone();
        view.accent_hex = event.style.accents[0].to_hex();
    }
}

/// Build the settings panel's event listener over its shared state.
pub fn settings_listener(state: Shared<SettingsView>) -> impl Fn(&StyleChanged) + Send {
    move |event| {
        let mut view = state.lock().unwrap_or_else(|e| e.into_inner());
        view.heading = format!(
            "{} ({}/{})",
            event.theme.name(),
            event.theme.index() + 1,
            aura_theme::theme_count()
        );
        view.font_label = event.style.font.stack().name;
        view.swatches = event.style.accents.iter().map(|c| c.to_hex()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_runtime::ThemeContext;
    use aura_style::Shape;
    use aura_theme::ThemeId;

    #[test]
    fn surfaces_derive_from_events() {
        let mut ctx = ThemeContext::in_memory();

        let storefront: Shared<StorefrontView> = Arc::default();
        let settings: Shared<SettingsView> = Arc::default();
        let _a = ctx.subscribe(storefront_listener(Arc::clone(&storefront)));
        let _b = ctx.subscribe(settings_listener(Arc::clone(&settings)));

        ctx.select_theme(ThemeId::Cyberpunk);
        ctx.set_shape(Shape::Pill);

        let storefront = storefront.lock().unwrap();
        assert!(storefront.card_classes.contains("rounded-pill"));
        assert_eq!(storefront.accent_hex, "#00FF41");

        let settings = settings.lock().unwrap();
        assert!(settings.heading.starts_with("Cyberpunk"));
        assert_eq!(settings.font_label, "Source Code Pro");
        assert_eq!(settings.swatches.len(), 5);
    }
}

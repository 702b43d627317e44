#![forbid(unsafe_code)]

//! The active selection.
//!
//! [`ThemeContext`] owns the store, the presentation surface, and the change
//! hub, and holds the currently selected theme plus its resolved style. The
//! resolved values are never stored independently; they are recomputed from
//! `(theme, customization)` on every write, so they cannot drift.
//!
//! Every mutation runs strictly in order within the calling thread:
//! persist → resolve → publish → notify. There is no error state; degraded
//! inputs (unknown theme keys, invalid override tokens, failed persistence)
//! fall back silently.

use rand::Rng;

use aura_style::{ColorArrangement, Effect3d, FontId, Gradient, Shadow, Shape};
use aura_theme::{Customization, EffectiveStyle, ThemeId, ThemePreset, preset, resolve};

use crate::notify::{ChangeHub, StyleChanged, Subscription};
use crate::publish::publish;
use crate::store::{CustomizationStore, OverrideField};
use crate::surface::PresentationSurface;

/// Theme restored when storage holds no (or an unknown) selection.
pub const DEFAULT_THEME: ThemeId = ThemeId::NeonNoir;

/// Radius choices offered by the settings panel, also used by random mix.
const RADIUS_CHOICES: [&str; 6] = ["0", "0.25rem", "0.5rem", "0.75rem", "1rem", "2rem"];

/// Process-wide theme state, owned and injected rather than global.
pub struct ThemeContext {
    store: CustomizationStore,
    surface: PresentationSurface,
    hub: ChangeHub,
    theme: ThemeId,
    custom: Customization,
    style: EffectiveStyle,
}

impl ThemeContext {
    /// Restore state from the store and publish the initial style.
    ///
    /// An absent or unknown stored theme falls back to [`DEFAULT_THEME`];
    /// stored overrides load field-by-field with invalid values unset.
    #[must_use]
    pub fn init(mut store: CustomizationStore) -> Self {
        let custom = store.load();
        let theme = store.theme().unwrap_or(DEFAULT_THEME);
        tracing::debug!(
            theme = theme.key(),
            backend = store.backend_name(),
            overrides = !custom.is_empty(),
            "theme context initialized"
        );
        let style = resolve(theme, &custom);
        let mut surface = PresentationSurface::new();
        publish(&mut surface, preset(theme), &style);
        Self {
            store,
            surface,
            hub: ChangeHub::new(),
            theme,
            custom,
            style,
        }
    }

    /// Ephemeral context for tests and demos.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::init(CustomizationStore::in_memory())
    }

    // ── Read access ─────────────────────────────────────────────────────

    #[must_use]
    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    #[must_use]
    pub fn preset(&self) -> &'static ThemePreset {
        preset(self.theme)
    }

    /// The current resolved style.
    #[must_use]
    pub fn style(&self) -> &EffectiveStyle {
        &self.style
    }

    #[must_use]
    pub fn customization(&self) -> &Customization {
        &self.custom
    }

    /// The shared presentation surface.
    #[must_use]
    pub fn surface(&self) -> &PresentationSurface {
        &self.surface
    }

    #[must_use]
    pub fn store(&self) -> &CustomizationStore {
        &self.store
    }

    /// Register a listener for style changes. Dropping the returned guard
    /// deregisters it.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&StyleChanged) + Send + 'static) -> Subscription {
        self.hub.subscribe(listener)
    }

    // ── Theme selection ─────────────────────────────────────────────────

    /// Select a theme. Overrides are independent of the theme and survive
    /// the switch.
    pub fn select_theme(&mut self, theme: ThemeId) {
        tracing::debug!(from = self.theme.key(), to = theme.key(), "theme selected");
        self.theme = theme;
        self.store.set_theme(theme);
        self.refresh();
    }

    /// Select a theme by storage key. Unknown keys are a no-op: the prior
    /// selection stays active and stored overrides are untouched.
    pub fn select_theme_key(&mut self, key: &str) {
        match ThemeId::from_key(key) {
            Some(theme) => self.select_theme(theme),
            None => {
                tracing::debug!(key, "unknown theme key, keeping current selection");
            }
        }
    }

    /// Advance to the next theme in catalog order, wrapping.
    pub fn next_theme(&mut self) -> ThemeId {
        let next = self.theme.next();
        self.select_theme(next);
        next
    }

    /// Step back to the previous theme in catalog order, wrapping.
    pub fn prev_theme(&mut self) -> ThemeId {
        let prev = self.theme.prev();
        self.select_theme(prev);
        prev
    }

    // ── Overrides ───────────────────────────────────────────────────────

    pub fn set_radius(&mut self, radius: &str) {
        self.custom.radius = if radius.is_empty() {
            None
        } else {
            Some(radius.to_string())
        };
        self.store.set_field(OverrideField::Radius, radius);
        self.refresh();
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.custom.shape = Some(shape);
        self.store.set_field(OverrideField::Shape, shape.as_str());
        self.refresh();
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.custom.shadow = Some(shadow);
        self.store.set_field(OverrideField::Shadow, shadow.as_str());
        self.refresh();
    }

    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.custom.gradient = Some(gradient);
        self.store
            .set_field(OverrideField::Gradient, gradient.as_str());
        self.refresh();
    }

    pub fn set_effect_3d(&mut self, effect: Effect3d) {
        self.custom.effect_3d = Some(effect);
        self.store
            .set_field(OverrideField::Effect3d, effect.as_str());
        self.refresh();
    }

    pub fn set_font(&mut self, font: FontId) {
        self.custom.font = Some(font);
        self.store.set_field(OverrideField::Font, font.as_str());
        self.refresh();
    }

    pub fn set_arrangement(&mut self, arrangement: ColorArrangement) {
        self.custom.arrangement = Some(arrangement);
        self.store
            .set_field(OverrideField::Arrangement, arrangement.as_str());
        self.refresh();
    }

    /// Set an override from a raw string, for string-typed callers.
    ///
    /// The value is persisted verbatim; if this release does not recognize
    /// it, it resolves as unset and falls through the precedence chain.
    pub fn set_override(&mut self, field: OverrideField, value: &str) {
        self.store.set_field(field, value);
        self.custom = self.store.customization();
        self.refresh();
    }

    /// Clear all seven overrides and re-derive the active theme's defaults.
    pub fn reset_customizations(&mut self) {
        tracing::debug!(theme = self.theme.key(), "customizations reset");
        self.store.clear_overrides();
        self.custom = Customization::default();
        self.refresh();
    }

    /// Random mix: a random theme plus a random value for every override
    /// dimension, in one action.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let theme = ThemeId::from_index(rng.gen_range(0..ThemeId::ALL.len()));
        self.theme = theme;
        self.store.set_theme(theme);

        let radius = RADIUS_CHOICES[rng.gen_range(0..RADIUS_CHOICES.len())];
        let shape = Shape::ALL[rng.gen_range(0..Shape::ALL.len())];
        let shadow = Shadow::ALL[rng.gen_range(0..Shadow::ALL.len())];
        let gradient = Gradient::ALL[rng.gen_range(0..Gradient::ALL.len())];
        let effect = Effect3d::ALL[rng.gen_range(0..Effect3d::ALL.len())];
        let font = FontId::ALL[rng.gen_range(0..FontId::ALL.len())];
        let arrangement = ColorArrangement::ALL[rng.gen_range(0..ColorArrangement::ALL.len())];

        self.custom = Customization {
            radius: Some(radius.to_string()),
            shape: Some(shape),
            shadow: Some(shadow),
            gradient: Some(gradient),
            effect_3d: Some(effect),
            font: Some(font),
            arrangement: Some(arrangement),
        };
        self.store.set_field(OverrideField::Radius, radius);
        self.store.set_field(OverrideField::Shape, shape.as_str());
        self.store.set_field(OverrideField::Shadow, shadow.as_str());
        self.store
            .set_field(OverrideField::Gradient, gradient.as_str());
        self.store
            .set_field(OverrideField::Effect3d, effect.as_str());
        self.store.set_field(OverrideField::Font, font.as_str());
        self.store
            .set_field(OverrideField::Arrangement, arrangement.as_str());

        tracing::debug!(theme = theme.key(), "random mix applied");
        self.refresh();
    }

    /// Recompute, publish, notify. The resolved style is always a pure
    /// function of the current selection and overrides.
    fn refresh(&mut self) {
        self.style = resolve(self.theme, &self.custom);
        publish(&mut self.surface, preset(self.theme), &self.style);
        self.hub.notify(&StyleChanged {
            theme: self.theme,
            style: self.style.clone(),
        });
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme)
            .field("overrides", &self.custom)
            .field("backend", &self.store.backend_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, StorageBackend, keys};
    use crate::surface::attrs;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn shared_backend() -> Arc<dyn StorageBackend> {
        Arc::new(MemoryStorage::new())
    }

    #[test]
    fn init_defaults_to_neon_noir() {
        let ctx = ThemeContext::in_memory();
        assert_eq!(ctx.theme(), ThemeId::NeonNoir);
        assert_eq!(ctx.style().shadow, Shadow::Neon);
        assert_eq!(ctx.surface().attribute(attrs::THEME), Some("neon-noir"));
    }

    #[test]
    fn init_restores_stored_selection_and_overrides() {
        let mut entries = HashMap::new();
        entries.insert(keys::THEME.to_string(), "cyberpunk".to_string());
        entries.insert(keys::SHAPE.to_string(), "organic".to_string());
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::with_entries(entries));

        let ctx = ThemeContext::init(CustomizationStore::new(backend));
        assert_eq!(ctx.theme(), ThemeId::Cyberpunk);
        assert_eq!(ctx.style().shape, Shape::Organic);
        // Untouched dimensions follow the theme.
        assert_eq!(ctx.style().gradient, Gradient::Duotone);
    }

    #[test]
    fn init_with_unknown_stored_theme_uses_default() {
        let mut entries = HashMap::new();
        entries.insert(keys::THEME.to_string(), "nonsense".to_string());
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::with_entries(entries));

        let ctx = ThemeContext::init(CustomizationStore::new(backend));
        assert_eq!(ctx.theme(), DEFAULT_THEME);
    }

    #[test]
    fn select_theme_persists_and_publishes() {
        let backend = shared_backend();
        let mut ctx = ThemeContext::init(CustomizationStore::new(Arc::clone(&backend)));
        ctx.select_theme(ThemeId::GoddessGold);

        assert_eq!(ctx.surface().attribute(attrs::THEME), Some("goddess-gold"));
        assert_eq!(ctx.style().shape, Shape::Pill);

        let reloaded = ThemeContext::init(CustomizationStore::new(backend));
        assert_eq!(reloaded.theme(), ThemeId::GoddessGold);
    }

    #[test]
    fn unknown_theme_key_is_a_no_op() {
        let mut ctx = ThemeContext::in_memory();
        ctx.set_shape(Shape::Pill);
        let before = ctx.style().clone();

        ctx.select_theme_key("doesNotExist");
        assert_eq!(ctx.theme(), ThemeId::NeonNoir);
        assert_eq!(ctx.style(), &before);
        // Stored overrides are not corrupted.
        assert_eq!(ctx.store().get(keys::SHAPE), Some("pill"));
    }

    #[test]
    fn overrides_survive_theme_switches() {
        let mut ctx = ThemeContext::in_memory();
        ctx.set_shadow(Shadow::Harsh);
        ctx.select_theme(ThemeId::SoftPastel);
        assert_eq!(ctx.style().shadow, Shadow::Harsh);
        ctx.select_theme(ThemeId::WarmVelvet);
        assert_eq!(ctx.style().shadow, Shadow::Harsh);
    }

    #[test]
    fn next_and_prev_cycle_the_catalog() {
        let mut ctx = ThemeContext::in_memory();
        assert_eq!(ctx.next_theme(), ThemeId::WarmVelvet);
        assert_eq!(ctx.prev_theme(), ThemeId::NeonNoir);
        assert_eq!(ctx.prev_theme(), ThemeId::FetishPalace);
    }

    #[test]
    fn set_override_with_invalid_value_resolves_as_unset() {
        let mut ctx = ThemeContext::in_memory();
        ctx.set_override(OverrideField::Shadow, "sparkly");
        // neonNoir's own shadow default applies.
        assert_eq!(ctx.style().shadow, Shadow::Neon);
        // The raw token is still stored.
        assert_eq!(ctx.store().get(keys::SHADOW), Some("sparkly"));
    }

    #[test]
    fn reset_rederives_theme_defaults() {
        let mut ctx = ThemeContext::in_memory();
        ctx.set_shape(Shape::Blob);
        ctx.set_radius("2rem");
        ctx.set_arrangement(ColorArrangement::RotateForward);
        ctx.reset_customizations();

        assert!(ctx.customization().is_empty());
        assert_eq!(ctx.style().shape, Shape::Standard);
        assert_eq!(ctx.style().radius, "1rem");
        assert_eq!(ctx.style().accents, ctx.preset().colors.accents);
        for key in keys::OVERRIDES {
            assert_eq!(ctx.store().get(key), None);
        }
    }

    #[test]
    fn subscribers_observe_every_mutation_in_order() {
        let mut ctx = ThemeContext::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _sub = ctx.subscribe(move |event| {
            seen_clone
                .lock()
                .unwrap()
                .push((event.theme, event.style.shape));
        });

        ctx.set_shape(Shape::Angular);
        ctx.select_theme(ThemeId::DungeonChic);
        ctx.reset_customizations();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (ThemeId::NeonNoir, Shape::Angular));
        assert_eq!(seen[1], (ThemeId::DungeonChic, Shape::Angular));
        // After reset, Dungeon Chic's own angular default applies.
        assert_eq!(seen[2], (ThemeId::DungeonChic, Shape::Angular));
    }

    #[test]
    fn dropped_subscriber_stops_receiving() {
        let mut ctx = ThemeContext::in_memory();
        let seen = Arc::new(Mutex::new(0usize));
        let seen_clone = Arc::clone(&seen);
        let sub = ctx.subscribe(move |_| {
            *seen_clone.lock().unwrap() += 1;
        });

        ctx.set_font(FontId::Roboto);
        drop(sub);
        ctx.set_font(FontId::Crimson);
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn notification_carries_the_published_style() {
        let mut ctx = ThemeContext::in_memory();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        let _sub = ctx.subscribe(move |event| {
            *seen_clone.lock().unwrap() = Some(event.style.clone());
        });

        ctx.set_gradient(Gradient::Radial);
        let style = seen.lock().unwrap().clone().expect("event delivered");
        assert_eq!(style, *ctx.style());
        assert_eq!(
            ctx.surface().property(crate::surface::props::GRADIENT_ANGLE),
            Some("circle at center")
        );
    }

    #[test]
    fn randomize_sets_every_override_and_persists() {
        let backend = shared_backend();
        let mut ctx = ThemeContext::init(CustomizationStore::new(Arc::clone(&backend)));
        let mut rng = StdRng::seed_from_u64(7);
        ctx.randomize(&mut rng);

        let custom = ctx.customization();
        assert!(custom.radius.is_some());
        assert!(custom.shape.is_some());
        assert!(custom.shadow.is_some());
        assert!(custom.gradient.is_some());
        assert!(custom.effect_3d.is_some());
        assert!(custom.font.is_some());
        assert!(custom.arrangement.is_some());

        // Everything survives a reload.
        let reloaded = ThemeContext::init(CustomizationStore::new(backend));
        assert_eq!(reloaded.theme(), ctx.theme());
        assert_eq!(reloaded.customization(), ctx.customization());
        assert_eq!(reloaded.style(), ctx.style());
    }

    #[test]
    fn randomize_is_deterministic_for_a_seed() {
        let mut a = ThemeContext::in_memory();
        let mut b = ThemeContext::in_memory();
        a.randomize(&mut StdRng::seed_from_u64(42));
        b.randomize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.theme(), b.theme());
        assert_eq!(a.customization(), b.customization());
    }

    #[test]
    fn resolved_state_never_drifts_from_inputs() {
        let mut ctx = ThemeContext::in_memory();
        ctx.set_shape(Shape::Squircle);
        ctx.select_theme(ThemeId::LatexNoir);
        ctx.set_arrangement(ColorArrangement::RotateBackward);

        let expected = aura_theme::resolve(ctx.theme(), ctx.customization());
        assert_eq!(ctx.style(), &expected);
    }
}

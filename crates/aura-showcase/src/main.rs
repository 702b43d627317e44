#![forbid(unsafe_code)]

//! Aura showcase binary entry point.
//!
//! Drives the whole stack once through: restore, theme cycling, live
//! overrides, random mix, reset, with a storefront and a settings panel
//! kept in sync purely through change events.

mod cli;
mod surfaces;

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use aura_runtime::{CustomizationStore, FileStorage, ThemeContext};
use aura_style::{ColorArrangement, Effect3d, Shadow, Shape};

use surfaces::{SettingsView, Shared, StorefrontView, settings_listener, storefront_listener};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = cli::Opts::parse();

    let store = match opts.storage.as_str() {
        "memory" => CustomizationStore::in_memory(),
        _ => match &opts.state_file {
            Some(path) => CustomizationStore::with_file(path),
            None => {
                let storage = FileStorage::default_for_app("showcase");
                tracing::debug!(path = %storage.path().display(), "using default state file");
                CustomizationStore::new(Arc::new(storage))
            }
        },
    };

    let mut ctx = ThemeContext::init(store);
    println!(
        "restored: {} ({} stored override{})",
        ctx.theme().name(),
        override_count(&ctx),
        if override_count(&ctx) == 1 { "" } else { "s" }
    );

    let storefront: Shared<StorefrontView> = Arc::default();
    let settings: Shared<SettingsView> = Arc::default();
    let _storefront_sub = ctx.subscribe(storefront_listener(Arc::clone(&storefront)));
    let _settings_sub = ctx.subscribe(settings_listener(Arc::clone(&settings)));

    if let Some(key) = &opts.theme {
        // Unknown keys leave the prior selection active.
        ctx.select_theme_key(key);
        if ctx.theme().key() != key {
            eprintln!("unknown theme key '{key}', staying on {}", ctx.theme().name());
        }
    }

    println!("\n== theme cycling ==");
    for _ in 0..3 {
        ctx.next_theme();
        print_views(&storefront, &settings);
    }

    println!("\n== live overrides ==");
    ctx.set_shape(Shape::Squircle);
    ctx.set_shadow(Shadow::Neon);
    ctx.set_effect_3d(Effect3d::Floating);
    ctx.set_arrangement(ColorArrangement::RotateForward);
    print_views(&storefront, &settings);

    if !opts.skip_random {
        println!("\n== random mix (seed {}) ==", opts.seed);
        let mut rng = StdRng::seed_from_u64(opts.seed);
        ctx.randomize(&mut rng);
        print_views(&storefront, &settings);
    }

    println!("\n== reset ==");
    ctx.reset_customizations();
    print_views(&storefront, &settings);

    println!("\nfinal state persists under '{}'", ctx.store().backend_name());
}

fn override_count(ctx: &ThemeContext) -> usize {
    let custom = ctx.customization();
    [
        custom.radius.is_some(),
        custom.shape.is_some(),
        custom.shadow.is_some(),
        custom.gradient.is_some(),
        custom.effect_3d.is_some(),
        custom.font.is_some(),
        custom.arrangement.is_some(),
    ]
    .into_iter()
    .filter(|set| *set)
    .count()
}

fn print_views(storefront: &Shared<StorefrontView>, settings: &Shared<SettingsView>) {
    let settings = settings.lock().unwrap_or_else(|e| e.into_inner());
    let storefront = storefront.lock().unwrap_or_else(|e| e.into_inner());
    println!("settings   | {} / {}", settings.heading, settings.font_label);
    println!("           | swatches: {}", settings.swatches.join(" "));
    println!(
        "storefront | accent {} radius {} classes [{}]",
        storefront.accent_hex, storefront.radius, storefront.card_classes
    );
}

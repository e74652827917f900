// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the gallery screen to configuration, localization
//! and the window.
//!
//! Startup resolves everything that can fail (settings file, source location,
//! HTTP client) before the window opens, so `main` can report it and exit.
//! Once running, every message is forwarded to the gallery component.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::application::port::GallerySource;
use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SourceLocation;
use crate::ui::gallery::{self, ViewEnv};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    /// Resolved once at startup; `System` is detected here, not per frame.
    theme: Theme,
    manifest_name: String,
    auto_refresh: Option<Duration>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("theme", &self.theme)
            .field("auto_refresh", &self.auto_refresh)
            .finish()
    }
}

/// Everything resolved from flags and `settings.toml` before the window opens.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    pub source: Arc<dyn GallerySource>,
    pub lang: Option<String>,
}

impl Startup {
    /// Loads settings and connects to the gallery source.
    ///
    /// An unreadable settings file only logs a warning; an invalid source is
    /// an error.
    pub fn prepare(flags: Flags) -> Result<Self> {
        let (mut config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "failed to read settings, using defaults");
        }
        if let Some(secs) = flags.refresh_secs {
            config.gallery.auto_refresh_secs = Some(secs);
        }

        let raw_source = flags
            .source
            .clone()
            .unwrap_or_else(|| config.gallery.source_or_default().to_string());
        let location = SourceLocation::parse(&raw_source)?;
        tracing::info!(source = %location, "opening gallery");
        let source = location.connect(config.gallery.layout())?;

        Ok(Self {
            config,
            source,
            lang: flags.lang,
        })
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.config_dir.clone());
    let startup = Startup::prepare(flags)?;

    // The boot closure is `Fn`, so each call gets its own copy.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Creates the app and starts the first manifest load.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            source,
            lang,
        } = startup;

        let i18n = I18n::new(lang, &config);
        let mut gallery = gallery::State::new(source, gallery::Settings::from(&config.gallery));
        let task = gallery.load_images().map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            theme: config.general.theme_mode.theme(),
            manifest_name: config.gallery.layout().manifest_name,
            auto_refresh: config.gallery.auto_refresh(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.current_image() {
            Some(image) => self.i18n.tr_with_args(
                "window-title-image",
                &[("alt", image.alt_text()), ("app", app_name.as_str())],
            ),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.gallery.subscription(),
            gallery::auto_refresh(self.auto_refresh),
        ])
        .map(Message::Gallery)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.gallery
            .view(ViewEnv {
                i18n: &self.i18n,
                manifest_name: &self.manifest_name,
            })
            .map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageDescriptor;
    use crate::infrastructure::{DirectorySource, SourceLayout};
    use crate::ui::gallery::Phase;
    use crate::ui::theming::ThemeMode;
    use tempfile::tempdir;

    fn startup(config: Config) -> Startup {
        let dir = tempdir().expect("temp dir");
        Startup {
            config,
            source: Arc::new(DirectorySource::new(
                dir.path().to_path_buf(),
                SourceLayout::default(),
            )),
            lang: Some("en-US".to_string()),
        }
    }

    fn loaded(app: &mut App, images: Vec<ImageDescriptor>) {
        let generation = app.gallery.generation();
        let _ = app.update(Message::Gallery(gallery::Message::ManifestLoaded {
            generation,
            result: Ok(images),
        }));
    }

    #[test]
    fn new_starts_loading_the_manifest() {
        let (app, _task) = App::new(startup(Config::default()));
        assert_eq!(app.gallery.phase(), &Phase::Loading);
        assert_eq!(app.gallery.generation(), 1);
        assert_eq!(app.manifest_name, "images.json");
        assert_eq!(app.auto_refresh, None);
    }

    #[test]
    fn title_shows_app_name_when_lightbox_closed() {
        let (mut app, _task) = App::new(startup(Config::default()));
        loaded(&mut app, vec![ImageDescriptor::new("a.jpg", Some("Sunset".into()))]);
        assert_eq!(app.title(), "Iced Gallery");
    }

    #[test]
    fn title_shows_alt_text_of_open_image() {
        let (mut app, _task) = App::new(startup(Config::default()));
        loaded(
            &mut app,
            vec![
                ImageDescriptor::new("a.jpg", Some("Sunset".into())),
                ImageDescriptor::new("b.jpg", None),
            ],
        );

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));
        assert_eq!(app.title(), "Sunset - Iced Gallery");

        let _ = app.update(Message::Gallery(gallery::Message::ShowNext));
        assert_eq!(app.title(), "Gallery image - Iced Gallery");

        let _ = app.update(Message::Gallery(gallery::Message::CloseLightbox));
        assert_eq!(app.title(), "Iced Gallery");
    }

    #[test]
    fn settings_file_values_reach_the_app() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        config.gallery.manifest_name = Some("photos.json".to_string());
        config.gallery.auto_refresh_secs = Some(60);
        config.gallery.entrance_animation = Some(false);

        let (app, _task) = App::new(startup(config));
        assert!(matches!(app.theme(), Theme::Light));
        assert_eq!(app.manifest_name, "photos.json");
        assert_eq!(app.auto_refresh, Some(Duration::from_secs(60)));
        assert!(!app.gallery.settings().entrance_animation);
    }

    #[test]
    fn theme_is_resolved_once_at_startup() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        let (mut app, _task) = App::new(startup(config));
        assert!(matches!(app.theme, Theme::Dark));

        loaded(&mut app, Vec::new());
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn refresh_message_reloads_with_new_generation() {
        let (mut app, _task) = App::new(startup(Config::default()));
        loaded(&mut app, Vec::new());
        assert_eq!(app.gallery.phase(), &Phase::Ready);

        let _ = app.update(Message::Gallery(gallery::Message::Refresh));
        assert_eq!(app.gallery.phase(), &Phase::Loading);
        assert_eq!(app.gallery.generation(), 2);
    }
}

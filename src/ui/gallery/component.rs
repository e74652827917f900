// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the image list, the card grid and the lightbox. Loads
//! are tagged with a generation number; results from an older load than the
//! latest one are dropped, so the last refresh always wins.

use super::card::{self, Card, Thumbnail};
use super::lightbox::{self, LightboxView};
use super::status::{self, StatusKind, StatusPanel};
use super::{grid, ViewEnv};
use crate::application::port::GallerySource;
use crate::config::{GalleryConfig, ANIMATION_TICK};
use crate::domain::gallery::{ImageDescriptor, Lightbox, LightboxKey, LoadError, NavigationButtons};
use crate::i18n::fluent::I18n;
use crate::media::{self, CacheStats, LoadedImage, ThumbnailCache};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, scroll_lock};
use iced::widget::{button, column, container, row, text, Space, Stack};
use iced::{alignment, event, keyboard, time, window, Element, Event, Length, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Reload the manifest (header button, retry button, timer).
    Refresh,
    ManifestLoaded {
        generation: u64,
        result: Result<Vec<ImageDescriptor>, LoadError>,
    },
    ImageLoaded {
        generation: u64,
        index: usize,
        name: String,
        result: Result<LoadedImage, LoadError>,
    },
    CardPressed(usize),
    ShowPrevious,
    ShowNext,
    CloseLightbox,
    Key(LightboxKey),
    Tick(Instant),
}

/// What the body currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Failed(LoadError),
    Ready,
}

/// Visibility of each part of the window, derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panels {
    pub loading: bool,
    pub error: bool,
    pub stats: bool,
    pub grid: bool,
    pub empty: bool,
}

/// Gallery behaviour settings, resolved from `[gallery]` in the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub images_dir: String,
    pub thumbnail_size: u32,
    pub entrance_animation: bool,
    pub max_concurrent_fetches: usize,
    pub cache_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&GalleryConfig::default())
    }
}

impl From<&GalleryConfig> for Settings {
    fn from(gallery: &GalleryConfig) -> Self {
        Self {
            images_dir: gallery.layout().images_dir,
            thumbnail_size: gallery.thumbnail_size(),
            entrance_animation: gallery.entrance_animation(),
            max_concurrent_fetches: gallery.max_concurrent_fetches(),
            cache_capacity: gallery.cache_capacity(),
        }
    }
}

/// Complete gallery state.
pub struct State {
    source: Arc<dyn GallerySource>,
    settings: Settings,
    phase: Phase,
    images: Vec<ImageDescriptor>,
    cards: Vec<Card>,
    lightbox: Lightbox,
    generation: u64,
    cache: ThumbnailCache,
    permits: Arc<Semaphore>,
    loading_started_at: Instant,
    rendered_at: Option<Instant>,
    now: Instant,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("source", &self.source.describe())
            .field("phase", &self.phase)
            .field("images", &self.images.len())
            .field("lightbox", &self.lightbox)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates the gallery in the loading phase. Call [`State::load_images`]
    /// to start the first load.
    pub fn new(source: Arc<dyn GallerySource>, settings: Settings) -> Self {
        let now = Instant::now();
        Self {
            cache: ThumbnailCache::new(settings.cache_capacity),
            permits: Arc::new(Semaphore::new(settings.max_concurrent_fetches)),
            source,
            settings,
            phase: Phase::Loading,
            images: Vec::new(),
            cards: Vec::new(),
            lightbox: Lightbox::default(),
            generation: 0,
            loading_started_at: now,
            rendered_at: None,
            now,
        }
    }

    /// Starts a manifest load, superseding any load still in flight.
    pub fn load_images(&mut self) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        self.phase = Phase::Loading;
        self.loading_started_at = Instant::now();
        self.now = self.loading_started_at;

        tracing::info!(source = %self.source.describe(), generation, "loading gallery manifest");

        Task::perform(self.source.fetch_manifest(), move |result| {
            Message::ManifestLoaded { generation, result }
        })
    }

    /// External entry point: reload the manifest.
    pub fn refresh(&mut self) -> Task<Message> {
        self.load_images()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.refresh(),
            Message::ManifestLoaded { generation, result } => {
                if generation != self.generation {
                    tracing::debug!(generation, latest = self.generation, "ignoring stale manifest");
                    return Task::none();
                }
                match result {
                    Ok(images) => {
                        tracing::info!(count = images.len(), generation, "gallery manifest loaded");
                        self.render_gallery(images, Instant::now())
                    }
                    Err(err) => {
                        tracing::error!(source = %self.source.describe(), error = %err, "failed to load gallery");
                        self.fail(err);
                        Task::none()
                    }
                }
            }
            Message::ImageLoaded {
                generation,
                index,
                name,
                result,
            } => {
                self.apply_image(generation, index, name, result);
                Task::none()
            }
            Message::CardPressed(index) => {
                self.open_lightbox(index);
                Task::none()
            }
            Message::ShowPrevious => {
                self.show_previous_image();
                Task::none()
            }
            Message::ShowNext => {
                self.show_next_image();
                Task::none()
            }
            Message::CloseLightbox => {
                self.close_lightbox();
                Task::none()
            }
            Message::Key(key) => {
                self.lightbox.handle_key(key, self.images.len());
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Replaces the image list and rebuilds every card, then requests the
    /// card images.
    pub fn render_gallery(&mut self, images: Vec<ImageDescriptor>, at: Instant) -> Task<Message> {
        let previous_name = self.current_image().map(|image| image.name().to_string());

        let cards = images
            .iter()
            .enumerate()
            .map(|(index, descriptor)| self.create_image_card(descriptor, index))
            .collect();
        self.cards = cards;
        self.images = images;

        let position = previous_name
            .and_then(|name| self.images.iter().position(|image| image.name() == name));
        self.lightbox.reconcile(position, self.images.len());

        self.rendered_at = self.settings.entrance_animation.then_some(at);
        self.now = at;
        self.phase = Phase::Ready;

        let stats = self.cache_stats();
        tracing::debug!(
            cards = self.cards.len(),
            hits = stats.hits,
            misses = stats.misses,
            insertions = stats.insertions,
            "gallery rendered"
        );

        self.request_thumbnails()
    }

    /// Builds the card for `descriptor`, reusing a cached image when present.
    pub fn create_image_card(&mut self, descriptor: &ImageDescriptor, index: usize) -> Card {
        let mut card = Card::new(index, descriptor.clone(), &self.settings.images_dir);
        if let Some(image) = self.cache.get(descriptor.name()) {
            card.thumbnail = Thumbnail::Ready(image);
        }
        card
    }

    fn request_thumbnails(&self) -> Task<Message> {
        let generation = self.generation;
        let tasks: Vec<_> = self
            .cards
            .iter()
            .filter(|card| matches!(card.thumbnail, Thumbnail::Pending))
            .map(|card| {
                let index = card.index;
                let name = card.name().to_string();
                Task::perform(
                    media::load(
                        Arc::clone(&self.source),
                        name.clone(),
                        self.settings.thumbnail_size,
                        Arc::clone(&self.permits),
                    ),
                    move |result| Message::ImageLoaded {
                        generation,
                        index,
                        name,
                        result,
                    },
                )
            })
            .collect();
        Task::batch(tasks)
    }

    /// Decoded images are cached by name whatever their generation, and fill
    /// every current card with that name. Failures only mark the card they
    /// were requested for, and only in the latest generation.
    fn apply_image(
        &mut self,
        generation: u64,
        index: usize,
        name: String,
        result: Result<LoadedImage, LoadError>,
    ) {
        let stale = generation != self.generation;
        match result {
            Ok(image) => {
                if stale {
                    tracing::debug!(generation, image = %name, "caching image from an earlier load");
                }
                for card in self
                    .cards
                    .iter_mut()
                    .filter(|card| card.name() == name && card.image().is_none())
                {
                    card.thumbnail = Thumbnail::Ready(image.clone());
                }
                self.cache.insert(name, image);
            }
            Err(err) => {
                if stale {
                    tracing::debug!(generation, image = %name, "ignoring stale image failure");
                    return;
                }
                let Some(card) = self.cards.get_mut(index).filter(|card| card.name() == name) else {
                    return;
                };
                tracing::warn!(image = %card.path, error = %err, "image unavailable");
                card.thumbnail = Thumbnail::Failed;
            }
        }
    }

    fn fail(&mut self, err: LoadError) {
        self.phase = Phase::Failed(err);
        self.images.clear();
        self.cards.clear();
        self.lightbox.close();
        self.rendered_at = None;
    }

    /// Opens the lightbox on card `index`. Out-of-range indices are ignored.
    pub fn open_lightbox(&mut self, index: usize) {
        if index < self.images.len() {
            self.lightbox.open(index);
        }
    }

    pub fn show_previous_image(&mut self) -> bool {
        self.lightbox.show_previous()
    }

    pub fn show_next_image(&mut self) -> bool {
        self.lightbox.show_next(self.images.len())
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationButtons {
        self.lightbox.navigation(self.images.len())
    }

    /// Descriptor shown in the lightbox, if open.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageDescriptor> {
        self.lightbox
            .current_index()
            .and_then(|index| self.images.get(index))
    }

    #[must_use]
    pub fn panels(&self) -> Panels {
        match &self.phase {
            Phase::Loading => Panels {
                loading: true,
                ..Panels::default()
            },
            Phase::Failed(_) => Panels {
                error: true,
                ..Panels::default()
            },
            Phase::Ready => Panels {
                stats: true,
                grid: !self.images.is_empty(),
                empty: self.images.is_empty(),
                ..Panels::default()
            },
        }
    }

    /// "1 image" / "N images" in the active locale.
    #[must_use]
    pub fn stats_label(&self, i18n: &I18n) -> String {
        i18n.tr_count("gallery-count", self.images.len())
    }

    /// Entrance progress of card `index` at the last tick.
    #[must_use]
    pub fn card_progress(&self, index: usize) -> f32 {
        let elapsed = self
            .rendered_at
            .map(|rendered_at| self.now.saturating_duration_since(rendered_at));
        card::entrance_progress(elapsed, index)
    }

    /// True while any card is still entering.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.rendered_at {
            Some(rendered_at) if self.phase == Phase::Ready => {
                self.now.saturating_duration_since(rendered_at) < card::entrance_duration(self.cards.len())
            }
            _ => false,
        }
    }

    fn spinner_rotation(&self) -> f32 {
        animated_spinner::rotation_at(self.now.saturating_duration_since(self.loading_started_at))
    }

    /// Keyboard navigation while the lightbox is open, and a frame tick
    /// while the spinner or an entrance animation runs.
    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard = if self.lightbox.is_open() {
            event::listen_with(lightbox_key)
        } else {
            Subscription::none()
        };

        let tick = if self.phase == Phase::Loading || self.is_animating() {
            time::every(ANIMATION_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard, tick])
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;
        let panels = self.panels();

        let body: Element<'a, Message> = match &self.phase {
            Phase::Loading => status::loading(self.spinner_rotation(), i18n.tr("gallery-loading")),
            Phase::Failed(err) => StatusPanel::new(StatusKind::Error)
                .title(i18n.tr("gallery-error-title"))
                .message(i18n.tr(err.i18n_key()))
                .details(format!(
                    "{}\n{}",
                    i18n.tr_with_args("gallery-error-details", &[("source", self.source.describe().as_str())]),
                    err
                ))
                .action(i18n.tr("gallery-retry"), Message::Refresh)
                .view(),
            Phase::Ready if panels.empty => StatusPanel::new(StatusKind::Empty)
                .title(i18n.tr("gallery-empty"))
                .message(i18n.tr_with_args("gallery-empty-hint", &[("manifest", env.manifest_name)]))
                .view(),
            Phase::Ready => grid::view(&self.cards, move |index| self.card_progress(index), i18n),
        };

        let base = column![self.view_header(i18n, panels), body]
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .push(scroll_lock(base, self.lightbox.is_open()))
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(index) = self.lightbox.current_index() {
            if let Some(card) = self.cards.get(index) {
                layers = layers.push(lightbox::view(
                    LightboxView {
                        card,
                        position: index + 1,
                        total: self.cards.len(),
                        navigation: self.navigation(),
                    },
                    i18n,
                ));
            }
        }

        layers.into()
    }

    fn view_header<'a>(&'a self, i18n: &I18n, panels: Panels) -> Element<'a, Message> {
        let title = text(i18n.tr("window-title")).size(typography::TITLE_MD);

        let stats: Element<'a, Message> = if panels.stats {
            text(self.stats_label(i18n))
                .size(typography::CAPTION)
                .style(|theme: &iced::Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                })
                .into()
        } else {
            Space::new().into()
        };

        let refresh = button(text(i18n.tr("gallery-refresh")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .on_press_maybe((self.phase != Phase::Loading).then_some(Message::Refresh))
            .style(styles::button::primary);

        container(
            row![title, stats, Space::new().width(Length::Fill), refresh]
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center),
        )
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
    }
}

/// Maps a key to a lightbox action.
#[must_use]
pub fn lightbox_key_for(key: &keyboard::Key) -> Option<LightboxKey> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(LightboxKey::Previous),
        keyboard::Key::Named(Named::ArrowRight) => Some(LightboxKey::Next),
        keyboard::Key::Named(Named::Escape) => Some(LightboxKey::Close),
        _ => None,
    }
}

fn lightbox_key(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            lightbox_key_for(&key).map(Message::Key)
        }
        _ => None,
    }
}

/// Interval of the optional auto-refresh timer.
pub fn auto_refresh(interval: Option<Duration>) -> Subscription<Message> {
    match interval {
        Some(interval) => time::every(interval).map(|_| Message::Refresh),
        None => Subscription::none(),
    }
}

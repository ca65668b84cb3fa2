// SPDX-License-Identifier: MPL-2.0
//! Ready-made containers: [`MessageStack`], [`PostView`] and [`Toast`].
//!
//! Each container pairs a [`PostManager`] with the [`Surface`] it presents
//! on and follows the usual iced split: feed it [`Input`] through `update`,
//! render it with `view` and keep it ticking with `subscription`.

use super::card;
use super::design_tokens::spacing;
use super::item::{Content, PostItem};
use super::message::Message;
use super::poster::Poster;
use super::surface::Surface;
use crate::config::{PostConfig, DEFAULT_MESSAGE_DISMISS, TICK_INTERVAL};
use crate::domain::{ItemId, Order, PostAnimation, Postable};
use crate::error::Result;
use crate::post::{Clock, PanPhase, PostManager, PostOutcome, PostRequest, SystemClock};
use iced::widget::{mouse_area, text, Column, Container};
use iced::{alignment, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Input accepted by every container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Event-loop tick: advances animations and fires dismiss timers.
    Tick(Instant),
    /// A tap (click release) on a card.
    Tapped(ItemId),
    /// A pan phase on a card, e.g. translated from touch events.
    Panned(ItemId, PanPhase),
}

/// A manager bound to its surface.
#[derive(Debug)]
struct Board {
    manager: PostManager<PostItem>,
    surface: Surface,
}

impl Board {
    fn new(config: &PostConfig, clock: impl Clock + 'static) -> Self {
        Self {
            manager: PostManager::with_clock(config, clock),
            surface: Surface::new(config.order),
        }
    }

    fn post(&mut self, request: PostRequest<PostItem>) -> Result<PostOutcome> {
        Ok(self.manager.post(&mut self.surface, request)?)
    }

    fn update(&mut self, input: Input) {
        match input {
            Input::Tick(now) => {
                self.surface.advance(now);
                self.manager.tick(&mut self.surface);
            }
            Input::Tapped(id) => self.manager.handle_tap(&mut self.surface, id),
            Input::Panned(id, phase) => self.manager.handle_pan(&mut self.surface, id, phase),
        }
    }

    fn remove(&mut self, id: ItemId) {
        self.manager.remove_request(&mut self.surface, id);
    }

    fn remove_current(&mut self) {
        self.manager.remove_current(&mut self.surface);
    }

    fn invalidate(&mut self) {
        self.manager.invalidate(&mut self.surface);
        self.surface.clear();
    }

    fn is_busy(&self) -> bool {
        self.manager.is_active() || self.surface.is_animating()
    }

    fn subscription(&self) -> Subscription<Input> {
        if self.is_busy() {
            iced::time::every(TICK_INTERVAL).map(Input::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Input> {
        let gestures = self.manager.gestures();
        let cards: Vec<Element<'_, Input>> = self
            .surface
            .items()
            .map(|(shown, visibility)| {
                let id = shown.id();
                // The manager's copy carries edits made through `item_mut`.
                let item = self.manager.item(id).unwrap_or(shown);
                let card = card::view(item, visibility * card::pan_fade(gestures.offset(id)));
                if gestures.has_tap_to_remove(id) {
                    mouse_area(card).on_release(Input::Tapped(id)).into()
                } else {
                    card
                }
            })
            .collect();

        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        let vertical = match self.surface.order() {
            Order::TopToBottom => alignment::Vertical::Top,
            Order::BottomToTop => alignment::Vertical::Bottom,
        };

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Empty element that takes no space.
fn nothing<'a>() -> Element<'a, Input> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

// ============================================================================
// MessageStack
// ============================================================================

/// A stack showing every posted item at once.
#[derive(Debug)]
pub struct MessageStack {
    board: Board,
}

impl MessageStack {
    /// Creates a stack from `config`, forcing parallel presentation.
    #[must_use]
    pub fn new(config: &PostConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &PostConfig, clock: impl Clock + 'static) -> Self {
        let config = PostConfig {
            serial: false,
            ..config.clone()
        };
        Self {
            board: Board::new(&config, clock),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.board.surface
    }

    pub fn update(&mut self, input: Input) {
        self.board.update(input);
    }

    pub fn view(&self) -> Element<'_, Input> {
        self.board.view()
    }

    pub fn subscription(&self) -> Subscription<Input> {
        self.board.subscription()
    }

    /// Removes `id` with its own remove animation.
    pub fn remove(&mut self, id: ItemId) {
        self.board.remove(id);
    }

    pub fn remove_current(&mut self) {
        self.board.remove_current();
    }

    pub fn invalidate(&mut self) {
        self.board.invalidate();
    }
}

impl Poster for MessageStack {
    fn post_manager(&self) -> &PostManager<PostItem> {
        &self.board.manager
    }

    fn post_manager_mut(&mut self) -> &mut PostManager<PostItem> {
        &mut self.board.manager
    }

    fn post(&mut self, request: PostRequest<PostItem>) -> Result<PostOutcome> {
        self.board.post(request)
    }
}

// ============================================================================
// PostView
// ============================================================================

/// A view showing one item at a time, the rest waiting their turn.
///
/// Pan-to-remove is on by default. With `hide_when_empty` set the view
/// renders nothing while idle.
#[derive(Debug)]
pub struct PostView {
    board: Board,
    hide_when_empty: bool,
}

impl PostView {
    /// Creates a view from `config`, forcing serial presentation and
    /// pan-to-remove.
    #[must_use]
    pub fn new(config: &PostConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &PostConfig, clock: impl Clock + 'static) -> Self {
        let config = PostConfig {
            serial: true,
            pan_to_remove: true,
            ..config.clone()
        };
        Self {
            board: Board::new(&config, clock),
            hide_when_empty: true,
        }
    }

    #[must_use]
    pub fn hide_when_empty(mut self, hide: bool) -> Self {
        self.hide_when_empty = hide;
        self
    }

    pub fn set_hide_when_empty(&mut self, hide: bool) {
        self.hide_when_empty = hide;
    }

    /// Whether the view currently renders anything.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.hide_when_empty || self.board.is_busy()
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.board.surface
    }

    pub fn update(&mut self, input: Input) {
        self.board.update(input);
    }

    pub fn view(&self) -> Element<'_, Input> {
        if self.is_visible() {
            self.board.view()
        } else {
            nothing()
        }
    }

    pub fn subscription(&self) -> Subscription<Input> {
        self.board.subscription()
    }

    pub fn remove(&mut self, id: ItemId) {
        self.board.remove(id);
    }

    pub fn remove_current(&mut self) {
        self.board.remove_current();
    }

    pub fn invalidate(&mut self) {
        self.board.invalidate();
    }
}

impl Poster for PostView {
    fn post_manager(&self) -> &PostManager<PostItem> {
        &self.board.manager
    }

    fn post_manager_mut(&mut self) -> &mut PostManager<PostItem> {
        &mut self.board.manager
    }

    fn post(&mut self, request: PostRequest<PostItem>) -> Result<PostOutcome> {
        self.board.post(request)
    }
}

// ============================================================================
// Toast
// ============================================================================

/// A short text line popping up from the bottom, one at a time.
#[derive(Debug)]
pub struct Toast {
    view: PostView,
}

impl Toast {
    #[must_use]
    pub fn new(config: &PostConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &PostConfig, clock: impl Clock + 'static) -> Self {
        let config = PostConfig {
            order: Order::BottomToTop,
            ..config.clone()
        };
        Self {
            view: PostView::with_clock(&config, clock),
        }
    }

    /// Whether `line` is currently shown.
    #[must_use]
    pub fn is_showing(&self, line: &str) -> bool {
        self.view
            .post_manager()
            .current()
            .any(|request| text_of(request.item()) == Some(line))
    }

    /// Posts `line` with the default message dismiss delay.
    ///
    /// # Errors
    ///
    /// See [`Poster::post`].
    pub fn post_text(&mut self, line: impl Into<String>) -> Result<ItemId> {
        self.post_text_with(line, Some(DEFAULT_MESSAGE_DISMISS), PostAnimation::default())
    }

    /// # Errors
    ///
    /// See [`Poster::post`].
    pub fn post_text_with(
        &mut self,
        line: impl Into<String>,
        dismiss_after: Option<Duration>,
        animation: PostAnimation,
    ) -> Result<ItemId> {
        self.post_item(PostItem::text(line), dismiss_after, animation)
    }

    /// Posts `line` unless it is already shown. Returns `None` when skipped.
    ///
    /// # Errors
    ///
    /// See [`Poster::post`].
    pub fn post_if_not_showing(&mut self, line: &str) -> Result<Option<ItemId>> {
        if self.is_showing(line) {
            log::debug!("toast {line:?} is already showing");
            return Ok(None);
        }
        self.post_text(line).map(Some)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.view.is_visible()
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        self.view.surface()
    }

    pub fn update(&mut self, input: Input) {
        self.view.update(input);
    }

    pub fn view(&self) -> Element<'_, Input> {
        self.view.view()
    }

    pub fn subscription(&self) -> Subscription<Input> {
        self.view.subscription()
    }

    pub fn remove_current(&mut self) {
        self.view.remove_current();
    }

    pub fn invalidate(&mut self) {
        self.view.invalidate();
    }
}

impl Poster for Toast {
    fn post_manager(&self) -> &PostManager<PostItem> {
        self.view.post_manager()
    }

    fn post_manager_mut(&mut self) -> &mut PostManager<PostItem> {
        self.view.post_manager_mut()
    }

    fn post(&mut self, request: PostRequest<PostItem>) -> Result<PostOutcome> {
        self.view.post(request)
    }
}

/// The visible line of a toast item: its text, or a message title.
fn text_of(item: &PostItem) -> Option<&str> {
    match &item.content {
        Content::Text(line) => Some(line),
        Content::Message(Message { title, .. }) => Some(title),
        Content::Badge(_) => None,
    }
}

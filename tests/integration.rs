// SPDX-License-Identifier: MPL-2.0
use iced_post::config::{self, PostConfig};
use iced_post::domain::{ItemId, Order, PostAnimation, Postable};
use iced_post::post::{
    Clock, Completion, ItemState, ManualClock, PanPhase, PostEvent, PostManager, PostOutcome,
    PostRequest, Presenter,
};
use iced_post::ui::{Input, Message, PostItem, PostView, Poster, Toast};
use std::time::Duration;
use tempfile::tempdir;
use tokio::sync::mpsc::UnboundedReceiver;

/// Presents instantly and remembers what it was asked to do.
#[derive(Default)]
struct Screen {
    shown: Vec<ItemId>,
    log: Vec<String>,
}

impl Presenter<ItemId> for Screen {
    fn post(&mut self, item: &ItemId, animated: bool, done: Completion) {
        self.shown.push(*item);
        self.log.push(format!("post {item} animated={animated}"));
        done.finish();
    }

    fn remove(&mut self, item: &ItemId, animated: bool, done: Completion) {
        self.shown.retain(|shown| shown != item);
        self.log.push(format!("remove {item} animated={animated}"));
        done.finish();
    }
}

fn drain(events: &mut UnboundedReceiver<PostEvent>) -> Vec<PostEvent> {
    std::iter::from_fn(|| events.try_recv().ok()).collect()
}

#[test]
fn queued_item_follows_a_timed_out_one_without_intervention() {
    let clock = ManualClock::new();
    let mut screen = Screen::default();
    let mut manager = PostManager::with_clock(&PostConfig::default(), clock.clone());
    let mut events = manager.subscribe();
    let a = ItemId::new();
    let b = ItemId::new();

    manager
        .post(&mut screen, PostRequest::new(a).dismiss_after_secs(3.0))
        .expect("post A");
    assert_eq!(
        manager.post(&mut screen, PostRequest::new(b)),
        Ok(PostOutcome::Queued)
    );
    assert_eq!(screen.shown, vec![a]);

    clock.advance(Duration::from_secs(3));
    manager.tick(&mut screen);

    assert_eq!(screen.shown, vec![b]);
    assert_eq!(manager.state(b), Some(ItemState::Active));
    assert_eq!(
        drain(&mut events),
        vec![
            PostEvent::WillPost(a),
            PostEvent::DidPost(a),
            PostEvent::WillRemove(a),
            PostEvent::DidRemove(a),
            PostEvent::WillPost(b),
            PostEvent::DidPost(b),
        ]
    );
}

#[test]
fn remove_current_removes_an_untimed_item_once() {
    let mut screen = Screen::default();
    let mut manager = PostManager::new(&PostConfig::default());
    let mut events = manager.subscribe();
    let a = ItemId::new();
    manager.post(&mut screen, PostRequest::new(a)).expect("post A");

    manager.remove_current(&mut screen);
    manager.remove_current(&mut screen);

    let did_remove = drain(&mut events)
        .into_iter()
        .filter(|event| *event == PostEvent::DidRemove(a))
        .count();
    assert_eq!(did_remove, 1);
    assert!(!manager.is_active());
}

#[test]
fn dragging_past_half_the_height_dismisses() {
    let config = PostConfig {
        pan_to_remove: true,
        order: Order::TopToBottom,
        ..PostConfig::default()
    };
    let mut screen = Screen::default();
    let mut manager = PostManager::new(&config);
    let a = ItemId::new();
    manager.post(&mut screen, PostRequest::new(a)).expect("post A");

    manager.handle_pan(&mut screen, a, PanPhase::Began);
    manager.handle_pan(&mut screen, a, PanPhase::Changed { translation: -31.0 });
    manager.handle_pan(&mut screen, a, PanPhase::Ended { extent: 60.0 });

    assert_eq!(manager.state(a), None);
    assert!(screen.shown.is_empty());
    assert_eq!(
        screen.log.iter().filter(|l| l.starts_with("remove")).count(),
        1
    );
}

#[test]
fn switching_to_parallel_posts_the_queue_in_order() {
    let mut screen = Screen::default();
    let mut manager = PostManager::new(&PostConfig::default());
    let ids = [ItemId::new(), ItemId::new(), ItemId::new()];
    for id in ids {
        manager.post(&mut screen, PostRequest::new(id)).expect("post");
    }
    assert_eq!(screen.shown, vec![ids[0]]);

    manager.set_serial_queue(&mut screen, false);

    assert_eq!(screen.shown, ids.to_vec());
    assert_eq!(manager.queued().count(), 0);
}

#[test]
fn animation_flags_reach_the_presenter() {
    let mut screen = Screen::default();
    let mut manager = PostManager::new(&PostConfig::default());
    let a = ItemId::new();

    manager
        .post(
            &mut screen,
            PostRequest::new(a).animation(PostAnimation::ON_REMOVE),
        )
        .expect("post A");
    manager.remove_request(&mut screen, a);

    assert_eq!(
        screen.log,
        vec![
            format!("post {a} animated=false"),
            format!("remove {a} animated=true"),
        ]
    );
}

#[tokio::test]
async fn events_can_be_awaited() {
    let mut screen = Screen::default();
    let mut manager = PostManager::new(&PostConfig::default());
    let mut events = manager.subscribe();
    let a = ItemId::new();

    manager.post(&mut screen, PostRequest::new(a)).expect("post A");
    drop(manager);

    assert_eq!(events.recv().await, Some(PostEvent::WillPost(a)));
    assert_eq!(events.recv().await, Some(PostEvent::DidPost(a)));
    assert_eq!(events.recv().await, None);
}

#[test]
fn config_file_drives_the_containers() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("post.toml");

    let saved = PostConfig {
        dismiss_after_secs: Some(1.5),
        animation: PostAnimation::NONE,
        tap_to_remove: true,
        ..PostConfig::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.dismiss_after(), Some(Duration::from_millis(1500)));

    let mut view = PostView::new(&loaded);
    let item = PostItem::message(Message::new("Saved"));
    let id = item.id();
    let outcome = view
        .post(PostRequest::with_config(item, &loaded))
        .expect("post message");
    assert_eq!(outcome, PostOutcome::Presented);
    assert_eq!(view.post_manager().state(id), Some(ItemState::Active));

    view.update(Input::Tapped(id));
    assert_eq!(view.post_manager().state(id), None);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn toast_cycle_through_ticks() {
    let clock = ManualClock::new();
    let mut toast = Toast::with_clock(&PostConfig::default(), clock.clone());
    let first = toast.post_text_with("one", Some(Duration::from_secs(1)), PostAnimation::NONE);
    let second = toast.post_text_with("two", Some(Duration::from_secs(1)), PostAnimation::NONE);
    let (first, second) = (first.expect("first"), second.expect("second"));

    assert!(toast.is_showing("one"));
    assert!(!toast.is_showing("two"));

    clock.advance(Duration::from_secs(1));
    toast.update(Input::Tick(clock.now()));
    assert_eq!(toast.post_manager().state(first), None);
    assert!(toast.is_showing("two"));

    clock.advance(Duration::from_secs(1));
    toast.update(Input::Tick(clock.now()));
    assert_eq!(toast.post_manager().state(second), None);
    assert!(!toast.is_visible());
}

// Host-side tests for modal open/close sequencing and project details.

use std::time::Duration;

use echoes_core::*;

fn details(images: &str, link: Option<&str>) -> ProjectDetails {
    ProjectDetails {
        title: Some("Hollow".into()),
        description: None,
        tags: Some("Rust, WASM ,, ".into()),
        images: Some(images.into()),
        link: link.map(Into::into),
        repo: None,
    }
}

fn scheduled(fx: &Effects) -> Vec<(TimerId, Duration)> {
    fx.commands()
        .iter()
        .filter_map(|c| match c {
            Command::ScheduleTimer { id, delay } => Some((*id, *delay)),
            _ => None,
        })
        .collect()
}

fn hides(fx: &Effects) -> usize {
    fx.commands()
        .iter()
        .filter(|c| **c == Command::HideLoading)
        .count()
}

/// Open the modal and deliver the animation frame, returning the effects so far.
fn open_to_frame(modal: &mut ProjectModal, d: &ProjectDetails, first_ready: bool) -> Effects {
    let mut fx = Effects::new();
    modal.open(d, &mut fx);
    let first = modal.first_slide_media(first_ready, first_ready);
    modal.frame_shown(first, &mut fx);
    fx
}

#[test]
fn open_shows_loading_then_requests_frame() {
    let mut modal = ProjectModal::default();
    let mut fx = Effects::new();
    modal.open(&details("a.png", None), &mut fx);
    assert_eq!(
        fx.commands(),
        &[
            Command::LockScroll,
            Command::ShowLoading,
            Command::RevealModal,
            Command::RequestFrame,
        ]
    );
    assert!(!modal.is_hidden());
    assert_eq!(modal.open_sequence().phase(), OpenPhase::Loading);
}

#[test]
fn buffered_video_settles_after_settle_delay() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("thumb.png", Some("clip.mp4")), true);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::ReadyVideoBuffered);
    assert!(fx.commands().contains(&Command::MarkShown));
    let timers = scheduled(&fx);
    assert_eq!(timers.len(), 1);
    assert_eq!(timers[0].1, Duration::from_millis(600));

    fx.clear();
    modal.on_timer(timers[0].0, &mut fx);
    // activation precedes the hide
    let cmds = fx.commands();
    let show_thumb = cmds
        .iter()
        .position(|c| {
            *c == Command::SetThumbnailVisible {
                index: 0,
                visible: true,
            }
        })
        .expect("video activated");
    let hide = cmds
        .iter()
        .position(|c| *c == Command::HideLoading)
        .expect("loading hidden");
    assert!(show_thumb < hide);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::Settled);
}

#[test]
fn pending_video_waits_for_readiness_then_grace() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("", Some("clip.mp4")), false);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::ReadyVideoPending);
    assert!(fx.commands().contains(&Command::WatchFirstSlideMedia));
    let fallback = scheduled(&fx)[0];
    assert_eq!(fallback.1, Duration::from_millis(3000));

    fx.clear();
    modal.media_ready(&mut fx);
    assert!(fx.commands().contains(&Command::CancelTimer { id: fallback.0 }));
    let grace = scheduled(&fx)[0];
    assert_eq!(grace.1, Duration::from_millis(300));

    // a second readiness event is ignored
    fx.clear();
    modal.media_ready(&mut fx);
    assert!(fx.is_empty());

    modal.on_timer(grace.0, &mut fx);
    assert!(fx.commands().contains(&Command::PlayVideo {
        index: 0,
        muted: true
    }));
    assert_eq!(hides(&fx), 1);

    // the cancelled fallback never hides twice
    fx.clear();
    modal.on_timer(fallback.0, &mut fx);
    assert!(fx.is_empty());
}

#[test]
fn video_that_never_loads_is_revealed_by_fallback() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("thumb.png", Some("clip.mp4")), false);
    let (fallback, delay) = scheduled(&fx)[0];
    assert!(delay <= Duration::from_millis(3000));

    fx.clear();
    modal.on_timer(fallback, &mut fx);
    assert_eq!(hides(&fx), 1);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::Settled);

    // readiness arriving afterwards changes nothing
    fx.clear();
    modal.media_ready(&mut fx);
    assert!(fx.is_empty());
}

#[test]
fn pending_image_uses_same_pattern() {
    let mut modal = ProjectModal::default();
    let fx = open_to_frame(&mut modal, &details("a.png, b.png", None), false);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::ReadyImagePending);
    assert!(fx.commands().contains(&Command::WatchFirstSlideMedia));

    let mut modal = ProjectModal::default();
    let fx = open_to_frame(&mut modal, &details("a.png", None), true);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::ReadyImageLoaded);
    assert_eq!(scheduled(&fx)[0].1, Duration::from_millis(600));
}

#[test]
fn placeholder_only_hides_loading() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("", None), false);
    assert_eq!(modal.open_sequence().phase(), OpenPhase::ReadyNoMedia);
    let (settle, delay) = scheduled(&fx)[0];
    assert_eq!(delay, Duration::from_millis(600));

    fx.clear();
    modal.on_timer(settle, &mut fx);
    assert_eq!(fx.commands(), &[Command::HideLoading]);
}

#[test]
fn close_hides_after_transition() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("a.png", None), true);
    fx.clear();

    modal.close(&mut fx);
    assert!(fx.commands().contains(&Command::MarkHidden));
    let close = scheduled(&fx)
        .into_iter()
        .find(|(_, d)| *d == Duration::from_millis(300))
        .expect("close timer");
    assert!(!modal.is_hidden());

    fx.clear();
    modal.on_timer(close.0, &mut fx);
    assert_eq!(
        fx.commands(),
        &[
            Command::StopAllVideos,
            Command::HideModal,
            Command::RestoreScroll
        ]
    );
    assert!(modal.is_hidden());
}

#[test]
fn close_cancels_open_wait_and_fade() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("thumb.png", Some("clip.mp4")), true);
    let settle = scheduled(&fx)[0].0;
    fx.clear();
    modal.on_timer(settle, &mut fx);
    let fade = scheduled(&fx)[0].0;

    fx.clear();
    modal.close(&mut fx);
    assert!(fx.commands().contains(&Command::CancelTimer { id: fade }));

    fx.clear();
    modal.on_timer(fade, &mut fx);
    assert!(fx.is_empty());
}

#[test]
fn reopening_during_close_keeps_modal_visible() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("a.png", None), true);
    modal.close(&mut fx);
    let close = scheduled(&fx).last().copied().expect("close timer").0;

    fx.clear();
    modal.open(&details("b.png", None), &mut fx);
    assert!(fx.commands().contains(&Command::CancelTimer { id: close }));
    fx.clear();
    modal.on_timer(close, &mut fx);
    assert!(fx.is_empty());
    assert!(!modal.is_hidden());
}

#[test]
fn replacing_a_playing_carousel_stops_its_video() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("", Some("clip.mp4")), true);
    let settle = scheduled(&fx)[0].0;
    fx.clear();
    modal.on_timer(settle, &mut fx);
    assert!(fx
        .commands()
        .contains(&Command::PlayVideo { index: 0, muted: true }));

    // reopen while the close transition is still running
    fx.clear();
    modal.close(&mut fx);
    modal.open(&details("b.png", None), &mut fx);
    assert!(fx.commands().contains(&Command::StopVideo { index: 0 }));
    assert!(!fx.commands().contains(&Command::StopAllVideos));

    // open straight over a visible video preview
    let mut fx = open_to_frame(&mut modal, &details("", Some("clip.mp4")), true);
    let settle = scheduled(&fx)[0].0;
    modal.on_timer(settle, &mut fx);
    fx.clear();
    modal.open(&details("c.png", None), &mut fx);
    assert_eq!(fx.commands()[0], Command::StopVideo { index: 0 });
}

#[test]
fn closing_while_loading_still_hides_indicator() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("", Some("clip.mp4")), false);
    let fallback = scheduled(&fx)[0].0;

    modal.close(&mut fx);
    assert!(fx.commands().contains(&Command::CancelTimer { id: fallback }));
    let close = scheduled(&fx).last().copied().expect("close timer").0;
    modal.on_timer(close, &mut fx);
    modal.on_timer(fallback, &mut fx);
    modal.media_ready(&mut fx);
    assert_eq!(hides(&fx), 1);
    assert!(modal.is_hidden());
}

#[test]
fn closing_after_settle_does_not_hide_twice() {
    let mut modal = ProjectModal::default();
    let mut fx = open_to_frame(&mut modal, &details("a.png", None), true);
    let settle = scheduled(&fx)[0].0;
    modal.on_timer(settle, &mut fx);
    assert_eq!(hides(&fx), 1);

    modal.close(&mut fx);
    assert_eq!(hides(&fx), 1);
}

#[test]
fn keys_only_work_while_visible() {
    let mut modal = ProjectModal::default();
    let mut fx = Effects::new();
    assert!(!modal.handle_key("ArrowRight", &mut fx));

    let mut fx = open_to_frame(&mut modal, &details("a, b, c", None), true);
    assert!(modal.handle_key("ArrowLeft", &mut fx));
    assert_eq!(modal.carousel().current(), Some(2));
    assert!(modal.handle_key("ArrowRight", &mut fx));
    assert_eq!(modal.carousel().current(), Some(0));
    assert!(!modal.handle_key("x", &mut fx));
    assert!(modal.handle_key("Escape", &mut fx));
    assert!(fx.commands().contains(&Command::MarkHidden));
}

#[test]
fn action_link_prefers_repository() {
    let mut d = details("", Some("clip.mp4"));
    d.repo = Some("https://github.com/x/y".into());
    assert_eq!(
        d.action_link(),
        Some(ActionLink {
            href: "https://github.com/x/y".into(),
            new_tab: true
        })
    );

    d.repo = Some("#".into());
    assert_eq!(
        d.action_link(),
        Some(ActionLink {
            href: "clip.mp4".into(),
            new_tab: false
        })
    );

    d.link = Some("#".into());
    assert_eq!(d.action_link(), None);
}

#[test]
fn details_fall_back_to_defaults() {
    let d = ProjectDetails::from_attributes(|name| match name {
        "data-tags" => Some("Rust, WASM ,, ".to_string()),
        _ => None,
    });
    assert_eq!(d.display_title(), "Project");
    assert_eq!(d.display_description(), "Details coming soon.");
    assert_eq!(d.tag_list().as_slice(), ["Rust", "WASM"]);
    assert_eq!(d.build_carousel().slides()[0].kind, SlideKind::Placeholder);
}

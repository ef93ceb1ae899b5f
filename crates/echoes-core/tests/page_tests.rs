// Host-side tests for the page effects and the shared video cache.

use std::cell::Cell;
use std::rc::Rc;

use echoes_core::constants::*;
use echoes_core::page::*;
use echoes_core::sprites::*;
use echoes_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn video_cache_reuses_handle_for_same_url() {
    let built = Cell::new(0);
    let mut cache: VideoCache<Rc<String>> = VideoCache::new();
    let make = |url: &str| {
        built.set(built.get() + 1);
        Rc::new(url.to_string())
    };
    let a = cache.get_or_insert_with("clip.mp4", make);
    let b = cache.get_or_insert_with("clip.mp4", make);
    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(built.get(), 1);

    let c = cache.get_or_insert_with("other.mp4", make);
    assert!(!Rc::ptr_eq(&a, &c));
    assert_eq!(cache.len(), 2);
    assert!(cache.contains("clip.mp4"));
}

#[test]
fn video_links_are_matched_case_insensitively() {
    assert!(is_video_link("clip.mp4"));
    assert!(is_video_link(" media/CLIP.MP4 "));
    assert!(!is_video_link("clip.webm"));
    assert!(!is_video_link(""));
    assert!(!is_video_link("#"));
}

#[test]
fn particles_stay_near_the_canvas() {
    let mut field = ParticleField::new(320.0, 240.0, 7);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for _ in 0..2000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.pos.x >= -PARTICLE_EDGE_MARGIN - 1.0);
        assert!(p.pos.x <= 320.0 + PARTICLE_EDGE_MARGIN + 1.0);
        assert!(p.pos.y <= 240.0 + PARTICLE_EDGE_MARGIN + 1.0);
        assert!(p.size >= 1.0 && p.size <= 3.0);
    }
}

#[test]
fn particle_opacity_bounces_between_limits() {
    let mut field = ParticleField::new(1000.0, 100_000.0, 3);
    for _ in 0..500 {
        field.step();
        for p in field.particles() {
            assert!(p.opacity > 0.0 && p.opacity < 0.8, "opacity {}", p.opacity);
        }
    }
}

#[test]
fn particle_fields_are_deterministic_per_seed() {
    let a = ParticleField::new(100.0, 100.0, 42);
    let b = ParticleField::new(100.0, 100.0, 42);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.size, pb.size);
    }
}

#[test]
fn cursor_dot_eases_toward_pointer() {
    let mut cursor = CursorFollower::default();
    cursor.set_target(100.0, 50.0);
    let first = cursor.step();
    assert!((first.x - 30.0).abs() < 1e-4);
    assert!((first.y - 15.0).abs() < 1e-4);
    for _ in 0..100 {
        cursor.step();
    }
    assert!((cursor.dot.x - 100.0).abs() < 1e-3);
}

#[test]
fn filter_staggers_matching_cards() {
    let cats = vec![
        Some("games".to_string()),
        Some("tools".to_string()),
        None,
        Some("games".to_string()),
    ];
    assert_eq!(
        filter_cards("games", &cats),
        vec![
            CardVisibility::Show { delay_ms: 0 },
            CardVisibility::Hide,
            CardVisibility::Hide,
            CardVisibility::Show { delay_ms: 150 },
        ]
    );
    let all = filter_cards("all", &cats);
    assert_eq!(all[2], CardVisibility::Show { delay_ms: 100 });
}

#[test]
fn active_section_uses_offset_window() {
    let sections = vec![
        SectionBounds {
            id: "hero".into(),
            top: 0.0,
            height: 600.0,
        },
        SectionBounds {
            id: "projects".into(),
            top: 600.0,
            height: 800.0,
        },
    ];
    assert_eq!(active_section(100.0, &sections), Some("hero"));
    assert_eq!(active_section(451.0, &sections), Some("projects"));
    assert_eq!(active_section(2000.0, &sections), None);
}

#[test]
fn parallax_scales_scroll() {
    assert!((parallax_offset(100.0) - 30.0).abs() < 1e-9);
    assert_eq!(parallax_offset(0.0), 0.0);
}

#[test]
fn subtitles_rotate_and_wrap() {
    let mut r = TextRotator::new(SUBTITLE_TEXTS);
    assert_eq!(r.current(), Some(SUBTITLE_TEXTS[0]));
    assert_eq!(r.advance(), Some(SUBTITLE_TEXTS[1]));
    assert_eq!(r.advance(), Some(SUBTITLE_TEXTS[2]));
    assert_eq!(r.advance(), Some(SUBTITLE_TEXTS[0]));

    let mut empty = TextRotator::new(Vec::<String>::new());
    assert_eq!(empty.advance(), None);
}

#[test]
fn preload_plan_covers_first_three_projects() {
    let projects = vec![
        (Some("a.mp4".to_string()), Some("a1.png, a2.png".to_string())),
        (Some("#".to_string()), Some("b1.png".to_string())),
        (None, None),
        (Some("d.mp4".to_string()), Some("d1.png".to_string())),
    ];
    let plan = preload_plan(&projects);
    assert_eq!(
        plan,
        vec![
            PreloadItem::Video {
                project: 0,
                src: "a.mp4".into()
            },
            PreloadItem::Image {
                project: 0,
                src: "a1.png".into()
            },
            PreloadItem::Image {
                project: 0,
                src: "a2.png".into()
            },
            PreloadItem::Image {
                project: 1,
                src: "b1.png".into()
            },
        ]
    );
}

#[test]
fn essence_burst_fades_out() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut sprites = essence_burst(BURST_SPRITES, &mut rng);
    assert_eq!(sprites.len(), BURST_SPRITES);
    let mut frames = 0;
    while sprites.iter_mut().map(|s| s.step()).fold(false, |a, b| a | b) {
        frames += 1;
        assert!(frames < 100);
    }
    assert!((45..=55).contains(&frames), "frames {}", frames);
    // evenly spread: first sprite heads along +x
    assert!(sprites[0].offset.x > 0.0);
    assert!(sprites[0].offset.y.abs() < 1e-3);
}

#[test]
fn ripple_and_motes_finish() {
    let (size0, alpha0) = ripple_frame(0.0).expect("running");
    assert_eq!(size0, 0.0);
    assert_eq!(alpha0, 1.0);
    assert!(ripple_frame(RIPPLE_DURATION_MS).is_none());

    let mut rng = StdRng::seed_from_u64(9);
    let mote = DreamMote::spawn(&mut rng);
    assert!(mote.duration_ms >= 3000.0 && mote.duration_ms < 6000.0);
    let (offset, _) = mote.sample(mote.duration_ms * 0.999).expect("running");
    assert!(offset.y < -700.0);
    assert!(mote.sample(mote.duration_ms).is_none());
}

use folio_core::{
    fragment_target, grid_key_action, AnchorTarget, BehaviorConfig, Breakpoint, GridAction,
    HeaderScroller, HeaderVisibility, LazyImage, PdfLabel, TapGesture, TapOutcome,
};

#[test]
fn configured_thresholds_drive_header_and_taps() {
    let config = BehaviorConfig::from_json(
        r#"{"mobileMaxWidth": 600, "headerHideAfter": 40, "scrollSlop": 4}"#,
    )
    .unwrap();

    let mut scroller = HeaderScroller::from_config(&config);
    assert_eq!(scroller.on_scroll(50.0, 700.0), HeaderVisibility::Shown);
    assert_eq!(scroller.on_scroll(60.0, 600.0), HeaderVisibility::Hidden);

    let mut gesture = TapGesture::from_config(&config);
    gesture.start(100.0, 0.0);
    gesture.moved(105.0);
    assert_eq!(gesture.end(100.0), TapOutcome::Scroll);
}

#[test]
fn long_scroll_sequence_on_wide_viewport_never_hides() {
    let mut scroller = HeaderScroller::from_config(&BehaviorConfig::default());
    let mut offset = 0.0;
    for step in 0..200 {
        offset += if step % 7 == 0 { -35.0 } else { 60.0 };
        assert_eq!(scroller.on_scroll(offset, 769.0), HeaderVisibility::Shown);
    }
}

#[test]
fn card_touch_sequences() {
    let mut gesture = TapGesture::default();
    gesture.start(100.0, 0.0);
    assert!(gesture.end(200.0).activates());

    gesture.start(100.0, 0.0);
    gesture.moved(130.0);
    assert!(!gesture.end(200.0).activates());
}

#[test]
fn grid_walk_from_second_of_five() {
    let mut focused = 1;
    if let GridAction::Focus(next) = grid_key_action("ArrowRight", focused, 5) {
        focused = next;
    }
    assert_eq!(focused, 2);
    assert_eq!(grid_key_action("ArrowRight", 4, 5), GridAction::Stay);
}

#[test]
fn anchors_and_breakpoints() {
    assert_eq!(
        fragment_target("#section-2"),
        AnchorTarget::Id("section-2".to_string())
    );
    assert_eq!(fragment_target("#"), AnchorTarget::Empty);
    assert_eq!(Breakpoint::from_width(375.0), Breakpoint::Mobile);
    assert_eq!(Breakpoint::from_width(1440.0).as_str(), "desktop");
}

#[test]
fn lazy_and_pdf_state_only_move_forward() {
    let mut image = LazyImage {
        deferred_src: Some("/img/hero.jpg".to_string()),
        has_lazy_class: true,
    };
    assert_eq!(image.reveal().map(|update| update.src).as_deref(), Some("/img/hero.jpg"));
    assert!(image.reveal().is_none());

    let mut label = PdfLabel::new();
    assert_eq!(label.begin("Resume"), "Loading...");
    assert_eq!(label.restore().as_deref(), Some("Resume"));
}

use animkit_descriptor_core::{
    build_descriptor, parse_code, render_code, Easing, MotionParams, MotionValue, Preset, Repeat,
    Transition, TransitionKind,
};
use approx::assert_relative_eq;

fn params(duration: f64, delay: f64, easing: Easing) -> MotionParams {
    MotionParams::new(duration, delay, easing).unwrap()
}

#[test]
fn bounce_in_scenario_uses_spring() {
    let p = params(0.5, 0.0, Easing::EaseOut);
    let d = build_descriptor("bounceIn", &p);
    assert_eq!(d.transition.kind, Some(TransitionKind::Spring));
    assert_eq!(d.transition.bounce, Some(0.5));
    assert_eq!(d.transition.ease, Some(Easing::EaseOut));
    assert_ne!(d.transition, Transition::tween(&p));

    let code = render_code(&d);
    assert!(code.contains(
        r#"transition={{"duration":0.5,"delay":0,"ease":"easeOut","type":"spring","bounce":0.5}}"#
    ));
}

#[test]
fn no_override_means_exact_params() {
    let p = params(1.3, 0.4, Easing::EaseInOut);
    for preset in Preset::ALL {
        if preset.transition_override().is_some() {
            continue;
        }
        let t = build_descriptor(preset.key(), &p).transition;
        assert_eq!(t, Transition::tween(&p), "{}", preset.key());
    }
}

#[test]
fn snippet_round_trips_every_preset() {
    let p = params(0.7, 0.3, Easing::EaseIn);
    for preset in Preset::ALL {
        let d = build_descriptor(preset.key(), &p);
        let code = render_code(&d);
        let back = parse_code(&code).unwrap();
        assert_eq!(back, d, "{}", preset.key());
    }
}

#[test]
fn snippet_keeps_awkward_floats() {
    let p = params(0.1 + 0.2, 1.0 / 3.0, Easing::Linear);
    let d = build_descriptor("scaleIn", &p);
    let back = parse_code(&render_code(&d)).unwrap();
    let duration = back.transition.duration.unwrap();
    assert_eq!(duration, 0.1 + 0.2);
    assert_relative_eq!(back.transition.delay, 1.0 / 3.0);
}

#[test]
fn snippet_shape_matches_template() {
    let d = build_descriptor("fadeIn", &MotionParams::default());
    let code = render_code(&d);
    let lines: Vec<_> = code.lines().collect();
    assert_eq!(lines.first(), Some(&"<motion.div"));
    assert_eq!(lines[1], r#"  initial={{"opacity":0}}"#);
    assert_eq!(lines[2], r#"  animate={{"opacity":1}}"#);
    assert_eq!(
        lines[3],
        r#"  transition={{"duration":0.5,"delay":0,"ease":"easeOut"}}"#
    );
    assert_eq!(lines.last(), Some(&"</motion.div>"));
}

#[test]
fn continuous_presets_repeat_forever() {
    let p = MotionParams::default();
    for key in ["pulse", "rotate", "spinner"] {
        let d = build_descriptor(key, &p);
        assert_eq!(d.transition.repeat, Some(Repeat::Infinite), "{key}");
        assert!(render_code(&d).contains("Infinity"));
    }
}

#[test]
fn blur_in_carries_text_values() {
    let d = build_descriptor("blurIn", &MotionParams::default());
    assert_eq!(
        d.initial.get("filter"),
        Some(&MotionValue::Text("blur(10px)".into()))
    );
    let back = parse_code(&render_code(&d)).unwrap();
    assert_eq!(back.animate.get("filter"), d.animate.get("filter"));
}

#[test]
fn hand_written_snippet_with_bare_keys_parses() {
    let code = "<motion.div\n  initial={{ opacity: 0, x: -50 }}\n  animate={{ opacity: 1, x: 0 }}\n  transition={{ duration: 0.4, delay: 0, ease: \"linear\", repeat: 2 }}\n/>";
    let d = parse_code(code).unwrap();
    assert_eq!(d.initial.get("x"), Some(&MotionValue::Number(-50.0)));
    assert_eq!(d.transition.ease, Some(Easing::Linear));
    assert_eq!(d.transition.repeat, Some(Repeat::Count(2)));
    assert!(d.validate().is_ok());
}

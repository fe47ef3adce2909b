use std::fmt::Write;

/// Three-point oscillation `[rest, peak, rest]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swing {
    pub rest: f64,
    pub peak: f64,
}

impl Swing {
    pub const fn new(rest: f64, peak: f64) -> Self {
        Self { rest, peak }
    }
}

/// An infinitely repeating tween over opacity, scale and vertical position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopTween {
    pub name: &'static str,
    pub duration: f64,
    pub delay: f64,
    pub easing: &'static str,
    pub opacity: Option<Swing>,
    pub scale: Option<Swing>,
    pub lift: Option<Swing>,
}

impl LoopTween {
    pub fn keyframes(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        for (stop, pick) in [("0%", false), ("50%", true), ("100%", false)] {
            let _ = write!(css, " {} {{ {} }}", stop, self.frame(pick));
        }
        css.push_str(" }");
        css
    }

    fn frame(&self, peak: bool) -> String {
        let at = |s: Swing| if peak { s.peak } else { s.rest };
        let mut decls = Vec::new();
        if let Some(o) = self.opacity {
            decls.push(format!("opacity: {};", at(o)));
        }
        let mut transforms = Vec::new();
        if let Some(y) = self.lift {
            transforms.push(format!("translateY({}px)", at(y)));
        }
        if let Some(s) = self.scale {
            transforms.push(format!("scale({})", at(s)));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {};", transforms.join(" ")));
        }
        decls.join(" ")
    }

    pub fn style(&self) -> String {
        format!(
            "animation: {} {}s {} {}s infinite;",
            self.name, self.duration, self.easing, self.delay
        )
    }
}

/// One-shot fade and slide up, holding the final frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub duration: f64,
    pub delay: f64,
    pub rise: f64,
}

impl Entrance {
    pub const FADE_KEYFRAMES: &'static str =
        "@keyframes enter-fade { from { opacity: 0; } to { opacity: 1; } }";

    pub const fn rise(duration: f64, delay: f64) -> Self {
        Self { duration, delay, rise: 20.0 }
    }

    pub const fn fade(duration: f64, delay: f64) -> Self {
        Self { duration, delay, rise: 0.0 }
    }

    fn name(&self) -> &'static str {
        if self.rise == 0.0 {
            "enter-fade"
        } else {
            "enter-rise"
        }
    }

    pub fn rise_keyframes(rise: f64) -> String {
        format!(
            "@keyframes enter-rise {{ from {{ opacity: 0; transform: translateY({}px); }} to {{ opacity: 1; transform: translateY(0px); }} }}",
            rise
        )
    }

    pub fn style(&self) -> String {
        format!("animation: {} {}s ease-out {}s both;", self.name(), self.duration, self.delay)
    }
}

const EASE_IN_OUT: &str = "ease-in-out";

pub const BLOBS: [LoopTween; 3] = [
    LoopTween {
        name: "blob-purple",
        duration: 8.0,
        delay: 0.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.15, 0.25)),
        scale: Some(Swing::new(1.0, 1.05)),
        lift: None,
    },
    LoopTween {
        name: "blob-blue",
        duration: 10.0,
        delay: 1.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.15, 0.25)),
        scale: Some(Swing::new(1.0, 1.05)),
        lift: None,
    },
    LoopTween {
        name: "blob-teal",
        duration: 12.0,
        delay: 2.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.05, 0.15)),
        scale: Some(Swing::new(1.0, 1.05)),
        lift: None,
    },
];

pub const DOTS: [LoopTween; 3] = [
    LoopTween {
        name: "dot-purple",
        duration: 3.0,
        delay: 0.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.5, 0.8)),
        scale: None,
        lift: Some(Swing::new(0.0, -15.0)),
    },
    LoopTween {
        name: "dot-blue",
        duration: 4.0,
        delay: 1.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.5, 0.8)),
        scale: None,
        lift: Some(Swing::new(0.0, -20.0)),
    },
    LoopTween {
        name: "dot-teal",
        duration: 2.5,
        delay: 0.5,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.5, 0.8)),
        scale: None,
        lift: Some(Swing::new(0.0, -10.0)),
    },
];

pub const GLYPHS: [LoopTween; 2] = [
    LoopTween {
        name: "glyph-open",
        duration: 5.0,
        delay: 0.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.2, 0.4)),
        scale: None,
        lift: Some(Swing::new(0.0, -10.0)),
    },
    LoopTween {
        name: "glyph-close",
        duration: 6.0,
        delay: 2.0,
        easing: EASE_IN_OUT,
        opacity: Some(Swing::new(0.2, 0.4)),
        scale: None,
        lift: Some(Swing::new(0.0, -15.0)),
    },
];

pub const SCROLL_HINT: LoopTween = LoopTween {
    name: "scroll-bob",
    duration: 2.0,
    delay: 0.0,
    easing: "ease",
    opacity: None,
    scale: None,
    lift: Some(Swing::new(0.0, 5.0)),
};

pub const HERO_TITLE: Entrance = Entrance::rise(0.8, 0.0);
pub const HERO_TAGLINE: Entrance = Entrance::rise(0.8, 0.3);
pub const HERO_ACTIONS: Entrance = Entrance::rise(0.8, 0.6);
pub const HERO_HINT: Entrance = Entrance::fade(0.8, 1.2);

/// Every keyframe block the page references, as one stylesheet.
pub fn stylesheet() -> String {
    let mut css = String::new();
    for tween in BLOBS.iter().chain(DOTS.iter()).chain(GLYPHS.iter()) {
        css.push_str(&tween.keyframes());
        css.push('\n');
    }
    css.push_str(&SCROLL_HINT.keyframes());
    css.push('\n');
    css.push_str(&Entrance::rise_keyframes(20.0));
    css.push('\n');
    css.push_str(Entrance::FADE_KEYFRAMES);
    css.push('\n');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_keyframes_pulse_and_return() {
        let css = BLOBS[0].keyframes();
        assert_eq!(
            css,
            "@keyframes blob-purple { \
             0% { opacity: 0.15; transform: scale(1); } \
             50% { opacity: 0.25; transform: scale(1.05); } \
             100% { opacity: 0.15; transform: scale(1); } }"
        );
    }

    #[test]
    fn dot_keyframes_lift() {
        let css = DOTS[1].keyframes();
        assert!(css.contains("50% { opacity: 0.8; transform: translateY(-20px); }"));
        assert!(css.contains("100% { opacity: 0.5; transform: translateY(0px); }"));
    }

    #[test]
    fn loop_style_repeats_forever() {
        assert_eq!(DOTS[2].style(), "animation: dot-teal 2.5s ease-in-out 0.5s infinite;");
        assert!(BLOBS.iter().all(|t| t.style().ends_with("infinite;")));
    }

    #[test]
    fn entrances_hold_final_frame() {
        assert_eq!(HERO_TAGLINE.style(), "animation: enter-rise 0.8s ease-out 0.3s both;");
        assert_eq!(HERO_HINT.style(), "animation: enter-fade 0.8s ease-out 1.2s both;");
        assert!(Entrance::rise_keyframes(20.0).contains("translateY(20px)"));
    }

    #[test]
    fn stylesheet_defines_every_referenced_animation() {
        let css = stylesheet();
        let names = BLOBS
            .iter()
            .chain(DOTS.iter())
            .chain(GLYPHS.iter())
            .chain(std::iter::once(&SCROLL_HINT))
            .map(|t| t.name)
            .chain(["enter-rise", "enter-fade"]);
        for name in names {
            assert!(css.contains(&format!("@keyframes {} ", name)), "missing {}", name);
        }
    }
}

//! Static configuration handed to the optional decorative libraries.

use serde::Serialize;

/// Containers that receive the particle background, when present.
pub const PARTICLE_CONTAINERS: [&str; 5] = [
    "particles-js",
    "particles-stats",
    "particles-packages",
    "particles-benefits",
    "particles-rse",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealConfig {
    pub duration: u32,
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 600,
            once: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticlesConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particles {
    pub number: Number,
    pub color: ColorList,
    pub shape: Shape,
    pub opacity: Opacity,
    pub size: Size,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub motion: Motion,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorList {
    pub value: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Opacity {
    pub value: f64,
    pub random: bool,
    pub anim: OpacityAnim,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpacityAnim {
    pub enable: bool,
    pub speed: f64,
    pub opacity_min: f64,
    pub sync: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Size {
    pub value: f64,
    pub random: bool,
    pub anim: SizeAnim,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizeAnim {
    pub enable: bool,
    pub speed: f64,
    pub size_min: f64,
    pub sync: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: String,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Motion {
    pub enable: bool,
    pub speed: f64,
    pub direction: String,
    pub random: bool,
    pub straight: bool,
    pub out_mode: String,
    pub bounce: bool,
    pub attract: Attract,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attract {
    pub enable: bool,
    #[serde(rename = "rotateX")]
    pub rotate_x: u32,
    #[serde(rename = "rotateY")]
    pub rotate_y: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interactivity {
    pub detect_on: String,
    pub events: Events,
    pub modes: Modes,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Events {
    pub onhover: ModeToggle,
    pub onclick: ModeToggle,
    pub resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModeToggle {
    pub enable: bool,
    pub mode: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Modes {
    pub grab: Grab,
    pub push: Push,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grab {
    pub distance: u32,
    pub line_linked: GrabLine,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrabLine {
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Push {
    pub particles_nb: u32,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            particles: Particles {
                number: Number {
                    value: 80,
                    density: Density {
                        enable: true,
                        value_area: 900,
                    },
                },
                color: ColorList {
                    value: vec!["#ffffff".into(), "#a8b4d4".into(), "#8892b0".into()],
                },
                shape: Shape {
                    kind: "circle".into(),
                },
                opacity: Opacity {
                    value: 0.6,
                    random: true,
                    anim: OpacityAnim {
                        enable: true,
                        speed: 0.5,
                        opacity_min: 0.2,
                        sync: false,
                    },
                },
                size: Size {
                    value: 3.0,
                    random: true,
                    anim: SizeAnim {
                        enable: true,
                        speed: 2.0,
                        size_min: 1.0,
                        sync: false,
                    },
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: 180,
                    color: "#8892b0".into(),
                    opacity: 0.3,
                    width: 1.0,
                },
                motion: Motion {
                    enable: true,
                    speed: 1.2,
                    direction: "none".into(),
                    random: true,
                    straight: false,
                    out_mode: "out".into(),
                    bounce: false,
                    attract: Attract {
                        enable: true,
                        rotate_x: 600,
                        rotate_y: 1200,
                    },
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas".into(),
                events: Events {
                    onhover: ModeToggle {
                        enable: true,
                        mode: "grab".into(),
                    },
                    onclick: ModeToggle {
                        enable: true,
                        mode: "push".into(),
                    },
                    resize: true,
                },
                modes: Modes {
                    grab: Grab {
                        distance: 200,
                        line_linked: GrabLine { opacity: 0.6 },
                    },
                    push: Push { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }
}

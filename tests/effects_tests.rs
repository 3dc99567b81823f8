// Host-side tests for the decorative library configuration.

use sponsor_core::effects::{ParticlesConfig, RevealConfig, PARTICLE_CONTAINERS};

#[test]
fn particle_defaults_match_page_design() {
    let cfg = ParticlesConfig::default();
    assert_eq!(cfg.particles.number.value, 80);
    assert_eq!(cfg.particles.number.density.value_area, 900);
    assert_eq!(cfg.particles.color.value.len(), 3);
    assert_eq!(cfg.particles.line_linked.distance, 180);
    assert_eq!(cfg.interactivity.events.onhover.mode, "grab");
    assert_eq!(cfg.interactivity.events.onclick.mode, "push");
    assert_eq!(cfg.interactivity.modes.push.particles_nb, 4);
    assert!(cfg.retina_detect);
}

#[test]
fn reveal_library_runs_once_per_element() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.duration, 600);
    assert!(cfg.once);
}

#[test]
fn particle_containers_are_unique() {
    let mut ids = PARTICLE_CONTAINERS.to_vec();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PARTICLE_CONTAINERS.len());
    assert!(PARTICLE_CONTAINERS.contains(&"particles-js"));
}

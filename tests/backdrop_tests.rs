//! Integration tests for the public backdrop API.
//!
//! Covers the theme registry, spawn distributions, the three motion rules
//! and validation of the render shader with naga.

use backdrop::{ParticleSystem, ShapeKind, SpawnContext, ThemeId};

// ============================================================================
// Theme Registry
// ============================================================================

#[test]
fn test_registry_is_total() {
    for id in ThemeId::ALL {
        let theme = id.config();
        assert!(theme.particle_count > 0);
        assert!(theme.particle_size > 0.0);
        assert!(theme.particle_speed > 0.0);
        assert!(theme.rotation_speed > 0.0);
        assert!(theme.opacity > 0.0 && theme.opacity <= 1.0);
    }
}

#[test]
fn test_names_round_trip() {
    for id in ThemeId::ALL {
        let parsed: ThemeId = id.name().parse().unwrap();
        assert_eq!(parsed, id);
    }
}

#[test]
fn test_unknown_name_is_refused() {
    assert!("".parse::<ThemeId>().is_err());
    assert!("Cyber".parse::<ThemeId>().is_err()); // names are lowercase
    assert!("rainbow".parse::<ThemeId>().is_err());
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_seeded_counts_match_registry() {
    for id in ThemeId::ALL {
        let system = ParticleSystem::with_context(id, SpawnContext::from_seed(9));
        assert_eq!(system.len() as u32, id.config().particle_count);
        assert_eq!(system.theme_id(), id);
    }
}

#[test]
fn test_rotation_speed_fixed_after_spawn() {
    let mut system = ParticleSystem::with_context(ThemeId::Cyber, SpawnContext::from_seed(9));
    let speeds: Vec<_> = system.particles().iter().map(|p| p.rotation_speed).collect();
    for _ in 0..250 {
        system.update();
    }
    for (p, s) in system.particles().iter().zip(speeds) {
        assert_eq!(p.rotation_speed, s);
    }
}

// ============================================================================
// Motion Rules (long-run, through the public API)
// ============================================================================

#[test]
fn test_cyber_positions_closed_under_update() {
    let mut system = ParticleSystem::with_context(ThemeId::Cyber, SpawnContext::from_seed(11));
    for _ in 0..5_000 {
        system.update();
    }
    for p in system.particles() {
        for axis in [p.position.x, p.position.y, p.position.z] {
            assert!((-50.0..=50.0).contains(&axis));
        }
    }
}

#[test]
fn test_galaxy_radii_preserved_over_long_run() {
    let mut system = ParticleSystem::with_context(ThemeId::Galaxy, SpawnContext::from_seed(11));
    let radii: Vec<f32> = system
        .particles()
        .iter()
        .map(|p| p.position.x.hypot(p.position.z))
        .collect();
    for _ in 0..2_000 {
        system.update();
    }
    for (p, r0) in system.particles().iter().zip(radii) {
        let r1 = p.position.x.hypot(p.position.z);
        // Accumulated float error only; the rule itself is radius-exact.
        assert!((r1 - r0).abs() < 0.25, "radius drifted {r0} -> {r1}");
    }
}

#[test]
fn test_matrix_never_exceeds_ceiling() {
    let mut system = ParticleSystem::with_context(ThemeId::Matrix, SpawnContext::from_seed(11));
    for _ in 0..10_000 {
        system.update();
        for p in system.particles() {
            assert!(p.position.y <= 100.0);
        }
    }
}

// ============================================================================
// Shape kinds
// ============================================================================

#[test]
fn test_shapes_follow_registry() {
    assert_eq!(ThemeId::Cyber.config().shape, ShapeKind::Cube);
    assert_eq!(ThemeId::Galaxy.config().shape, ShapeKind::Sphere);
    assert_eq!(ThemeId::Matrix.config().shape, ShapeKind::Glyph);
}

// ============================================================================
// WGSL Validation
// ============================================================================

const SHADER_SOURCE: &str = include_str!("../src/gpu/shader.wgsl");

#[test]
fn test_render_shader_validates() {
    let module = naga::front::wgsl::parse_str(SHADER_SOURCE)
        .unwrap_or_else(|e| panic!("WGSL parse error: {:?}", e));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {:?}", e));
}

#[test]
fn test_render_shader_entry_points() {
    let module = naga::front::wgsl::parse_str(SHADER_SOURCE).unwrap();
    let names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

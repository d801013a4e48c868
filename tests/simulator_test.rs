use fireworks_core::physic_engine::{random::ScriptedRandom, PhysicConfig, RngSource};
use fireworks_core::{DriverSettingsBuilder, PhysicEngine, PhysicEngineFireworks, Simulator};
use std::cell::RefCell;
use std::rc::Rc;
mod helpers;
use helpers::TestPhysic;

fn quiet_settings() -> fireworks_core::DriverSettings {
    DriverSettingsBuilder::default()
        .log_interval_ticks(0)
        .build()
        .unwrap()
}

/// Vérifie l'ordre des appels : lancements livrés avant `update`.
#[test]
fn test_launch_requests_are_delivered_before_update() {
    let log = Rc::new(RefCell::new(vec![]));
    let physic = TestPhysic::new(log.clone());
    let mut sim = Simulator::new(physic, ScriptedRandom::default(), quiet_settings());

    sim.request_launch(150.0);
    sim.request_launch(300.0);
    sim.step();
    sim.step();
    sim.close();

    assert_eq!(
        *log.borrow(),
        vec![
            "physic.launch(150)",
            "physic.launch(300)",
            "physic.update",
            "physic.update",
            "physic.close",
        ]
    );

    let summary = sim.summary();
    assert_eq!(summary.ticks, 2);
    assert_eq!(summary.launches, 2);
    assert_eq!(summary.explosions, 2);
    assert_eq!(summary.spawned_particles, 160);
}

#[test]
fn test_rejected_launches_are_not_counted() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut physic = TestPhysic::new(log.clone());
    physic.capacity = 1;
    let mut sim = Simulator::new(physic, ScriptedRandom::default(), quiet_settings());

    sim.request_launch(10.0);
    sim.request_launch(20.0);
    sim.step();

    assert_eq!(sim.summary().launches, 1);
}

// ==================================
// Auto-lancement
// ==================================

#[test]
fn test_auto_launch_waits_for_period() {
    let log = Rc::new(RefCell::new(vec![]));
    let physic = TestPhysic::new(log.clone());
    // chance : tirage 0 < 30 -> lancement ; x : tirage 640
    let rng = ScriptedRandom::default().with_ints([0, 640]);
    let mut sim = Simulator::new(physic, rng, quiet_settings());

    for _ in 0..60 {
        sim.step();
    }
    assert_eq!(sim.summary().launches, 0);

    sim.step();
    assert_eq!(sim.summary().launches, 1);
    assert!(log.borrow().contains(&"physic.launch(640)".to_string()));
}

#[test]
fn test_auto_launch_respects_chance() {
    let log = Rc::new(RefCell::new(vec![]));
    let physic = TestPhysic::new(log.clone());
    // 30 n'est pas < 30 : pas de lancement
    let rng = ScriptedRandom::default().with_ints([30]);
    let mut sim = Simulator::new(physic, rng, quiet_settings());

    for _ in 0..61 {
        sim.step();
    }
    assert_eq!(sim.summary().launches, 0);
}

#[test]
fn test_at_most_one_auto_launch_per_period() {
    let settings = DriverSettingsBuilder::default()
        .auto_launch_chance(101)
        .log_interval_ticks(0)
        .build()
        .unwrap();
    let log = Rc::new(RefCell::new(vec![]));
    let mut sim = Simulator::new(TestPhysic::new(log), RngSource::seeded(1), settings);

    let summary = sim.run(61 * 10);
    assert_eq!(summary.launches, 10);
}

#[test]
fn test_launch_range_on_narrow_world() {
    let log = Rc::new(RefCell::new(vec![]));
    let mut sim = Simulator::new(TestPhysic::new(log), RngSource::seeded(3), quiet_settings());
    assert_eq!(sim.launch_range(), (100, 1180));

    sim.set_world_width(150.0);
    assert_eq!(sim.settings().world_width, 150.0);
    assert_eq!(sim.launch_range(), (50, 100));

    for _ in 0..100 {
        sim.request_random_launch();
    }
    sim.step();
}

// ==================================
// Avec le vrai moteur
// ==================================

#[test]
fn test_full_run_with_fireworks_engine() {
    let config = PhysicConfig::default();
    let engine = PhysicEngineFireworks::with_seed(&config, 2024);
    let settings = DriverSettingsBuilder::default()
        .auto_launch_period(5)
        .auto_launch_chance(101)
        .log_interval_ticks(500)
        .build()
        .unwrap();
    let mut sim = Simulator::new(engine, RngSource::seeded(2025), settings);

    let summary = sim.run(1_200);

    assert_eq!(summary.ticks, 1_200);
    assert!(summary.launches > 0);
    assert!(summary.explosions > 0);
    assert!(summary.explosions <= summary.launches);
    assert!(summary.peak_active_particles <= config.max_particles);
    assert_eq!(
        summary.peak_active_particles,
        sim.physic_engine().active_particle_count()
    );

    sim.close();
    assert_eq!(sim.physic_engine().active_particle_count(), 0);
}

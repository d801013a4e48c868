use fireworks_core::physic_engine::{
    CapacityStats, ExplosionEvent, Particle, PhysicConfig, PhysicEngine, PhysicEngineFull,
    PhysicEngineIterator, Rocket, UpdateResult, Vec2,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Moteur factice qui journalise les appels du driver.
///
/// `launch` accepte jusqu'à `capacity` fusées, `update` déclenche une explosion
/// par fusée lancée depuis le tick précédent.
#[allow(dead_code)]
pub struct TestPhysic {
    pub log: Rc<RefCell<Vec<String>>>,
    pub capacity: usize,
    config: PhysicConfig,
    launched: Vec<f32>,
    explosions: Vec<ExplosionEvent>,
}

#[allow(dead_code)]
impl TestPhysic {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            log,
            capacity: usize::MAX,
            config: PhysicConfig::default(),
            launched: Vec::new(),
            explosions: Vec::new(),
        }
    }
}

impl PhysicEngine for TestPhysic {
    fn launch(&mut self, x: f32) -> bool {
        self.log.borrow_mut().push(format!("physic.launch({x})"));
        if self.launched.len() >= self.capacity {
            return false;
        }
        self.launched.push(x);
        true
    }

    fn update(&mut self) -> UpdateResult<'_> {
        self.log.borrow_mut().push("physic.update".into());
        self.explosions = self
            .launched
            .drain(..)
            .map(|x| ExplosionEvent {
                pos: Vec2::new(x, 100.0),
                ..Default::default()
            })
            .collect();
        UpdateResult {
            triggered_explosions: &self.explosions,
            spawned_particles: self.explosions.len() * 80,
        }
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("physic.close".into());
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn active_rocket_count(&self) -> usize {
        self.launched.len()
    }

    fn active_particle_count(&self) -> usize {
        0
    }

    fn capacity_stats(&self) -> CapacityStats {
        CapacityStats::default()
    }
}

impl PhysicEngineIterator for TestPhysic {
    fn iter_active_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(std::iter::empty())
    }

    fn iter_live_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(std::iter::empty())
    }
}

impl PhysicEngineFull for TestPhysic {}

/// Compare deux ensembles de fusées sans tenir compte de l'ordre.
#[allow(dead_code)]
pub fn sorted_by_x(rockets: &[Rocket]) -> Vec<Rocket> {
    let mut v = rockets.to_vec();
    v.sort_by(|a, b| a.pos.x.total_cmp(&b.pos.x));
    v
}

use log::info;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Profiler mono-thread à fenêtres glissantes.
///
/// - `profile_block` : durées (ms) de blocs labelisés
/// - `record_metric` : compteurs scalaires (particules actives, explosions, ...)
#[derive(Debug)]
pub struct Profiler {
    samples: HashMap<String, VecDeque<f32>>,
    metrics: HashMap<String, VecDeque<usize>>,
    max_samples: usize,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: HashMap::new(),
            metrics: HashMap::new(),
            max_samples: max_samples.max(1),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&mut self, label: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;
        push_bounded(
            self.samples.entry(label.to_owned()).or_default(),
            dt,
            self.max_samples,
        );
        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&mut self, label: &str, value: usize) {
        push_bounded(
            self.metrics.entry(label.to_owned()).or_default(),
            value,
            self.max_samples,
        );
    }

    /// Résumé des temps mesurés (moyenne, min, max) en ms
    pub fn summary(&self) -> HashMap<String, (f32, f32, f32)> {
        self.samples
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| {
                let avg = v.iter().sum::<f32>() / v.len() as f32;
                let min = v.iter().copied().fold(f32::MAX, f32::min);
                let max = v.iter().copied().fold(f32::MIN, f32::max);
                (k.clone(), (avg, min, max))
            })
            .collect()
    }

    /// Résumé pour une métrique spécifique (moyenne, min, max)
    pub fn metric_summary(&self, label: &str) -> Option<(f32, usize, usize)> {
        let series = self.metrics.get(label).filter(|v| !v.is_empty())?;
        let avg = series.iter().sum::<usize>() as f32 / series.len() as f32;
        let min = series.iter().copied().min()?;
        let max = series.iter().copied().max()?;
        Some((avg, min, max))
    }

    /// Log toutes les métriques vers l’info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str) {
        for (label, (avg, min, max)) in self.summary() {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        for label in self.metrics.keys() {
            if let Some((avg, min, max)) = self.metric_summary(label) {
                info!(target: target, "{label}: avg={avg:.1}, min={min}, max={max}");
            }
        }
    }
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, value: T, max_samples: usize) {
    if buffer.len() >= max_samples {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!());
    };
}

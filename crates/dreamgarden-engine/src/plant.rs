use dreamgarden_types::models::{PlantHealth, PlantState, PlantType, SleepRecord};

/// Trailing window, in nights, that plant health is judged over.
pub const DEFAULT_WINDOW: usize = 7;

/// Derive the plant from the most recent `window` sleep records.
///
/// `records` is the caller's window, newest first. With no records the plant
/// sits at a fixed fair/20. Consistency is the fraction of the window that has
/// a record and never exceeds 1.0, even if more than `window` records are
/// passed in. A `window` of 0 is treated as 1.
pub fn derive_plant_state(records: &[SleepRecord], window: usize) -> PlantState {
    if records.is_empty() {
        return PlantState {
            health: PlantHealth::Fair,
            growth: 20,
            plant_type: PlantType::default(),
        };
    }

    let window = window.max(1);
    let total: u32 = records.iter().map(|r| r.rating.get() as u32).sum();
    let average = total as f64 / records.len() as f64;
    let consistency = records.len().min(window) as f64 / window as f64;

    PlantState {
        health: health_for(average, consistency),
        growth: growth_for(average, consistency),
        plant_type: PlantType::default(),
    }
}

// First match wins.
fn health_for(average: f64, consistency: f64) -> PlantHealth {
    if average >= 4.5 && consistency >= 0.8 {
        PlantHealth::Excellent
    } else if average >= 3.5 && consistency >= 0.6 {
        PlantHealth::Good
    } else if average >= 2.5 && consistency >= 0.4 {
        PlantHealth::Fair
    } else if average >= 1.5 {
        PlantHealth::Poor
    } else {
        PlantHealth::Critical
    }
}

fn growth_for(average: f64, consistency: f64) -> u8 {
    round_half_up(average * 20.0 + consistency * 30.0).min(100.0) as u8
}

/// Rounds .5 upward: `floor(x + 0.5)`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

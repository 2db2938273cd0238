//! Interaction domain: click classification and the significant-click streak.

use bevy::prelude::*;
use rand::Rng;

use crate::content::ClickTuning;

/// What a single click amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Within the significant window of the previous click
    pub significant: bool,
    pub streak: u32,
    /// The click cadence rolled a spawn request
    pub request_spawn: bool,
    /// The streak crossed the cutscene threshold for the first time this session
    pub cutscene: bool,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct ClickState {
    pub last_click_at: Option<u64>,
    pub streak: u32,
    pub streak_active: bool,
    /// Clicks that started a new streak
    pub normal_clicks: u32,
    pub cutscene_fired: bool,
}

impl ClickState {
    pub fn on_click(&mut self, now_ms: u64, tuning: &ClickTuning, rng: &mut impl Rng) -> ClickOutcome {
        let significant = self
            .last_click_at
            .is_some_and(|last| now_ms.saturating_sub(last) < tuning.significant_window_ms);

        let mut request_spawn = false;
        if significant {
            self.streak += 1;
        } else {
            self.normal_clicks += 1;
            self.streak = 1;

            if tuning.spawn_cadence > 0
                && self.normal_clicks % tuning.spawn_cadence == 0
                && rng.random::<f32>() < tuning.spawn_chance
            {
                request_spawn = true;
            }
        }

        self.streak_active = true;
        self.last_click_at = Some(now_ms);

        let cutscene = !self.cutscene_fired && self.streak >= tuning.cutscene_threshold;
        if cutscene {
            self.cutscene_fired = true;
        }

        ClickOutcome {
            significant,
            streak: self.streak,
            request_spawn,
            cutscene,
        }
    }

    /// Idle timeout fired: hide and reset the streak.
    pub fn expire_streak(&mut self) {
        self.streak = 0;
        self.streak_active = false;
    }

    /// Streak progress toward the cutscene threshold, capped at 1.0
    pub fn meter_fraction(&self, threshold: u32) -> f32 {
        if threshold == 0 {
            return 1.0;
        }
        (self.streak as f32 / threshold as f32).min(1.0)
    }
}

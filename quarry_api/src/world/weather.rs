//! Weather
//!
//! The three vanilla weather states and the contract a world exposes for
//! reading and changing them. Natural weather runs for a random span inside
//! a per-state window; [`Weather::random_duration`] rolls one the way the
//! vanilla cycle does.
use rand::Rng;
use serde::{Deserialize, Serialize};

use quarry_data::Ticks;

use crate::command::parameter::NamedVariants;

/// A vanilla weather state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    ThunderStorm,
}

impl Weather {
    /// The window vanilla draws this state's natural duration from,
    /// inclusive on both ends.
    pub fn natural_duration_window(self) -> (Ticks, Ticks) {
        match self {
            Weather::Clear => (Ticks(12_000), Ticks(180_000)),
            Weather::Rain => (Ticks(12_000), Ticks(24_000)),
            Weather::ThunderStorm => (Ticks(3_600), Ticks(15_600)),
        }
    }

    /// Roll a natural duration for this state from its window.
    pub fn random_duration<R: Rng + ?Sized>(self, rng: &mut R) -> Ticks {
        let (min, max) = self.natural_duration_window();
        Ticks(rng.random_range(min.0..=max.0))
    }
}

impl NamedVariants for Weather {
    const VARIANTS: &'static [Weather] = &[Weather::Clear, Weather::Rain, Weather::ThunderStorm];

    fn name(&self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::ThunderStorm => "thunder_storm",
        }
    }
}

/// A universe affected by weather: a world, or any part of one that runs
/// its own weather cycle.
pub trait WeatherUniverse {
    /// The current weather.
    fn weather(&self) -> Weather;

    /// How long the current weather will still run.
    fn remaining_weather_duration(&self) -> Ticks;

    /// How long the current weather has been running.
    fn running_weather_duration(&self) -> Ticks;

    /// Switch the weather, letting the host roll a natural duration.
    fn set_weather(&mut self, weather: Weather);

    /// Switch the weather for exactly `duration`.
    fn set_weather_for(&mut self, weather: Weather, duration: Ticks);
}

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

/// Interactive launch-records dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "launch-dash", version, about)]
pub struct Config {
    /// Launch dataset (.csv, .json or .parquet)
    #[arg(short, long, default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Lower bound of the payload slider (kg)
    #[arg(long, default_value_t = 0.0)]
    pub slider_min: f64,

    /// Upper bound of the payload slider (kg)
    #[arg(long, default_value_t = 10_000.0)]
    pub slider_max: f64,

    /// Payload slider step (kg)
    #[arg(long, default_value_t = 1000.0)]
    pub slider_step: f64,

    /// Initial window width
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

/// Payload slider settings shared with the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderBounds {
    fn default() -> Self {
        SliderBounds {
            min: 0.0,
            max: 10_000.0,
            step: 1000.0,
        }
    }
}

impl Config {
    /// Reject configurations the UI cannot render.
    pub fn validate(&self) -> Result<()> {
        if !(self.slider_min < self.slider_max) {
            bail!(
                "slider-min ({}) must be below slider-max ({})",
                self.slider_min,
                self.slider_max
            );
        }
        if !(self.slider_step > 0.0) {
            bail!("slider-step must be positive, got {}", self.slider_step);
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            bail!("window size must be positive, got {}x{}", self.width, self.height);
        }
        Ok(())
    }

    pub fn slider(&self) -> SliderBounds {
        SliderBounds {
            min: self.slider_min,
            max: self.slider_max,
            step: self.slider_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::parse_from(["launch-dash"]);
        assert_eq!(cfg.data, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(cfg.slider(), SliderBounds::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn overrides() {
        let cfg = Config::parse_from([
            "launch-dash",
            "--data",
            "launches.parquet",
            "--slider-max",
            "20000",
            "--slider-step",
            "500",
        ]);
        assert_eq!(cfg.data, PathBuf::from("launches.parquet"));
        assert_eq!(cfg.slider().max, 20_000.0);
        assert_eq!(cfg.slider().step, 500.0);
    }

    #[test]
    fn rejects_bad_slider() {
        let cfg = Config::parse_from(["launch-dash", "--slider-min", "5000", "--slider-max", "100"]);
        assert!(cfg.validate().is_err());
        let cfg = Config::parse_from(["launch-dash", "--slider-step", "0"]);
        assert!(cfg.validate().is_err());
    }
}

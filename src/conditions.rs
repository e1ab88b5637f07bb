use std::env;

use beamstress::{BeamConfig, ConfigError};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "BEAMSTRESS_CONFIG";

/// Sample beam used by the demonstration: a 0.2 m deep, 1 m wide section
/// spanning 2 m, sampled every centimetre.
#[must_use]
pub fn sample_config() -> BeamConfig {
    BeamConfig {
        height: 0.2,
        length: 2.0,
        ..BeamConfig::default()
    }
}

/// Load the configuration named by [`CONFIG_ENV`], falling back to the sample beam.
pub fn load_config() -> Result<BeamConfig, ConfigError> {
    match env::var_os(CONFIG_ENV) {
        // Any field left out of the file keeps its default, so a config can be
        // as small as `{"height": 0.3}`.
        Some(path) => {
            log::info!("reading configuration from {}", path.to_string_lossy());
            BeamConfig::from_path(path)
        }
        // Without a file, analyse the sample beam used throughout the docs.
        None => Ok(sample_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_beam_matches_demonstration() {
        let config = sample_config();
        assert_eq!(config.height, 0.2);
        assert_eq!(config.base, 1.0);
        assert_eq!(config.length, 2.0);
        assert_eq!(config.resolution, 0.01);
        let beam = config.build_beam().expect("sample geometry is valid");
        assert_eq!(beam.shape(), (20, 200));
    }
}

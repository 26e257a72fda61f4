use clap::ValueEnum;

use crate::field::FieldConfig;

/// The five incremental demos, as presets of the one renderer. Every
/// preset is buffer-rendered; they differ in cube count, camera mode, and
/// whether the speed slider is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A single cube spinning at the origin, static camera.
    Spin,
    /// The randomized cube field, static camera.
    Field,
    /// Cube field with the orbiting perspective camera.
    Orbit,
    /// Orbit plus the camera speed slider.
    Slider,
    /// The full configuration (default).
    Buffers,
}

/// Resolved preset: field generation parameters plus camera/UI flags.
#[derive(Debug, Clone, Copy)]
pub struct DemoSettings {
    pub field: FieldConfig,
    pub orbiting: bool,
    pub show_slider: bool,
}

impl Demo {
    pub fn settings(self) -> DemoSettings {
        match self {
            Demo::Spin => DemoSettings {
                field: FieldConfig {
                    count: 1,
                    position_range: 0.0,
                    min_camera_distance: 0.0,
                    ..FieldConfig::default()
                },
                orbiting: false,
                show_slider: false,
            },
            Demo::Field => DemoSettings {
                field: FieldConfig::default(),
                orbiting: false,
                show_slider: false,
            },
            Demo::Orbit => DemoSettings {
                field: FieldConfig::default(),
                orbiting: true,
                show_slider: false,
            },
            Demo::Slider | Demo::Buffers => DemoSettings {
                field: FieldConfig::default(),
                orbiting: true,
                show_slider: true,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Demo::Spin => "spin",
            Demo::Field => "field",
            Demo::Orbit => "orbit",
            Demo::Slider => "slider",
            Demo::Buffers => "buffers",
        }
    }
}

impl std::fmt::Display for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_is_one_cube_static_camera() {
        let s = Demo::Spin.settings();
        assert_eq!(s.field.count, 1);
        assert!(!s.orbiting);
        assert!(!s.show_slider);
    }

    #[test]
    fn slider_presets_orbit_and_show_the_slider() {
        for demo in [Demo::Slider, Demo::Buffers] {
            let s = demo.settings();
            assert!(s.orbiting, "{} should orbit", demo.name());
            assert!(s.show_slider, "{} should show the slider", demo.name());
        }
    }

    #[test]
    fn field_presets_use_the_default_field() {
        let s = Demo::Field.settings();
        assert_eq!(s.field.count, FieldConfig::default().count);
        assert!(!s.show_slider);
    }
}

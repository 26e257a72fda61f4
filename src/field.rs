use glam::{Mat4, Vec3};
use rand::Rng;

pub const DEFAULT_CUBE_COUNT: usize = 50;
pub const DEFAULT_POSITION_RANGE: f32 = 10.0;
pub const DEFAULT_MIN_CAMERA_DISTANCE: f32 = 2.0;
pub const DEFAULT_SPEED_RANGE: (f32, f32) = (0.5, 2.0);

/// Resampling rounds per cube before the position is clamped radially
/// outward to the minimum distance.
pub const MAX_REJECTION_ROUNDS: u32 = 64;

/// Per-instance data consumed by the cube pipelines: model matrix columns
/// plus the cube color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeInstance {
    pub model_0: [f32; 4],
    pub model_1: [f32; 4],
    pub model_2: [f32; 4],
    pub model_3: [f32; 4],
    pub color: [f32; 4],
}

/// One cube of the field. Created once at startup; only `angle` mutates.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    pub position: Vec3,
    pub color: [f32; 3],
    /// Rotation angle in degrees. Grows without bound; the rotation
    /// transform is periodic in angle mod 360.
    pub angle: f32,
    /// Degrees per frame, fixed at creation.
    pub speed: f32,
    /// Raw axis sample from `[-1,1]^3`. Stored un-normalized; the
    /// transform build normalizes it like a fixed-function rotate call.
    pub axis: Vec3,
}

impl Cube {
    /// Model transform: translate to the cube position, then rotate by the
    /// accumulated angle about the cube axis.
    pub fn model_matrix(&self) -> Mat4 {
        let axis = self.axis.try_normalize().unwrap_or(Vec3::Y);
        Mat4::from_translation(self.position) * Mat4::from_axis_angle(axis, self.angle.to_radians())
    }

    pub fn to_instance(&self) -> CubeInstance {
        let cols = self.model_matrix().to_cols_array_2d();
        CubeInstance {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: [self.color[0], self.color[1], self.color[2], 1.0],
        }
    }
}

/// Generation parameters for a cube field.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub count: usize,
    /// Positions are sampled uniformly in `[-position_range, +position_range]^3`.
    pub position_range: f32,
    /// Positions closer to the origin than this are rejected and
    /// resampled. Zero disables the check.
    pub min_camera_distance: f32,
    /// Rotation speeds are sampled uniformly in this range (degrees/frame).
    pub speed_range: (f32, f32),
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CUBE_COUNT,
            position_range: DEFAULT_POSITION_RANGE,
            min_camera_distance: DEFAULT_MIN_CAMERA_DISTANCE,
            speed_range: DEFAULT_SPEED_RANGE,
        }
    }
}

/// The cube field: a flat array of cubes advanced and drawn every frame.
#[derive(Debug)]
pub struct CubeField {
    cubes: Vec<Cube>,
}

impl CubeField {
    /// Generate `config.count` cubes with randomized attributes.
    pub fn generate(config: &FieldConfig) -> Self {
        let mut rng = rand::rng();
        let cubes = (0..config.count)
            .map(|_| Cube {
                position: sample_position(&mut rng, config),
                color: [rng.random(), rng.random(), rng.random()],
                angle: 0.0,
                speed: rng.random_range(config.speed_range.0..=config.speed_range.1),
                axis: Vec3::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                ),
            })
            .collect();
        Self { cubes }
    }

    /// Build a field from explicit cubes.
    pub fn from_cubes(cubes: Vec<Cube>) -> Self {
        Self { cubes }
    }

    /// Advance every cube's rotation angle by its per-frame speed.
    pub fn advance(&mut self) {
        for cube in &mut self.cubes {
            cube.angle += cube.speed;
        }
    }

    /// Flatten the field to per-instance GPU data, one entry per cube in
    /// cube order.
    pub fn instances(&self) -> Vec<CubeInstance> {
        self.cubes.iter().map(Cube::to_instance).collect()
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}

/// Rejection-sample a position in `[-range, +range]^3` at least
/// `min_camera_distance` from the origin. Bounded: after
/// `MAX_REJECTION_ROUNDS` failed rounds the last sample is pushed radially
/// out to the minimum distance.
fn sample_position(rng: &mut impl Rng, config: &FieldConfig) -> Vec3 {
    let r = config.position_range;
    let min_dist = config.min_camera_distance;

    let mut pos = Vec3::ZERO;
    for _ in 0..MAX_REJECTION_ROUNDS {
        pos = Vec3::new(
            rng.random_range(-r..=r),
            rng.random_range(-r..=r),
            rng.random_range(-r..=r),
        );
        if min_dist <= 0.0 || pos.length() >= min_dist {
            return pos;
        }
    }

    log::warn!(
        "position sampling exhausted {} rounds, clamping radially to {}",
        MAX_REJECTION_ROUNDS,
        min_dist
    );
    pos.try_normalize().unwrap_or(Vec3::X) * min_dist
}

use serde::Serialize;

use crate::schema::Field;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// RGBA, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A single parsed field value, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Float(f32),
    Vector2(Vec2),
    Color(Color),
}

/// The full set of persistable emitter parameters. Decoding is a partial
/// update: fields absent from the text keep their prior values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmitterParams {
    pub lifetime: f32,
    pub resolution: Vec2,
    pub min_size_factor: f32,
    pub max_size_factor: f32,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub centripetal_acceleration: f32,
    pub rotation: f32,
    pub rotation_velocity: f32,
    pub rotation_acceleration: f32,
    pub start_color: Color,
    pub end_color: Color,
    pub spawn_interval: f32,
    pub randomness: f32,
    pub spread: f32,
}

impl Default for EmitterParams {
    fn default() -> Self {
        // Matches the editor's initial emitter
        Self {
            lifetime: 1.0,
            resolution: Vec2 { x: 1.0, y: 1.0 },
            min_size_factor: 1.0,
            max_size_factor: 20.0,
            velocity: Vec2 { x: 100.0, y: 0.0 },
            acceleration: Vec2 { x: 0.0, y: 0.0 },
            centripetal_acceleration: 0.0,
            rotation: 0.0,
            rotation_velocity: 0.0,
            rotation_acceleration: 0.0,
            start_color: Color {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            },
            end_color: Color {
                r: 255,
                g: 255,
                b: 255,
                a: 255,
            },
            spawn_interval: 0.1,
            randomness: 1.0,
            spread: std::f32::consts::TAU,
        }
    }
}

impl EmitterParams {
    pub fn value_of(&self, field: Field) -> Value {
        match field {
            Field::Lifetime => Value::Float(self.lifetime),
            Field::Resolution => Value::Vector2(self.resolution),
            Field::MinSizeFactor => Value::Float(self.min_size_factor),
            Field::MaxSizeFactor => Value::Float(self.max_size_factor),
            Field::Velocity => Value::Vector2(self.velocity),
            Field::Acceleration => Value::Vector2(self.acceleration),
            Field::CentripetalAcceleration => Value::Float(self.centripetal_acceleration),
            Field::Rotation => Value::Float(self.rotation),
            Field::RotationVelocity => Value::Float(self.rotation_velocity),
            Field::RotationAcceleration => Value::Float(self.rotation_acceleration),
            Field::StartColor => Value::Color(self.start_color),
            Field::EndColor => Value::Color(self.end_color),
            Field::SpawnInterval => Value::Float(self.spawn_interval),
            Field::Randomness => Value::Float(self.randomness),
            Field::Spread => Value::Float(self.spread),
        }
    }

    /// Write one parsed value into its slot. Values are produced by parsing
    /// against `field.kind()`, so the kinds always line up.
    pub fn set_value(&mut self, field: Field, value: Value) {
        match (field, value) {
            (Field::Lifetime, Value::Float(v)) => self.lifetime = v,
            (Field::Resolution, Value::Vector2(v)) => self.resolution = v,
            (Field::MinSizeFactor, Value::Float(v)) => self.min_size_factor = v,
            (Field::MaxSizeFactor, Value::Float(v)) => self.max_size_factor = v,
            (Field::Velocity, Value::Vector2(v)) => self.velocity = v,
            (Field::Acceleration, Value::Vector2(v)) => self.acceleration = v,
            (Field::CentripetalAcceleration, Value::Float(v)) => {
                self.centripetal_acceleration = v
            }
            (Field::Rotation, Value::Float(v)) => self.rotation = v,
            (Field::RotationVelocity, Value::Float(v)) => self.rotation_velocity = v,
            (Field::RotationAcceleration, Value::Float(v)) => self.rotation_acceleration = v,
            (Field::StartColor, Value::Color(v)) => self.start_color = v,
            (Field::EndColor, Value::Color(v)) => self.end_color = v,
            (Field::SpawnInterval, Value::Float(v)) => self.spawn_interval = v,
            (Field::Randomness, Value::Float(v)) => self.randomness = v,
            (Field::Spread, Value::Float(v)) => self.spread = v,
            (field, value) => unreachable!("{:?} cannot hold {:?}", field, value),
        }
    }
}

use serde::Serialize;

/// The three value kinds the grammar knows how to read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Float,
    Vector2,
    Color,
}

impl ValueKind {
    /// Type tag as it appears in the named variant
    pub fn tag(self) -> &'static str {
        match self {
            ValueKind::Float => "float",
            ValueKind::Vector2 => "vector2f",
            ValueKind::Color => "color",
        }
    }
}

/// One schema entry: a field name plus its value kind. `SCHEMA` fixes the
/// emission order; decoding looks fields up by name and ignores order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Lifetime,
    Resolution,
    MinSizeFactor,
    MaxSizeFactor,
    Velocity,
    Acceleration,
    CentripetalAcceleration,
    Rotation,
    RotationVelocity,
    RotationAcceleration,
    StartColor,
    EndColor,
    SpawnInterval,
    Randomness,
    Spread,
}

/// Fields in the order the encoder emits them. Both format variants share
/// this schema; they differ only in line syntax and color encoding.
pub const SCHEMA: &[Field] = &[
    Field::Lifetime,
    Field::Resolution,
    Field::MinSizeFactor,
    Field::MaxSizeFactor,
    Field::Velocity,
    Field::Acceleration,
    Field::CentripetalAcceleration,
    Field::Rotation,
    Field::RotationVelocity,
    Field::RotationAcceleration,
    Field::StartColor,
    Field::EndColor,
    Field::SpawnInterval,
    Field::Randomness,
    Field::Spread,
];

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Lifetime => "LIFETIME",
            Field::Resolution => "RESOLUTION",
            Field::MinSizeFactor => "MIN_SIZE_FACTOR",
            Field::MaxSizeFactor => "MAX_SIZE_FACTOR",
            Field::Velocity => "VELOCITY",
            Field::Acceleration => "ACCELERATION",
            Field::CentripetalAcceleration => "CENTRIPETAL_ACCELERATION",
            Field::Rotation => "ROTATION",
            Field::RotationVelocity => "ROTATION_VELOCITY",
            Field::RotationAcceleration => "ROTATION_ACCELERATION",
            Field::StartColor => "START_COLOR",
            Field::EndColor => "END_COLOR",
            Field::SpawnInterval => "SPAWN_INTERVAL",
            Field::Randomness => "RANDOMNESS",
            Field::Spread => "SPREAD",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Field::Resolution | Field::Velocity | Field::Acceleration => ValueKind::Vector2,
            Field::StartColor | Field::EndColor => ValueKind::Color,
            _ => ValueKind::Float,
        }
    }
}

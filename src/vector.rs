use glam::Vec2;

/// Scales `v` to unit length. The zero vector is returned as is.
pub fn normalize(v: Vec2) -> Vec2 {
    let length = v.length();
    if length == 0.0 {
        return v;
    }

    v / length
}

/// Rotates `v` counter-clockwise by `angle` radians.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

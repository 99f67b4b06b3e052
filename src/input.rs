/// Input as seen by one tick.
///
/// The environment folds raw key and touch events into a snapshot before the
/// tick starts; the simulation never sees individual events.

use crate::entities::Canvas;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// A fire request arrived since the previous tick.
    pub fire: bool,
}

impl InputSnapshot {
    /// Translate a single touch into a compound direction + fire signal.
    ///
    /// The upper half of the canvas means up, the lower half down; the left
    /// half means left, the right half right. A touch always fires.
    pub fn from_touch(x: f32, y: f32, canvas: &Canvas) -> Self {
        let up = y < canvas.height / 2.0;
        let left = x < canvas.width / 2.0;
        Self {
            up,
            down: !up,
            left,
            right: !left,
            fire: true,
        }
    }

    /// Union of two snapshots (keyboard and touch in the same tick).
    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
            fire: self.fire || other.fire,
        }
    }

    /// -1, 0 or 1. Opposite directions cancel.
    pub fn horizontal(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    /// -1, 0 or 1 in canvas orientation (down is positive).
    pub fn vertical(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }
}

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Aabb {
    /// Box of the given size centered on (x, y).
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x - width / 2.0,
            bottom: y - height / 2.0,
            right: x + width / 2.0,
            top: y + height / 2.0,
        }
    }

    /// Strict overlap check; boxes that merely touch do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }
}

/// Anything on the playfield with a center position and a fixed hitbox.
pub trait Body {
    fn center(&self) -> (f32, f32);
    fn size(&self) -> (f32, f32);

    fn aabb(&self) -> Aabb {
        let (x, y) = self.center();
        let (width, height) = self.size();
        Aabb::centered(x, y, width, height)
    }

    fn left(&self) -> f32 {
        self.aabb().left
    }

    fn right(&self) -> f32 {
        self.aabb().right
    }

    fn bottom(&self) -> f32 {
        self.aabb().bottom
    }

    fn top(&self) -> f32 {
        self.aabb().top
    }

    fn collides_with(&self, other: &impl Body) -> bool {
        self.aabb().overlaps(&other.aabb())
    }
}

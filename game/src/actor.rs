use glam::Vec2;

/// Which of the three sprite colours an actor wears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Skin {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::One, Skin::Two, Skin::Three];

    /// Zero-based position in [`Skin::ALL`].
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

/// A crewmate or the impostor.
///
/// `alive` only ever goes from true to false, and only the collision pass
/// can flip it.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    skin: Skin,
    position: Vec2,
    impostor: bool,
    alive: bool,
    dragging: bool,
}

impl Actor {
    pub fn new(skin: Skin, position: Vec2, impostor: bool) -> Self {
        Self {
            skin,
            position,
            impostor,
            alive: true,
            dragging: false,
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_impostor(&self) -> bool {
        self.impostor
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn start_dragging(&mut self) {
        self.dragging = true;
    }

    pub fn stop_dragging(&mut self) {
        self.dragging = false;
    }

    /// Moves a dragged actor under the pointer. Returns whether it moved.
    pub fn follow(&mut self, pointer: Vec2) -> bool {
        if self.dragging {
            self.position = pointer;
        }
        self.dragging
    }

    pub(crate) fn unalive(&mut self) {
        self.alive = false;
    }
}

/// Visual asset handles.
///
/// Loading itself belongs to the environment. The core only needs to know,
/// per sprite, whether it can be drawn or the fallback fill must be used.
/// The environment flips a handle when its loading state changes; the render
/// pass reads the flag and never re-queries the asset.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Enemy,
    Projectile,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetState {
    #[default]
    Pending,
    Loaded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assets {
    player: AssetState,
    enemy: AssetState,
    projectile: AssetState,
}

impl Assets {
    /// Nothing loaded yet; everything renders with fallback fills.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn all_loaded() -> Self {
        Self {
            player: AssetState::Loaded,
            enemy: AssetState::Loaded,
            projectile: AssetState::Loaded,
        }
    }

    pub fn state(&self, sprite: SpriteId) -> AssetState {
        match sprite {
            SpriteId::Player => self.player,
            SpriteId::Enemy => self.enemy,
            SpriteId::Projectile => self.projectile,
        }
    }

    pub fn is_loaded(&self, sprite: SpriteId) -> bool {
        self.state(sprite) == AssetState::Loaded
    }

    pub fn set(&mut self, sprite: SpriteId, state: AssetState) {
        let slot = match sprite {
            SpriteId::Player => &mut self.player,
            SpriteId::Enemy => &mut self.enemy,
            SpriteId::Projectile => &mut self.projectile,
        };
        if *slot != state {
            log::debug!("sprite {:?}: {:?} -> {:?}", sprite, *slot, state);
            *slot = state;
        }
    }
}
